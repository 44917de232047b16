use crate::arm::jsonc::Position;

/// Character cursor over source text with line and column tracking.
pub(crate) struct Cursor<'a> {
	src: &'a str,
	pos: usize,
	here: Position,
	last: Position,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at line 1, column 1.
	pub(crate) fn new(src: &'a str) -> Self {
		let start = Position::new(1, 1);
		Self {
			src,
			pos: 0,
			here: start,
			last: start,
		}
	}

	/// Position of the next unread character.
	pub(crate) fn position(&self) -> Position {
		self.here
	}

	/// Position of the most recently consumed character.
	pub(crate) fn last_position(&self) -> Position {
		self.last
	}

	/// Look at the next character without consuming it.
	pub(crate) fn peek(&self) -> Option<char> {
		self.src[self.pos..].chars().next()
	}

	/// Consume and return the next character.
	pub(crate) fn bump(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		self.last = self.here;
		if ch == '\n' {
			self.here.line += 1;
			self.here.column = 1;
		} else {
			self.here.column += 1;
		}
		Some(ch)
	}

	/// Consume the next character if it equals `expected`.
	pub(crate) fn eat(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.bump();
			true
		} else {
			false
		}
	}

	/// Consume characters while `pred` holds and return them as a slice.
	pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
		let start = self.pos;
		while let Some(ch) = self.peek() {
			if !pred(ch) {
				break;
			}
			self.bump();
		}
		&self.src[start..self.pos]
	}
}
