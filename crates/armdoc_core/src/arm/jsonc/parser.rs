use std::path::Path;

use serde_json::Number;
use tracing::debug;

use crate::arm::jsonc::cursor::Cursor;
use crate::arm::jsonc::{Content, Node, Position, Property, Range};
use crate::arm::{ArmError, Result};

/// Grammar switches and limits for JSON-with-comments parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
	/// Maximum nesting of arrays and objects.
	pub max_depth: usize,
	/// Accept `//` and `/* */` comments.
	pub allow_comments: bool,
	/// Accept a comma before a closing `]` or `}`.
	pub allow_trailing_commas: bool,
}

impl Default for ParseOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			allow_comments: true,
			allow_trailing_commas: true,
		}
	}
}

impl ParseOptions {
	/// Preset that accepts plain RFC 8259 JSON only.
	pub fn strict_json() -> Self {
		Self {
			allow_comments: false,
			allow_trailing_commas: false,
			..Self::default()
		}
	}
}

/// Parse one JSON-with-comments document using default options.
pub fn parse(input: &str) -> Result<Node> {
	parse_with_options(input, &ParseOptions::default())
}

/// Parse one JSON-with-comments document.
///
/// Comments are attached to the next value parsed. Comments left over at the end of a container
/// attach to that container, and comments after the root value attach to the root.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Node> {
	let input = input.strip_prefix('\u{feff}').unwrap_or(input);
	let mut parser = Parser {
		cursor: Cursor::new(input),
		options,
	};

	let mut root = parser.parse_value(0)?;
	let trailing = parser.skip_trivia()?;
	if parser.cursor.peek().is_some() {
		let at = parser.cursor.position();
		return Err(ArmError::TrailingContent {
			line: at.line,
			column: at.column,
		});
	}
	root.append_comments(trailing);

	debug!(kind = %root.kind(), lines = root.end_line(), "parsed jsonc document");
	Ok(root)
}

/// Read and parse a JSON-with-comments file.
pub fn parse_path(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Node> {
	let path = path.as_ref();
	let text = std::fs::read_to_string(path)?;
	debug!(path = %path.display(), bytes = text.len(), "read jsonc file");
	parse_with_options(&text, options)
}

struct Parser<'a, 'o> {
	cursor: Cursor<'a>,
	options: &'o ParseOptions,
}

impl Parser<'_, '_> {
	fn parse_value(&mut self, depth: usize) -> Result<Node> {
		let leading = self.skip_trivia()?;
		let mut node = self.parse_bare(depth)?;
		node.prepend_comments(leading);
		Ok(node)
	}

	fn parse_bare(&mut self, depth: usize) -> Result<Node> {
		let start = self.cursor.position();
		match self.cursor.peek() {
			None => Err(eof(start)),
			Some('{') => self.parse_object(depth),
			Some('[') => self.parse_array(depth),
			Some('"') => {
				let text = self.parse_string()?;
				Ok(Node::new(Content::String(text), self.span_from(start)))
			}
			Some(ch) if ch == '-' || ch.is_ascii_digit() => self.parse_number(),
			Some(ch) if ch.is_ascii_alphabetic() => self.parse_literal(),
			Some(found) => Err(ArmError::UnexpectedChar {
				found,
				line: start.line,
				column: start.column,
			}),
		}
	}

	fn parse_object(&mut self, depth: usize) -> Result<Node> {
		let start = self.cursor.position();
		self.enter(depth, start)?;
		self.cursor.bump();

		let mut properties = Vec::new();
		let mut pending = self.skip_trivia()?;
		if !self.cursor.eat('}') {
			loop {
				let property = self.parse_property(depth, &mut pending)?;
				properties.push(property);

				pending.extend(self.skip_trivia()?);
				if self.cursor.eat('}') {
					break;
				}
				self.expect(',')?;
				pending.extend(self.skip_trivia()?);
				if self.options.allow_trailing_commas && self.cursor.eat('}') {
					break;
				}
			}
		}

		Ok(Node::new(Content::Object(properties), self.span_from(start)).with_comments(pending))
	}

	fn parse_property(&mut self, depth: usize, pending: &mut Vec<Node>) -> Result<Property> {
		let key_start = self.cursor.position();
		if self.cursor.peek() != Some('"') {
			return Err(self.unexpected());
		}
		let key = self.parse_string()?;
		let key_range = self.span_from(key_start);

		pending.extend(self.skip_trivia()?);
		self.expect(':')?;
		let mut value = self.parse_value(depth + 1)?;
		value.prepend_comments(std::mem::take(pending));

		Ok(Property { key, key_range, value })
	}

	fn parse_array(&mut self, depth: usize) -> Result<Node> {
		let start = self.cursor.position();
		self.enter(depth, start)?;
		self.cursor.bump();

		let mut items = Vec::new();
		let mut pending = self.skip_trivia()?;
		if !self.cursor.eat(']') {
			loop {
				let mut item = self.parse_value(depth + 1)?;
				item.prepend_comments(std::mem::take(&mut pending));
				items.push(item);

				pending.extend(self.skip_trivia()?);
				if self.cursor.eat(']') {
					break;
				}
				self.expect(',')?;
				pending.extend(self.skip_trivia()?);
				if self.options.allow_trailing_commas && self.cursor.eat(']') {
					break;
				}
			}
		}

		Ok(Node::new(Content::Array(items), self.span_from(start)).with_comments(pending))
	}

	fn parse_string(&mut self) -> Result<String> {
		self.expect('"')?;
		let mut out = String::new();
		loop {
			let at = self.cursor.position();
			match self.cursor.bump() {
				None => return Err(eof(at)),
				Some('"') => return Ok(out),
				Some('\\') => out.push(self.parse_escape(at)?),
				Some(found) if u32::from(found) < 0x20 => {
					return Err(ArmError::UnexpectedChar {
						found,
						line: at.line,
						column: at.column,
					});
				}
				Some(ch) => out.push(ch),
			}
		}
	}

	fn parse_escape(&mut self, at: Position) -> Result<char> {
		let invalid = move || ArmError::InvalidEscape {
			line: at.line,
			column: at.column,
		};
		let ch = match self.cursor.bump() {
			Some('"') => '"',
			Some('\\') => '\\',
			Some('/') => '/',
			Some('b') => '\u{8}',
			Some('f') => '\u{c}',
			Some('n') => '\n',
			Some('r') => '\r',
			Some('t') => '\t',
			Some('u') => {
				let high = self.parse_hex4().ok_or_else(invalid)?;
				if !(0xD800..0xDC00).contains(&high) {
					return char::from_u32(high).ok_or_else(invalid);
				}
				if !(self.cursor.eat('\\') && self.cursor.eat('u')) {
					return Err(invalid());
				}
				let low = self.parse_hex4().ok_or_else(invalid)?;
				if !(0xDC00..0xE000).contains(&low) {
					return Err(invalid());
				}
				let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
				return char::from_u32(combined).ok_or_else(invalid);
			}
			_ => return Err(invalid()),
		};
		Ok(ch)
	}

	fn parse_hex4(&mut self) -> Option<u32> {
		let mut value = 0_u32;
		for _ in 0..4 {
			let digit = self.cursor.peek()?.to_digit(16)?;
			self.cursor.bump();
			value = value * 16 + digit;
		}
		Some(value)
	}

	fn parse_number(&mut self) -> Result<Node> {
		let start = self.cursor.position();
		let text = self.cursor.take_while(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'));
		let number = serde_json::from_str::<Number>(text).map_err(|_| ArmError::InvalidNumber {
			text: text.to_owned(),
			line: start.line,
			column: start.column,
		})?;
		Ok(Node::new(Content::Number(number), self.span_from(start)))
	}

	fn parse_literal(&mut self) -> Result<Node> {
		let start = self.cursor.position();
		let word = self.cursor.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
		let content = match word {
			"true" => Content::Boolean(true),
			"false" => Content::Boolean(false),
			"null" => Content::Null,
			_ => {
				return Err(ArmError::InvalidLiteral {
					text: word.to_owned(),
					line: start.line,
					column: start.column,
				});
			}
		};
		Ok(Node::new(content, self.span_from(start)))
	}

	/// Skip whitespace and collect comment nodes in encounter order.
	fn skip_trivia(&mut self) -> Result<Vec<Node>> {
		let mut comments = Vec::new();
		loop {
			self.cursor.take_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r'));
			if self.cursor.peek() != Some('/') {
				return Ok(comments);
			}

			let start = self.cursor.position();
			if !self.options.allow_comments {
				return Err(ArmError::CommentNotAllowed {
					line: start.line,
					column: start.column,
				});
			}
			self.cursor.bump();
			match self.cursor.peek() {
				Some('/') => {
					self.cursor.bump();
					let text = self.cursor.take_while(|ch| ch != '\n');
					let text = text.strip_suffix('\r').unwrap_or(text);
					comments.push(Node::comment(text, self.span_from(start)));
				}
				Some('*') => {
					self.cursor.bump();
					comments.push(self.parse_block_comment(start)?);
				}
				_ => {
					return Err(ArmError::UnexpectedChar {
						found: '/',
						line: start.line,
						column: start.column,
					});
				}
			}
		}
	}

	fn parse_block_comment(&mut self, start: Position) -> Result<Node> {
		let mut text = String::new();
		loop {
			match self.cursor.bump() {
				None => {
					return Err(ArmError::UnterminatedComment {
						line: start.line,
						column: start.column,
					});
				}
				Some('*') if self.cursor.eat('/') => {
					return Ok(Node::comment(text, self.span_from(start)));
				}
				Some(ch) => text.push(ch),
			}
		}
	}

	fn enter(&self, depth: usize, at: Position) -> Result<()> {
		if depth >= self.options.max_depth {
			return Err(ArmError::DepthExceeded {
				max_depth: self.options.max_depth,
				line: at.line,
			});
		}
		Ok(())
	}

	fn expect(&mut self, expected: char) -> Result<()> {
		if self.cursor.eat(expected) {
			Ok(())
		} else {
			Err(self.unexpected())
		}
	}

	fn unexpected(&self) -> ArmError {
		let at = self.cursor.position();
		match self.cursor.peek() {
			Some(found) => ArmError::UnexpectedChar {
				found,
				line: at.line,
				column: at.column,
			},
			None => eof(at),
		}
	}

	fn span_from(&self, start: Position) -> Range {
		Range::new(start, self.cursor.last_position())
	}
}

fn eof(at: Position) -> ArmError {
	ArmError::UnexpectedEof {
		line: at.line,
		column: at.column,
	}
}
