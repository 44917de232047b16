use std::fmt;

use serde_json::Number;

use crate::arm::{Decode, Result};

/// Structural category of a parsed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Node produced without a recognizable value.
	Unknown,
	/// `null` literal.
	Null,
	/// `true` or `false` literal.
	Boolean,
	/// Numeric literal.
	Number,
	/// Quoted string.
	String,
	/// `[...]` sequence.
	Array,
	/// `{...}` mapping.
	Object,
	/// Line or block comment.
	Comment,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unknown => "unknown",
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
			Self::Comment => "comment",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// 1-based line and column of one character in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// 1-based line number.
	pub line: usize,
	/// 1-based column, counted in Unicode scalar values.
	pub column: usize,
}

impl Position {
	/// Create a position from line and column.
	pub fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

/// Inclusive source span of a node, from its first to its last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
	/// Position of the first character.
	pub start: Position,
	/// Position of the last character.
	pub end: Position,
}

impl Range {
	/// Create a range from start and end positions.
	pub fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Range spanning whole lines, with columns set to 1.
	pub fn lines(start_line: usize, end_line: usize) -> Self {
		Self {
			start: Position::new(start_line, 1),
			end: Position::new(end_line, 1),
		}
	}
}

/// Payload carried by a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
	/// No recognizable value.
	Unknown,
	/// `null`.
	Null,
	/// Boolean literal.
	Boolean(bool),
	/// Numeric literal.
	Number(Number),
	/// Unescaped string contents.
	String(String),
	/// Comment text without delimiters.
	Comment(String),
	/// Array elements in source order.
	Array(Vec<Node>),
	/// Object members in source order, duplicates included.
	Object(Vec<Property>),
}

/// One `"key": value` member of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	/// Unescaped key text.
	pub key: String,
	/// Span of the quoted key.
	pub key_range: Range,
	/// Member value.
	pub value: Node,
}

/// Parsed JSON-with-comments node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	content: Content,
	range: Range,
	comments: Vec<Node>,
}

impl Node {
	/// Create a node without attached comments.
	pub fn new(content: Content, range: Range) -> Self {
		Self {
			content,
			range,
			comments: Vec::new(),
		}
	}

	/// Create a comment node.
	pub fn comment(text: impl Into<String>, range: Range) -> Self {
		Self::new(Content::Comment(text.into()), range)
	}

	/// Replace the attached comments.
	pub fn with_comments(mut self, comments: Vec<Node>) -> Self {
		self.comments = comments;
		self
	}

	/// Structural kind derived from the payload.
	pub fn kind(&self) -> Kind {
		match &self.content {
			Content::Unknown => Kind::Unknown,
			Content::Null => Kind::Null,
			Content::Boolean(_) => Kind::Boolean,
			Content::Number(_) => Kind::Number,
			Content::String(_) => Kind::String,
			Content::Comment(_) => Kind::Comment,
			Content::Array(_) => Kind::Array,
			Content::Object(_) => Kind::Object,
		}
	}

	/// Source span of the node.
	pub fn range(&self) -> Range {
		self.range
	}

	/// Line of the first character.
	pub fn start_line(&self) -> usize {
		self.range.start.line
	}

	/// Line of the last character.
	pub fn end_line(&self) -> usize {
		self.range.end.line
	}

	/// Comments attached to this node, in source order.
	pub fn comments(&self) -> &[Node] {
		&self.comments
	}

	/// Node payload.
	pub fn content(&self) -> &Content {
		&self.content
	}

	/// Array elements, or `None` for non-array nodes.
	pub fn elements(&self) -> Option<&[Node]> {
		match &self.content {
			Content::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object members, or `None` for non-object nodes.
	pub fn properties(&self) -> Option<&[Property]> {
		match &self.content {
			Content::Object(members) => Some(members),
			_ => None,
		}
	}

	/// Value of the last member named `key`.
	pub fn property(&self, key: &str) -> Option<&Node> {
		self.properties()?.iter().rev().find(|member| member.key == key).map(|member| &member.value)
	}

	/// Decode this node into any shape implementing [`Decode`].
	pub fn decode<T: Decode>(&self) -> Result<T> {
		T::decode(self)
	}

	pub(crate) fn prepend_comments(&mut self, mut leading: Vec<Node>) {
		if leading.is_empty() {
			return;
		}
		leading.append(&mut self.comments);
		self.comments = leading;
	}

	pub(crate) fn append_comments(&mut self, trailing: Vec<Node>) {
		self.comments.extend(trailing);
	}
}
