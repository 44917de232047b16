use thiserror::Error;

use crate::arm::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ArmError>;

/// Errors produced while parsing JSON-with-comments text and decoding template trees.
#[derive(Debug, Error)]
pub enum ArmError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON serialization failure while emitting decoded output.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Input ended inside a value.
	#[error("unexpected end of input at {line}:{column}")]
	UnexpectedEof {
		/// 1-based line where input ran out.
		line: usize,
		/// 1-based column where input ran out.
		column: usize,
	},
	/// Character not valid at this point of the grammar.
	#[error("unexpected character {found:?} at {line}:{column}")]
	UnexpectedChar {
		/// Offending character.
		found: char,
		/// 1-based line of the character.
		line: usize,
		/// 1-based column of the character.
		column: usize,
	},
	/// Bare word that is not `true`, `false`, or `null`.
	#[error("invalid literal {text:?} at {line}:{column}")]
	InvalidLiteral {
		/// Word as written in the source.
		text: String,
		/// 1-based line of the word.
		line: usize,
		/// 1-based column of the word.
		column: usize,
	},
	/// Number token that does not follow JSON number grammar.
	#[error("invalid number {text:?} at {line}:{column}")]
	InvalidNumber {
		/// Number token as written in the source.
		text: String,
		/// 1-based line of the token.
		line: usize,
		/// 1-based column of the token.
		column: usize,
	},
	/// Malformed backslash escape inside a string.
	#[error("invalid escape sequence at {line}:{column}")]
	InvalidEscape {
		/// 1-based line of the escape.
		line: usize,
		/// 1-based column of the escape.
		column: usize,
	},
	/// Block comment without closing `*/`.
	#[error("unterminated comment starting at {line}:{column}")]
	UnterminatedComment {
		/// 1-based line of the comment opener.
		line: usize,
		/// 1-based column of the comment opener.
		column: usize,
	},
	/// Comment found while comments are disabled.
	#[error("comments are not allowed (found at {line}:{column})")]
	CommentNotAllowed {
		/// 1-based line of the comment opener.
		line: usize,
		/// 1-based column of the comment opener.
		column: usize,
	},
	/// Non-trivia content after the root value.
	#[error("trailing content at {line}:{column}")]
	TrailingContent {
		/// 1-based line of the first trailing character.
		line: usize,
		/// 1-based column of the first trailing character.
		column: usize,
	},
	/// Container nesting exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth}) at line {line}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
		/// 1-based line of the container that crossed the limit.
		line: usize,
	},
	/// Node kind cannot be decoded into the requested shape.
	#[error("kind mismatch at line {line}: expected {expected}, got {found}")]
	KindMismatch {
		/// Shape requested by the caller.
		expected: &'static str,
		/// Kind reported by the node.
		found: Kind,
		/// 1-based start line of the node.
		line: usize,
	},
	/// Attached comment node could not be decoded to text.
	#[error("comment decode failed at line {line}: node kind {found}")]
	CommentDecode {
		/// Kind reported by the comment node.
		found: Kind,
		/// 1-based start line of the comment node.
		line: usize,
	},
	/// Node kind lies outside the closed set of value kinds.
	#[error("unrecognized value kind {kind} at line {line}")]
	UnrecognizedKind {
		/// Kind reported by the node.
		kind: Kind,
		/// 1-based start line of the node.
		line: usize,
	},
}
