use serde_json::Number;

use crate::arm::jsonc::{Content, Position, Range};
use crate::arm::{ArmError, Kind, Metadata, Node};

#[test]
fn stamps_lines_and_comments_in_order() {
	let node = Node::new(Content::Null, Range::new(Position::new(4, 5), Position::new(9, 2))).with_comments(vec![
		Node::comment("first", Range::lines(2, 2)),
		Node::comment("second", Range::lines(3, 3)),
	]);

	let metadata = Metadata::from_node(&node).expect("metadata stamps");
	assert_eq!(metadata.start_line, 4);
	assert_eq!(metadata.end_line, 9);
	assert_eq!(metadata.comments, vec!["first".to_owned(), "second".to_owned()]);
}

#[test]
fn non_text_comment_fails() {
	let node = Node::new(Content::Null, Range::lines(6, 6)).with_comments(vec![
		Node::comment("fine", Range::lines(4, 4)),
		Node::new(Content::Number(Number::from(1)), Range::lines(5, 5)),
	]);

	let err = Metadata::from_node(&node).expect_err("number comment rejected");
	assert!(matches!(err, ArmError::CommentDecode { found: Kind::Number, line: 5 }));
}

#[test]
fn contains_line_is_inclusive() {
	let metadata = Metadata {
		start_line: 3,
		end_line: 5,
		comments: Vec::new(),
	};
	assert!(!metadata.contains_line(2));
	assert!(metadata.contains_line(3));
	assert!(metadata.contains_line(5));
	assert!(!metadata.contains_line(6));
}
