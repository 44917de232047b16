use std::collections::HashMap;

use serde_json::json;

use crate::arm::jsonc::{Content, Range, parse};
use crate::arm::{ArmError, Kind, Node};

#[test]
fn generic_payload_mirrors_nested_structure() {
	let node = parse(r#"{"a": [1, "x", {"b": null}], "c": true, "d": -2.5}"#).expect("document parses");
	let raw = node.decode::<serde_json::Value>().expect("generic decode succeeds");
	assert_eq!(raw, json!({"a": [1, "x", {"b": null}], "c": true, "d": -2.5}));
}

#[test]
fn generic_payload_rejects_comment_and_unknown_kinds() {
	let comment = Node::comment("note", Range::lines(3, 3));
	let err = comment.decode::<serde_json::Value>().expect_err("comment is not a value");
	assert!(matches!(err, ArmError::UnrecognizedKind { kind: Kind::Comment, line: 3 }));

	let unknown = Node::new(Content::Unknown, Range::lines(7, 7));
	let err = unknown.decode::<serde_json::Value>().expect_err("unknown is not a value");
	assert!(matches!(err, ArmError::UnrecognizedKind { kind: Kind::Unknown, line: 7 }));
}

#[test]
fn primitives_check_kind() {
	let node = parse("\n\n12").expect("number parses");
	assert_eq!(node.decode::<f64>().expect("number decodes"), 12.0);

	let err = node.decode::<String>().expect_err("number is not a string");
	assert!(matches!(
		err,
		ArmError::KindMismatch {
			expected: "string",
			found: Kind::Number,
			line: 3
		}
	));

	let err = node.decode::<bool>().expect_err("number is not a boolean");
	assert!(matches!(err, ArmError::KindMismatch { expected: "boolean", .. }));
}

#[test]
fn comment_nodes_decode_to_text() {
	let comment = Node::comment(" raw text ", Range::lines(1, 1));
	assert_eq!(comment.decode::<String>().expect("comment decodes"), " raw text ");
}

#[test]
fn containers_accept_null_as_empty() {
	let node = parse("null").expect("null parses");
	assert!(node.decode::<Vec<f64>>().expect("null sequence").is_empty());
	assert!(node.decode::<HashMap<String, f64>>().expect("null mapping").is_empty());
}

#[test]
fn containers_reject_other_kinds() {
	let node = parse("[1, 2]").expect("array parses");
	let err = node.decode::<HashMap<String, f64>>().expect_err("array is not an object");
	assert!(matches!(err, ArmError::KindMismatch { expected: "object", found: Kind::Array, .. }));

	let node = parse("{}").expect("object parses");
	let err = node.decode::<Vec<f64>>().expect_err("object is not an array");
	assert!(matches!(err, ArmError::KindMismatch { expected: "array", found: Kind::Object, .. }));
}

#[test]
fn nested_failure_reports_innermost_node() {
	let node = parse("[\n  1,\n  \"two\"\n]").expect("array parses");
	let err = node.decode::<Vec<f64>>().expect_err("string element fails");
	assert!(matches!(
		err,
		ArmError::KindMismatch {
			expected: "number",
			found: Kind::String,
			line: 3
		}
	));
}

#[test]
fn mapping_keeps_last_duplicate() {
	let node = parse(r#"{"a": 1, "b": 2, "a": 3}"#).expect("object parses");
	let map = node.decode::<HashMap<String, f64>>().expect("mapping decodes");
	assert_eq!(map.len(), 2);
	assert_eq!(map["a"], 3.0);
}
