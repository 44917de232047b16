use std::collections::HashMap;

use serde_json::Map;

use crate::arm::jsonc::{Content, Kind, Node};
use crate::arm::{ArmError, Result};

/// Shape that can be populated from a parsed node.
///
/// Implementations decode their children through [`Node::decode`], so every nested shape applies
/// the same contract recursively.
pub trait Decode: Sized {
	/// Build `Self` from `node`, failing when the node kind does not fit the shape.
	fn decode(node: &Node) -> Result<Self>;
}

impl Decode for serde_json::Value {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::Null => Ok(Self::Null),
			Content::Boolean(value) => Ok(Self::Bool(*value)),
			Content::Number(value) => Ok(Self::Number(value.clone())),
			Content::String(value) => Ok(Self::String(value.clone())),
			Content::Array(items) => items.iter().map(Self::decode).collect::<Result<Vec<_>>>().map(Self::Array),
			Content::Object(members) => {
				let mut map = Map::new();
				for member in members {
					map.insert(member.key.clone(), Self::decode(&member.value)?);
				}
				Ok(Self::Object(map))
			}
			Content::Comment(_) | Content::Unknown => Err(ArmError::UnrecognizedKind {
				kind: node.kind(),
				line: node.start_line(),
			}),
		}
	}
}

impl Decode for String {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::String(text) | Content::Comment(text) => Ok(text.clone()),
			_ => Err(mismatch("string", node)),
		}
	}
}

impl Decode for bool {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::Boolean(value) => Ok(*value),
			_ => Err(mismatch("boolean", node)),
		}
	}
}

impl Decode for f64 {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::Number(value) => value.as_f64().ok_or_else(|| mismatch("number", node)),
			_ => Err(mismatch("number", node)),
		}
	}
}

/// Arrays decode element-wise; `null` decodes to an empty sequence.
impl<T: Decode> Decode for Vec<T> {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::Array(items) => items.iter().map(Node::decode::<T>).collect(),
			Content::Null => Ok(Vec::new()),
			_ => Err(mismatch("array", node)),
		}
	}
}

/// Objects decode member-wise with the last duplicate key winning; `null` decodes to an empty map.
impl<T: Decode> Decode for HashMap<String, T> {
	fn decode(node: &Node) -> Result<Self> {
		match node.content() {
			Content::Object(members) => {
				let mut out = HashMap::with_capacity(members.len());
				for member in members {
					out.insert(member.key.clone(), member.value.decode()?);
				}
				Ok(out)
			}
			Content::Null => Ok(HashMap::new()),
			_ => Err(mismatch("object", node)),
		}
	}
}

/// Check that `node` can populate a fixed-field record.
///
/// Returns `false` for `null`, where every field keeps its zero value.
pub(crate) fn expect_record(node: &Node, expected: &'static str) -> Result<bool> {
	match node.kind() {
		Kind::Object => Ok(true),
		Kind::Null => Ok(false),
		_ => Err(mismatch(expected, node)),
	}
}

/// Decode the member `key` of a record node, or the zero value when absent.
pub(crate) fn field<T: Decode + Default>(node: &Node, key: &str) -> Result<T> {
	match node.property(key) {
		Some(value) => value.decode(),
		None => Ok(T::default()),
	}
}

pub(crate) fn mismatch(expected: &'static str, node: &Node) -> ArmError {
	ArmError::KindMismatch {
		expected,
		found: node.kind(),
		line: node.start_line(),
	}
}

#[cfg(test)]
mod tests;
