use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::arm::jsonc::{Kind, Node};
use crate::arm::{ArmError, Decode, Metadata, Result};

/// Type tag of a decoded [`Value`], matching the source node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
	/// `null`, also the tag of absent fields.
	#[default]
	Null,
	/// `true` or `false`.
	Boolean,
	/// Quoted string.
	String,
	/// Numeric literal.
	Number,
	/// Mapping.
	Object,
	/// Sequence.
	Array,
}

impl Type {
	/// Map a node kind onto its value type; `None` outside the closed value set.
	pub fn from_kind(kind: Kind) -> Option<Self> {
		match kind {
			Kind::String => Some(Self::String),
			Kind::Number => Some(Self::Number),
			Kind::Boolean => Some(Self::Boolean),
			Kind::Object => Some(Self::Object),
			Kind::Null => Some(Self::Null),
			Kind::Array => Some(Self::Array),
			Kind::Comment | Kind::Unknown => None,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Boolean => "boolean",
			Self::String => "string",
			Self::Number => "number",
			Self::Object => "object",
			Self::Array => "array",
		}
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Dynamically typed value stamped with its source metadata.
///
/// Object and array payloads are kept untyped in `raw`; decode the same node as [`MapValue`] or
/// [`SliceValue`] to get per-entry metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Value {
	/// Source range and comments.
	#[serde(flatten)]
	pub metadata: Metadata,
	/// Untyped payload.
	pub raw: serde_json::Value,
	/// Type tag of `raw`.
	#[serde(rename = "type")]
	pub value_type: Type,
}

impl Value {
	/// String payload, if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		self.raw.as_str()
	}

	/// Boolean payload, if this is a boolean.
	pub fn as_bool(&self) -> Option<bool> {
		self.raw.as_bool()
	}

	/// Numeric payload widened to `f64`, if this is a number.
	pub fn as_f64(&self) -> Option<f64> {
		self.raw.as_f64()
	}

	/// Whether the value is `null` or was absent from the source.
	pub fn is_null(&self) -> bool {
		self.value_type == Type::Null
	}
}

impl Decode for Value {
	fn decode(node: &Node) -> Result<Self> {
		let raw = node.decode::<serde_json::Value>()?;
		let value_type = Type::from_kind(node.kind()).ok_or(ArmError::UnrecognizedKind {
			kind: node.kind(),
			line: node.start_line(),
		})?;
		let metadata = Metadata::from_node(node)?;

		Ok(Self { metadata, raw, value_type })
	}
}

/// Object whose entries each carry their own metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapValue {
	/// Source range and comments of the object itself.
	#[serde(flatten)]
	pub metadata: Metadata,
	/// Entries keyed by member name; iteration order is unspecified.
	pub entries: HashMap<String, Value>,
}

impl MapValue {
	/// Entry named `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate entries in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Entry keys sorted for stable presentation.
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}
}

impl Decode for MapValue {
	fn decode(node: &Node) -> Result<Self> {
		let entries = node.decode::<HashMap<String, Value>>()?;
		let metadata = Metadata::from_node(node)?;
		Ok(Self { metadata, entries })
	}
}

/// Array whose elements each carry their own metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SliceValue {
	/// Source range and comments of the array itself.
	#[serde(flatten)]
	pub metadata: Metadata,
	/// Elements in source order.
	pub entries: Vec<Value>,
}

impl SliceValue {
	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.entries.get(index)
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the slice has no elements.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate elements in source order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.entries.iter()
	}
}

impl Decode for SliceValue {
	fn decode(node: &Node) -> Result<Self> {
		let entries = node.decode::<Vec<Value>>()?;
		let metadata = Metadata::from_node(node)?;
		Ok(Self { metadata, entries })
	}
}
