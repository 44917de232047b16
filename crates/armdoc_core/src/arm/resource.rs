use serde::Serialize;
use tracing::trace;

use crate::arm::decode::{expect_record, field};
use crate::arm::jsonc::Node;
use crate::arm::{Decode, MapValue, Metadata, Result, Value};

/// One entry of the template `resources` array.
///
/// Fields missing from the source keep their zero value: a null-typed [`Value`] or an empty
/// [`MapValue`], both with zeroed metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
	/// Source range and comments of the resource object.
	#[serde(flatten)]
	pub metadata: Metadata,
	/// `apiVersion` member.
	pub api_version: Value,
	/// `type` member, for example `Microsoft.Storage/storageAccounts`.
	#[serde(rename = "type")]
	pub resource_type: Value,
	/// `kind` member.
	pub kind: Value,
	/// `name` member.
	pub name: Value,
	/// `location` member.
	pub location: Value,
	/// `tags` member.
	pub tags: MapValue,
	/// `sku` member.
	pub sku: MapValue,
	/// `properties` member.
	pub properties: MapValue,
}

impl Decode for Resource {
	fn decode(node: &Node) -> Result<Self> {
		let fields = if expect_record(node, "resource object")? {
			Self {
				metadata: Metadata::default(),
				api_version: field(node, "apiVersion")?,
				resource_type: field(node, "type")?,
				kind: field(node, "kind")?,
				name: field(node, "name")?,
				location: field(node, "location")?,
				tags: field(node, "tags")?,
				sku: field(node, "sku")?,
				properties: field(node, "properties")?,
			}
		} else {
			Self::default()
		};
		let resource = Self {
			metadata: Metadata::from_node(node)?,
			..fields
		};

		trace!(
			resource_type = resource.resource_type.as_str().unwrap_or("?"),
			start_line = resource.metadata.start_line,
			end_line = resource.metadata.end_line,
			"decoded resource"
		);
		Ok(resource)
	}
}

/// One entry of the template `parameters` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
	/// Source range and comments of the parameter object.
	#[serde(flatten)]
	pub metadata: Metadata,
	/// `type` member, for example `string` or `securestring`.
	#[serde(rename = "type")]
	pub parameter_type: Value,
	/// `defaultValue` member.
	pub default_value: Value,
	/// `maxLength` member.
	pub max_length: Value,
	/// `minLength` member.
	pub min_length: Value,
}

impl Decode for Parameter {
	fn decode(node: &Node) -> Result<Self> {
		let fields = if expect_record(node, "parameter object")? {
			Self {
				metadata: Metadata::default(),
				parameter_type: field(node, "type")?,
				default_value: field(node, "defaultValue")?,
				max_length: field(node, "maxLength")?,
				min_length: field(node, "minLength")?,
			}
		} else {
			Self::default()
		};
		Ok(Self {
			metadata: Metadata::from_node(node)?,
			..fields
		})
	}
}
