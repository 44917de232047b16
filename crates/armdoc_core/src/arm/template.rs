use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::arm::decode::{expect_record, field};
use crate::arm::jsonc::{self, Node, ParseOptions};
use crate::arm::{Decode, Parameter, Resource, Result, Value};

/// Placeholder for user-defined template functions; bodies are not modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Function;

/// Root of a decoded ARM template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
	/// `$schema` member.
	#[serde(rename = "$schema")]
	pub schema: Value,
	/// `contentVersion` member.
	pub content_version: Value,
	/// `apiProfile` member.
	pub api_profile: Value,
	/// `parameters` member keyed by parameter name.
	pub parameters: HashMap<String, Parameter>,
	/// `variables` member keyed by variable name.
	pub variables: HashMap<String, Value>,
	/// Always empty.
	pub functions: Vec<Function>,
	/// `resources` member in source order.
	pub resources: Vec<Resource>,
	/// `outputs` member keyed by output name.
	pub outputs: HashMap<String, Value>,
}

impl Template {
	/// Parse and decode template text with default parse options.
	pub fn parse(input: &str) -> Result<Self> {
		decode_template(&jsonc::parse(input)?)
	}

	/// Read, parse, and decode a template file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_options(path, &ParseOptions::default())
	}

	/// Read, parse, and decode a template file with explicit parse options.
	pub fn open_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
		decode_template(&jsonc::parse_path(path, options)?)
	}

	/// Resources whose line range covers `line`.
	pub fn resources_at_line(&self, line: usize) -> impl Iterator<Item = &Resource> {
		self.resources.iter().filter(move |resource| resource.metadata.contains_line(line))
	}
}

impl Decode for Template {
	fn decode(node: &Node) -> Result<Self> {
		if !expect_record(node, "template object")? {
			return Ok(Self::default());
		}

		Ok(Self {
			schema: field(node, "$schema")?,
			content_version: field(node, "contentVersion")?,
			api_profile: field(node, "apiProfile")?,
			parameters: field(node, "parameters")?,
			variables: field(node, "variables")?,
			functions: Vec::new(),
			resources: field(node, "resources")?,
			outputs: field(node, "outputs")?,
		})
	}
}

/// Decode a parsed document root into a [`Template`].
///
/// Fails on the first node whose kind does not fit its declared shape; no partial template is
/// returned.
pub fn decode_template(root: &Node) -> Result<Template> {
	let template = root.decode::<Template>()?;
	debug!(
		parameters = template.parameters.len(),
		variables = template.variables.len(),
		resources = template.resources.len(),
		outputs = template.outputs.len(),
		"decoded template"
	);
	Ok(template)
}

#[cfg(test)]
mod tests;
