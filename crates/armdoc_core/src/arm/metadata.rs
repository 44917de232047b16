use serde::Serialize;

use crate::arm::jsonc::Node;
use crate::arm::{ArmError, Result};

/// Source line range and attached comments of a decoded node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
	/// 1-based line where the node starts.
	pub start_line: usize,
	/// 1-based line where the node ends; never before `start_line`.
	pub end_line: usize,
	/// Raw comment text in source order.
	pub comments: Vec<String>,
}

impl Metadata {
	/// Stamp metadata from a node's range and attached comments.
	///
	/// Fails with [`ArmError::CommentDecode`] when any attached comment is not text.
	pub fn from_node(node: &Node) -> Result<Self> {
		let range = node.range();
		let mut comments = Vec::with_capacity(node.comments().len());
		for comment in node.comments() {
			let text = comment.decode::<String>().map_err(|_| ArmError::CommentDecode {
				found: comment.kind(),
				line: comment.start_line(),
			})?;
			comments.push(text);
		}

		Ok(Self {
			start_line: range.start.line,
			end_line: range.end.line,
			comments,
		})
	}

	/// Whether `line` falls inside this node's line range.
	pub fn contains_line(&self, line: usize) -> bool {
		self.start_line <= line && line <= self.end_line
	}
}

#[cfg(test)]
mod tests;
