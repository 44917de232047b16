use std::path::PathBuf;

use armdoc::arm::{Metadata, ParseOptions, Value};

/// Parse flags shared by commands that read a template file.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
	/// Template file to read.
	pub path: PathBuf,
	/// Reject comments and trailing commas.
	#[arg(long)]
	pub strict: bool,
	/// Maximum nesting of arrays and objects.
	#[arg(long, default_value_t = ParseOptions::default().max_depth)]
	pub max_depth: usize,
}

impl SourceArgs {
	/// Parse options selected by the flags.
	pub fn parse_options(&self) -> ParseOptions {
		let base = if self.strict { ParseOptions::strict_json() } else { ParseOptions::default() };
		ParseOptions {
			max_depth: self.max_depth,
			..base
		}
	}
}

/// Output truncation limits for human-readable rendering.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Print attached comments under each entry.
	pub show_comments: bool,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 96,
			show_comments: true,
		}
	}
}

/// Render an inclusive line range as `[start-end]`.
pub(crate) fn render_lines(metadata: &Metadata) -> String {
	format!("[{}-{}]", metadata.start_line, metadata.end_line)
}

/// Render a value as a one-line summary.
pub(crate) fn render_value(value: &Value, options: PrintOptions) -> String {
	match &value.raw {
		serde_json::Value::String(text) => format!("\"{}\"", truncate(text, options.max_string_len)),
		serde_json::Value::Array(items) => format!("array[{}]", items.len()),
		serde_json::Value::Object(map) => format!("object{{{}}}", map.len()),
		other => other.to_string(),
	}
}

/// Print comments of `metadata` indented by `indent` spaces.
pub(crate) fn print_comments(metadata: &Metadata, indent: usize, options: PrintOptions) {
	if !options.show_comments {
		return;
	}
	let pad = " ".repeat(indent);
	for comment in &metadata.comments {
		for line in comment.lines() {
			println!("{pad}// {}", truncate(line.trim(), options.max_string_len));
		}
	}
}

/// Truncate to `max_len` Unicode scalar values, marking the cut.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

/// Sorted keys of a map for stable output.
pub(crate) fn sorted_keys<V>(map: &std::collections::HashMap<String, V>) -> Vec<&str> {
	let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
	keys.sort_unstable();
	keys
}
