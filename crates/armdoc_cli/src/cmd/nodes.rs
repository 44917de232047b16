use armdoc::arm::jsonc::{self, Content, Node, Range};
use armdoc::arm::Result;
use serde_json::json;

use crate::cmd::util::{SourceArgs, truncate};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Print the node tree as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Parse a file and dump its node tree with ranges and comments.
pub fn run(args: Args) -> Result<()> {
	let Args { source, json } = args;
	let root = jsonc::parse_path(&source.path, &source.parse_options())?;

	if json {
		println!("{}", serde_json::to_string_pretty(&node_json(&root))?);
	} else {
		print_node(&root, None, 0);
	}
	Ok(())
}

fn node_json(node: &Node) -> serde_json::Value {
	let comments: Vec<serde_json::Value> = node.comments().iter().map(node_json).collect();
	let mut out = json!({
		"kind": node.kind().as_str(),
		"range": range_json(node.range()),
		"comments": comments,
	});

	match node.content() {
		Content::Array(items) => {
			out["items"] = items.iter().map(node_json).collect();
		}
		Content::Object(members) => {
			out["members"] = members
				.iter()
				.map(|member| {
					json!({
						"key": member.key,
						"keyRange": range_json(member.key_range),
						"value": node_json(&member.value),
					})
				})
				.collect();
		}
		Content::Null => out["value"] = serde_json::Value::Null,
		Content::Boolean(value) => out["value"] = json!(value),
		Content::Number(value) => out["value"] = serde_json::Value::Number(value.clone()),
		Content::String(text) | Content::Comment(text) => out["value"] = json!(text),
		Content::Unknown => {}
	}
	out
}

fn range_json(range: Range) -> serde_json::Value {
	json!({
		"start": { "line": range.start.line, "column": range.start.column },
		"end": { "line": range.end.line, "column": range.end.column },
	})
}

fn print_node(node: &Node, key: Option<&str>, indent: usize) {
	let pad = " ".repeat(indent);
	for comment in node.comments() {
		if let Content::Comment(text) = comment.content() {
			println!("{pad}// {} {}", render_range(comment.range()), truncate(text.trim(), 80));
		}
	}

	let label = key.map(|name| format!("\"{name}\": ")).unwrap_or_default();
	let range = render_range(node.range());
	match node.content() {
		Content::Array(items) => {
			println!("{pad}{label}array {range} ({} items)", items.len());
			for item in items {
				print_node(item, None, indent + 2);
			}
		}
		Content::Object(members) => {
			println!("{pad}{label}object {range} ({} members)", members.len());
			for member in members {
				print_node(&member.value, Some(&member.key), indent + 2);
			}
		}
		Content::String(text) => println!("{pad}{label}string {range} \"{}\"", truncate(text, 80)),
		Content::Number(value) => println!("{pad}{label}number {range} {value}"),
		Content::Boolean(value) => println!("{pad}{label}boolean {range} {value}"),
		Content::Null => println!("{pad}{label}null {range}"),
		Content::Comment(text) => println!("{pad}{label}comment {range} {}", truncate(text.trim(), 80)),
		Content::Unknown => println!("{pad}{label}unknown {range}"),
	}
}

fn render_range(range: Range) -> String {
	format!("{}:{}-{}:{}", range.start.line, range.start.column, range.end.line, range.end.column)
}
