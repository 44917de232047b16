use armdoc::arm::{Resource, Result, Template};
use serde::Serialize;

use crate::cmd::util::{SourceArgs, render_lines};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Print resources as a JSON array.
	#[arg(long)]
	pub json: bool,
}

/// One resource summary row.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceRow<'a> {
	#[serde(rename = "type")]
	resource_type: &'a serde_json::Value,
	name: &'a serde_json::Value,
	start_line: usize,
	end_line: usize,
	comments: &'a [String],
}

impl<'a> From<&'a Resource> for ResourceRow<'a> {
	fn from(resource: &'a Resource) -> Self {
		Self {
			resource_type: &resource.resource_type.raw,
			name: &resource.name.raw,
			start_line: resource.metadata.start_line,
			end_line: resource.metadata.end_line,
			comments: &resource.metadata.comments,
		}
	}
}

/// List resources with type, name, and source lines.
pub fn run(args: Args) -> Result<()> {
	let Args { source, json } = args;
	let template = Template::open_with_options(&source.path, &source.parse_options())?;

	if json {
		let rows: Vec<ResourceRow<'_>> = template.resources.iter().map(ResourceRow::from).collect();
		println!("{}", serde_json::to_string_pretty(&rows)?);
		return Ok(());
	}

	for resource in &template.resources {
		println!(
			"{} {} {}",
			render_lines(&resource.metadata),
			resource.resource_type.as_str().unwrap_or("-"),
			resource.name.as_str().unwrap_or("-")
		);
	}
	Ok(())
}
