use armdoc::arm::{Result, Template};

use crate::cmd::util::{PrintOptions, SourceArgs, print_comments, render_lines, render_value, sorted_keys};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: SourceArgs,
	/// Print the decoded template as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Decode a template and print its fields with source lines.
pub fn run(args: Args) -> Result<()> {
	let Args { source, json } = args;

	let template = Template::open_with_options(&source.path, &source.parse_options())?;
	if json {
		println!("{}", serde_json::to_string_pretty(&template)?);
		return Ok(());
	}

	println!("path: {}", source.path.display());
	print_template(&template, PrintOptions::default());
	Ok(())
}

fn print_template(template: &Template, options: PrintOptions) {
	println!("schema: {}", render_value(&template.schema, options));
	println!("content_version: {}", render_value(&template.content_version, options));
	if !template.api_profile.is_null() {
		println!("api_profile: {}", render_value(&template.api_profile, options));
	}

	println!("parameters: {}", template.parameters.len());
	for name in sorted_keys(&template.parameters) {
		let parameter = &template.parameters[name];
		print!("  {name} {} type={}", render_lines(&parameter.metadata), render_value(&parameter.parameter_type, options));
		if !parameter.default_value.is_null() {
			print!(" default={}", render_value(&parameter.default_value, options));
		}
		println!();
		print_comments(&parameter.metadata, 4, options);
	}

	println!("variables: {}", template.variables.len());
	for name in sorted_keys(&template.variables) {
		let value = &template.variables[name];
		println!("  {name} {} = {}", render_lines(&value.metadata), render_value(value, options));
		print_comments(&value.metadata, 4, options);
	}

	println!("resources: {}", template.resources.len());
	for resource in &template.resources {
		println!(
			"  {} {} name={}",
			render_lines(&resource.metadata),
			render_value(&resource.resource_type, options),
			render_value(&resource.name, options)
		);
		print_comments(&resource.metadata, 4, options);
		for key in resource.properties.keys() {
			if let Some(value) = resource.properties.get(key) {
				println!("    {key} {} = {}", render_lines(&value.metadata), render_value(value, options));
				print_comments(&value.metadata, 6, options);
			}
		}
	}

	println!("outputs: {}", template.outputs.len());
	for name in sorted_keys(&template.outputs) {
		let value = &template.outputs[name];
		println!("  {name} {} {}", render_lines(&value.metadata), value.value_type);
		print_comments(&value.metadata, 4, options);
	}
}
