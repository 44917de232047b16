#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "armdoc", about = "ARM template inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a template and print its fields with source lines.
	Decode(cmd::decode::Args),
	/// Dump the raw JSON-with-comments node tree.
	Nodes(cmd::nodes::Args),
	/// List resources with their source lines.
	Resources(cmd::resources::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> armdoc::arm::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Nodes(args) => cmd::nodes::run(args),
		Commands::Resources(args) => cmd::resources::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
