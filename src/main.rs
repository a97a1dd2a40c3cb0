#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::decode::{AdapterKind, OutputOptions};

#[derive(Parser)]
#[command(name = "fieldwrap", about = "Decode JSON fields through default and absolute-value adapters")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode one field through an adapter and print the result.
	Decode {
		path: PathBuf,
		/// Field path, e.g. `squad.members[0].active`.
		#[arg(long)]
		field: String,
		/// Adapter applied to the field.
		#[arg(long = "as", value_enum)]
		adapter: AdapterKind,
		#[arg(long)]
		json: bool,
		#[arg(long)]
		pretty: bool,
	},
	/// Report whether a field is absent, null, or present.
	Check {
		path: PathBuf,
		#[arg(long)]
		field: String,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn run() -> fieldwrap::wrap::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode {
			path,
			field,
			adapter,
			json,
			pretty,
		} => cmd::decode::run(path, field, adapter, OutputOptions { json, pretty }),
		Commands::Check { path, field, json } => cmd::check::run(path, field, json),
	}
}
