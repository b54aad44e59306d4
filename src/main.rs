#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use cppgen::cpp::AccessorProps;

mod cmd;

#[derive(Parser)]
#[command(name = "cppgen", about = "C++ accessor and header-guard generation tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Generate getters for the selected member declarations.
	Getter(cmd::accessors::Args),
	/// Generate setters for the selected member declarations.
	Setter(cmd::accessors::Args),
	/// Generate getters and setters for the selected member declarations.
	Accessors(cmd::accessors::Args),
	/// List the member declarations the parser recognizes.
	Decls(cmd::decls::Args),
	/// Wrap a header file in an include guard derived from its path.
	Guard(cmd::guard::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cppgen::cpp::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Getter(args) => cmd::accessors::run(args, AccessorProps::GETTER),
		Commands::Setter(args) => cmd::accessors::run(args, AccessorProps::SETTER),
		Commands::Accessors(args) => cmd::accessors::run(args, AccessorProps::BOTH),
		Commands::Decls(args) => cmd::decls::run(args),
		Commands::Guard(args) => cmd::guard::run(args),
	}
}
