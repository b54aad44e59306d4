use std::path::PathBuf;

use cppgen::cpp::{AccessorProps, Convention, Declaration, Result, classify, generate_accessors};

use crate::cmd::util::{build_convention, emit_json, load_host};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// 1-based inclusive line range to read declarations from (default: whole file).
	#[arg(long = "lines")]
	pub lines: Option<String>,
	#[arg(long = "in-place")]
	pub in_place: bool,
	#[arg(long)]
	pub json: bool,
	/// Trailing member-name marker character.
	#[arg(long)]
	pub marker: Option<char>,
	/// Additional smart-handle type suffix (repeatable, replaces the default `Ptr`).
	#[arg(long = "smart-suffix")]
	pub smart_suffixes: Vec<String>,
}

/// Generate accessors for the selected declarations of one file.
///
/// Default prints the generated block to stdout; `--in-place` applies the edit
/// to the file and prints a summary; `--json` emits the parsed declarations
/// and generated code as one payload.
pub fn run(args: Args, props: AccessorProps) -> Result<()> {
	let Args {
		file,
		lines,
		in_place,
		json,
		marker,
		smart_suffixes,
	} = args;

	let convention = build_convention(marker, &smart_suffixes);
	let mut host = load_host(&file, lines.as_deref())?;

	let batch = generate_accessors(&mut host, props, &convention)?;

	if in_place {
		std::fs::write(&file, host.contents())?;
	}

	if json {
		let payload = AccessorsJson {
			path: file.display().to_string(),
			inserted_at: batch.inserted_at + 1,
			applied: in_place,
			declarations: batch.declarations.iter().map(|decl| decl_json(decl, &convention)).collect(),
			code: batch.code.clone(),
		};
		return emit_json(&payload);
	}

	if in_place {
		println!("path: {}", file.display());
		println!("declarations: {}", batch.declarations.len());
		println!("inserted_at: {}", batch.inserted_at + 1);
		return Ok(());
	}

	print!("{}", batch.code);
	Ok(())
}

fn decl_json(decl: &Declaration, convention: &Convention) -> DeclJson {
	DeclJson {
		type_name: decl.type_name.clone(),
		member: decl.member_expr.clone(),
		accessor: decl.accessor_name.clone(),
		class: classify(&decl.type_name, convention).as_str().to_owned(),
		comment: decl.trailing_comment.clone(),
	}
}

#[derive(serde::Serialize)]
struct AccessorsJson {
	path: String,
	inserted_at: usize,
	applied: bool,
	declarations: Vec<DeclJson>,
	code: String,
}

#[derive(serde::Serialize)]
struct DeclJson {
	#[serde(rename = "type")]
	type_name: String,
	member: String,
	accessor: String,
	class: String,
	comment: Option<String>,
}
