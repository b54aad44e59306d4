use std::path::PathBuf;

use cppgen::cpp::{CppGenError, Host, Result, classify, parse_declaration};

use crate::cmd::util::{build_convention, emit_json, load_host};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// 1-based inclusive line range to scan (default: whole file).
	#[arg(long = "lines")]
	pub lines: Option<String>,
	#[arg(long)]
	pub json: bool,
	/// Trailing member-name marker character.
	#[arg(long)]
	pub marker: Option<char>,
	/// Additional smart-handle type suffix (repeatable, replaces the default `Ptr`).
	#[arg(long = "smart-suffix")]
	pub smart_suffixes: Vec<String>,
}

/// List the member declarations the parser recognizes in a file.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		lines,
		json,
		marker,
		smart_suffixes,
	} = args;

	let convention = build_convention(marker, &smart_suffixes);
	let host = load_host(&file, lines.as_deref())?;
	let selection = host.selection().ok_or(CppGenError::NoSelection)?;

	let declarations: Vec<_> = selection.lines.iter().filter_map(|line| parse_declaration(line, &convention)).collect();

	if json {
		let payload = DeclsJson {
			path: file.display().to_string(),
			scanned: selection.lines.len(),
			declarations: declarations
				.iter()
				.map(|decl| DeclJson {
					type_name: decl.type_name.clone(),
					member: decl.member_expr.clone(),
					accessor: decl.accessor_name.clone(),
					class: classify(&decl.type_name, &convention).as_str().to_owned(),
					comment: decl.trailing_comment.clone(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", file.display());
	println!("scanned: {}", selection.lines.len());
	println!("declarations: {}", declarations.len());
	for decl in &declarations {
		println!(
			"  {} {} -> {} [{}]",
			decl.type_name,
			decl.member_expr,
			decl.accessor_name,
			classify(&decl.type_name, &convention).as_str()
		);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct DeclsJson {
	path: String,
	scanned: usize,
	declarations: Vec<DeclJson>,
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
