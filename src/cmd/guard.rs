use std::path::PathBuf;

use cppgen::cpp::{BufferHost, Convention, Result, generate_header_guard};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "in-place")]
	pub in_place: bool,
	#[arg(long)]
	pub json: bool,
	/// Directory guard tokens are derived relative to (default: the file's parent).
	#[arg(long)]
	pub root: Option<PathBuf>,
}

/// Wrap a header file in an include guard derived from its path.
///
/// Default prints the wrapped content to stdout; `--in-place` rewrites the
/// file; `--json` reports the token and relative path instead.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		in_place,
		json,
		root,
	} = args;

	let text = std::fs::read_to_string(&file)?;
	let root = root.or_else(|| file.parent().map(PathBuf::from));

	let mut host = BufferHost::from_text(&text).with_file(&file);
	if let Some(root) = root {
		host = host.with_root(root);
	}

	let outcome = generate_header_guard(&mut host, &Convention::default())?;

	if in_place {
		std::fs::write(&file, host.contents())?;
	}

	if json {
		let payload = GuardJson {
			path: file.display().to_string(),
			relative_path: outcome.relative_path,
			token: outcome.token,
			applied: in_place,
		};
		return emit_json(&payload);
	}

	if in_place {
		println!("path: {}", file.display());
		println!("token: {}", outcome.token);
		return Ok(());
	}

	print!("{}", host.contents());
	Ok(())
}

#[derive(serde::Serialize)]
struct GuardJson {
	path: String,
	relative_path: String,
	token: String,
	applied: bool,
}
