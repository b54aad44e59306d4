use std::path::Path;

use cppgen::cpp::{BufferHost, Convention, CppGenError, Result};

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Parse a 1-based inclusive `start:end` range into zero-based line indices.
pub(crate) fn parse_line_range(range: &str, line_count: usize) -> Result<(usize, usize)> {
	let invalid = || CppGenError::InvalidLineRange { range: range.to_owned() };

	let Some((start_text, end_text)) = range.split_once(':') else {
		return Err(invalid());
	};

	let start: usize = start_text.trim().parse().map_err(|_| invalid())?;
	let end: usize = end_text.trim().parse().map_err(|_| invalid())?;

	if start == 0 || end < start {
		return Err(invalid());
	}

	if end > line_count {
		return Err(CppGenError::LineRangeOutOfBounds {
			start,
			end,
			lines: line_count,
		});
	}

	Ok((start - 1, end - 1))
}

/// Load `path` into a buffer host, applying an optional `--lines` selection.
pub(crate) fn load_host(path: &Path, lines: Option<&str>) -> Result<BufferHost> {
	let text = std::fs::read_to_string(path)?;
	let mut host = BufferHost::from_text(&text).with_file(path);

	if let Some(range) = lines {
		let count = host.lines().len();
		let (start, end) = parse_line_range(range, count)?;
		host.select(start, end);
	}

	Ok(host)
}

/// Build a convention from CLI overrides on top of the defaults.
pub(crate) fn build_convention(marker: Option<char>, smart_suffixes: &[String]) -> Convention {
	let mut convention = Convention::default();

	if let Some(marker) = marker {
		convention.marker = marker;
	}

	if !smart_suffixes.is_empty() {
		convention.smart_suffixes = smart_suffixes.to_vec();
	}

	convention
}
