use crate::cpp::{AccessorProps, Convention, CppGenError, Declaration, Host, Result, gen_accessor_block, guard_epilogue, guard_prologue, guard_token, parse_declaration};

/// Report of one accessor generation batch.
#[derive(Debug, Clone)]
pub struct AccessorBatch {
	/// Declarations recognized in the selection, in source order.
	pub declarations: Vec<Declaration>,
	/// Generated block, exactly as inserted.
	pub code: String,
	/// Zero-based line the block was inserted at.
	pub inserted_at: usize,
}

/// Report of one header-guard generation.
#[derive(Debug, Clone)]
pub struct GuardOutcome {
	/// Guard token derived from the relative path.
	pub token: String,
	/// Project-relative path the token was derived from.
	pub relative_path: String,
}

/// Parse the host selection and insert the requested accessor block after it.
///
/// Lines that fail to parse are skipped; the batch block is inserted at the
/// line following the selection end. Fails with `NoSelection` when the host
/// has nothing selected, leaving the buffer untouched.
pub fn generate_accessors(host: &mut dyn Host, props: AccessorProps, convention: &Convention) -> Result<AccessorBatch> {
	let selection = host.selection().ok_or(CppGenError::NoSelection)?;

	let declarations: Vec<Declaration> = selection.lines.iter().filter_map(|line| parse_declaration(line, convention)).collect();

	let code = gen_accessor_block(&declarations, props, convention);
	let inserted_at = selection.end_line + 1;
	host.insert_text(inserted_at, &code);

	Ok(AccessorBatch {
		declarations,
		code,
		inserted_at,
	})
}

/// Wrap the host buffer in an include guard derived from its file path.
///
/// Fails with `NoActiveFile` when the host has no backing file and with
/// `NotHeaderFile` when the extension is not a header one; either way the
/// buffer is untouched.
pub fn generate_header_guard(host: &mut dyn Host, convention: &Convention) -> Result<GuardOutcome> {
	let path = host.current_file().ok_or(CppGenError::NoActiveFile)?.to_path_buf();
	if !convention.is_header_path(&path) {
		return Err(CppGenError::NotHeaderFile { path: path.display().to_string() });
	}

	let relative_path = host.relative_path(&path);
	let token = guard_token(&relative_path);

	// Epilogue first: both insert positions refer to the pre-edit buffer.
	let end = host.line_count();
	host.insert_text(end, &guard_epilogue(&token));
	host.insert_text(0, &guard_prologue(&token));

	Ok(GuardOutcome { token, relative_path })
}
