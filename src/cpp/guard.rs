/// Derive an include-guard token from a project-relative path.
///
/// Uppercases the path and maps every character outside `[A-Za-z0-9_]` to `_`.
pub fn guard_token(relative_path: &str) -> String {
	relative_path
		.to_uppercase()
		.chars()
		.map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
		.collect()
}

/// Render the guard prologue inserted before the first line.
///
/// Two blank lines separate the guard from the existing content.
pub fn guard_prologue(token: &str) -> String {
	format!("#ifndef {token}\n#define {token}\n#pragma once\n\n\n")
}

/// Render the guard epilogue inserted after the last line.
pub fn guard_epilogue(token: &str) -> String {
	format!("\n#endif // {token}")
}
