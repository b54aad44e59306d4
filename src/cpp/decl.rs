use crate::cpp::Convention;

/// One parsed single-line member-variable declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
	/// C++ type spelling, with any member sigil (`*`/`&`) folded onto the end.
	pub type_name: String,
	/// Raw member token found before the `;`, sigil stripped. Never empty.
	pub member_expr: String,
	/// Public accessor name derived from the member token.
	pub accessor_name: String,
	/// Raw text following the `;` on the same line, if any.
	pub trailing_comment: Option<String>,
}

/// Scanner phase for a single declaration line.
enum Phase {
	/// Consuming the type spelling, tracking angle-bracket depth.
	ScanningType,
	/// Consuming the member token up to the terminating `;`.
	ScanningMember,
	/// Terminating `;` was seen; the rest of the line is comment text.
	Done,
}

/// Parse one line of text as a C++ member-variable declaration.
///
/// The type ends at the first space seen while angle-bracket depth is zero, so
/// template arguments with internal spaces (`std::map<int, Foo>`) stay part of
/// the type spelling. Comment lines, lines with no top-level space, lines with
/// no terminating `;`, and lines whose member token strips to nothing all
/// yield `None`.
pub fn parse_declaration(line: &str, convention: &Convention) -> Option<Declaration> {
	let line = line.trim();
	if line.starts_with("//") {
		return None;
	}

	let mut phase = Phase::ScanningType;
	let mut depth = 0_i32;
	let mut type_end = 0_usize;
	let mut member_start = 0_usize;
	let mut member_end = 0_usize;
	let mut comment_start = 0_usize;

	for (idx, ch) in line.char_indices() {
		match phase {
			Phase::ScanningType => match ch {
				'<' => depth += 1,
				'>' => depth -= 1,
				' ' if depth == 0 => {
					type_end = idx;
					member_start = idx;
					phase = Phase::ScanningMember;
				}
				_ => {}
			},
			Phase::ScanningMember => {
				if ch == ';' {
					member_end = idx;
					comment_start = idx + 1;
					phase = Phase::Done;
				}
			}
			Phase::Done => break,
		}
	}

	if !matches!(phase, Phase::Done) {
		return None;
	}

	let mut type_name: String = line[..type_end].split_whitespace().collect();
	let mut member: String = line[member_start..member_end].split_whitespace().collect();

	if let Some(sigil) = member.chars().next().filter(|ch| *ch == '*' || *ch == '&') {
		type_name.push(sigil);
		member.remove(0);
	}

	if member.is_empty() {
		return None;
	}

	let trailing_comment = {
		let text = line[comment_start..].trim_start();
		if text.is_empty() { None } else { Some(text.to_owned()) }
	};

	let accessor_name = convention.accessor_name(&member);

	Some(Declaration {
		type_name,
		member_expr: member,
		accessor_name,
		trailing_comment,
	})
}

#[cfg(test)]
mod tests;
