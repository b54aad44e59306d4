/// Scalar types whose accessors pass and return by value.
pub const PRIMARY_TYPES: [&str; 9] = ["bool", "double", "float", "int", "uint", "int32_t", "uint32_t", "int64_t", "uint64_t"];

/// File extensions accepted as C++ headers by guard generation.
pub const HEADER_EXTENSIONS: [&str; 4] = ["h", "hpp", "hh", "hxx"];

/// Naming-convention rules driving parsing and classification.
///
/// The defaults reproduce the common style this tool grew up with: member
/// fields carry a trailing `_`, smart handles are spelled `FooPtr`. All rules
/// are plain string tables so alternate conventions slot in without touching
/// the generator.
#[derive(Debug, Clone)]
pub struct Convention {
	/// Trailing marker character stripped from member names to form accessor names.
	pub marker: char,
	/// Type-name suffixes classified as smart handles.
	pub smart_suffixes: Vec<String>,
	/// Exact type spellings classified as primary scalars.
	pub primary_types: Vec<String>,
	/// File extensions guard generation accepts as headers.
	pub header_extensions: Vec<String>,
}

impl Default for Convention {
	fn default() -> Self {
		Self {
			marker: '_',
			smart_suffixes: vec!["Ptr".to_owned()],
			primary_types: PRIMARY_TYPES.iter().map(|item| (*item).to_owned()).collect(),
			header_extensions: HEADER_EXTENSIONS.iter().map(|item| (*item).to_owned()).collect(),
		}
	}
}

impl Convention {
	/// Derive the public accessor name from a raw member token.
	///
	/// Strips the trailing marker when present; otherwise the final character
	/// is dropped regardless, keeping the one-character-suffix contract.
	pub fn accessor_name(&self, member: &str) -> String {
		if let Some(stripped) = member.strip_suffix(self.marker) {
			return stripped.to_owned();
		}

		let mut out = member.to_owned();
		out.pop();
		out
	}

	/// Whether `path` names a file guard generation should accept.
	pub fn is_header_path(&self, path: &std::path::Path) -> bool {
		let Some(ext) = path.extension().and_then(|item| item.to_str()) else {
			return false;
		};

		self.header_extensions.iter().any(|item| item == ext)
	}
}
