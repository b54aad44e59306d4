use crate::cpp::Convention;

/// Category a type spelling falls into, driving accessor signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
	/// Scalar type from the primary allow-list.
	Primary,
	/// Spelling ends with `*`.
	RawPointer,
	/// Spelling ends with a configured smart-handle suffix.
	SmartHandle,
	/// Anything else; passed and returned by const reference.
	Composite,
}

impl TypeClass {
	/// Whether accessors pass and return this type by value.
	pub fn passes_by_value(self) -> bool {
		!matches!(self, Self::Composite)
	}

	/// Render the class as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primary => "primary",
			Self::RawPointer => "raw_pointer",
			Self::SmartHandle => "smart_handle",
			Self::Composite => "composite",
		}
	}
}

/// Classify a type spelling against the convention's string rules.
///
/// Purely textual: exact match against the primary list, then suffix checks.
/// A type that merely happens to end in a smart suffix still classifies as a
/// smart handle.
pub fn classify(type_name: &str, convention: &Convention) -> TypeClass {
	if convention.primary_types.iter().any(|item| item == type_name) {
		return TypeClass::Primary;
	}

	if type_name.ends_with('*') {
		return TypeClass::RawPointer;
	}

	if convention.smart_suffixes.iter().any(|item| type_name.ends_with(item.as_str())) {
		return TypeClass::SmartHandle;
	}

	TypeClass::Composite
}
