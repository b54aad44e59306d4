use crate::cpp::{Convention, Declaration, classify};

/// Which accessors a batch generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorProps {
	/// Emit a getter per declaration.
	pub getter: bool,
	/// Emit a setter per declaration.
	pub setter: bool,
}

impl AccessorProps {
	/// Getter-only batch.
	pub const GETTER: Self = Self { getter: true, setter: false };
	/// Setter-only batch.
	pub const SETTER: Self = Self { getter: false, setter: true };
	/// Getter-and-setter batch.
	pub const BOTH: Self = Self { getter: true, setter: true };
}

/// Render one setter line for a parsed declaration.
///
/// Pass-by-value-like types take the parameter by value; everything else takes
/// `const T &`.
pub fn gen_setter(decl: &Declaration, convention: &Convention) -> String {
	let Declaration {
		type_name,
		member_expr,
		accessor_name,
		..
	} = decl;

	if classify(type_name, convention).passes_by_value() {
		format!("void set_{accessor_name}({type_name} {accessor_name}) {{ {member_expr} = {accessor_name}; }}")
	} else {
		format!("void set_{accessor_name}(const {type_name} &{accessor_name}) {{ {member_expr} = {accessor_name}; }}")
	}
}

/// Render one getter line for a parsed declaration.
pub fn gen_getter(decl: &Declaration, convention: &Convention) -> String {
	let Declaration {
		type_name,
		member_expr,
		accessor_name,
		..
	} = decl;

	if classify(type_name, convention).passes_by_value() {
		format!("{type_name} {accessor_name}() const {{ return {member_expr}; }}")
	} else {
		format!("const {type_name}& {accessor_name}() const {{ return {member_expr}; }}")
	}
}

/// Assemble the insertable block for a batch of declarations.
///
/// The block opens with a blank line, a ` public:` access specifier, and one
/// explanatory comment line for the whole batch; each declaration then
/// contributes its requested accessor lines (getter before setter) indented
/// two spaces. Ends with a newline. Trailing comments from the source lines
/// are not re-emitted.
pub fn gen_accessor_block(decls: &[Declaration], props: AccessorProps, convention: &Convention) -> String {
	let mut lines = vec![String::new(), " public:".to_owned()];

	if props.getter || props.setter {
		lines.push("  // getters and setters".to_owned());
	}

	for decl in decls {
		if props.getter {
			lines.push(format!("  {}", gen_getter(decl, convention)));
		}
		if props.setter {
			lines.push(format!("  {}", gen_setter(decl, convention)));
		}
	}

	lines.push(String::new());
	lines.join("\n")
}
