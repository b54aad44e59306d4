use crate::cpp::{Convention, parse_declaration};

fn parse(line: &str) -> Option<crate::cpp::Declaration> {
	parse_declaration(line, &Convention::default())
}

#[test]
fn plain_member_splits_into_type_member_accessor() {
	let decl = parse("int count_;").expect("declaration parses");
	assert_eq!(decl.type_name, "int");
	assert_eq!(decl.member_expr, "count_");
	assert_eq!(decl.accessor_name, "count");
	assert_eq!(decl.trailing_comment, None);
}

#[test]
fn template_brackets_keep_internal_space_inside_type() {
	let decl = parse("std::map<int, std::string> lookup_;").expect("declaration parses");
	assert_eq!(decl.type_name, "std::map<int,std::string>");
	assert_eq!(decl.member_expr, "lookup_");
	assert_eq!(decl.accessor_name, "lookup");
}

#[test]
fn simple_template_type_is_not_split() {
	let decl = parse("std::vector<int> items_;").expect("declaration parses");
	assert_eq!(decl.type_name, "std::vector<int>");
	assert_eq!(decl.member_expr, "items_");
}

#[test]
fn pointer_sigil_moves_from_member_to_type() {
	let decl = parse("Foo *ptr_;").expect("declaration parses");
	assert_eq!(decl.type_name, "Foo*");
	assert_eq!(decl.member_expr, "ptr_");
	assert_eq!(decl.accessor_name, "ptr");
}

#[test]
fn reference_sigil_moves_from_member_to_type() {
	let decl = parse("Foo &ref_;").expect("declaration parses");
	assert_eq!(decl.type_name, "Foo&");
	assert_eq!(decl.member_expr, "ref_");
}

#[test]
fn sigil_attached_to_member_is_still_relocated() {
	let decl = parse("Widget *widget_;").expect("declaration parses");
	assert_eq!(decl.type_name, "Widget*");
	assert_eq!(decl.member_expr, "widget_");
}

#[test]
fn trailing_comment_is_captured_after_semicolon() {
	let decl = parse("int count_; // item count").expect("declaration parses");
	assert_eq!(decl.trailing_comment.as_deref(), Some("// item count"));
}

#[test]
fn comment_line_is_not_a_declaration() {
	assert_eq!(parse("// int count_;"), None);
	assert_eq!(parse("   // indented comment"), None);
}

#[test]
fn line_without_top_level_space_is_rejected() {
	assert_eq!(parse("garbage"), None);
	assert_eq!(parse(""), None);
}

#[test]
fn line_without_semicolon_is_rejected() {
	assert_eq!(parse("int count_"), None);
}

#[test]
fn empty_member_token_is_rejected() {
	assert_eq!(parse("int ;"), None);
	assert_eq!(parse("Foo *;"), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
	let decl = parse("   int count_;   ").expect("declaration parses");
	assert_eq!(decl.type_name, "int");
	assert_eq!(decl.member_expr, "count_");
}

#[test]
fn custom_marker_drives_accessor_name() {
	let mut convention = Convention::default();
	convention.marker = 'm';
	let decl = parse_declaration("int countm;", &convention).expect("declaration parses");
	assert_eq!(decl.accessor_name, "count");
}
