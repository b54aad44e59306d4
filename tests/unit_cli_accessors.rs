#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn accessors_json_reports_declarations_and_code() {
	let json = run_json(&["accessors", &fixture("widget.h"), "--lines", "6:8", "--json"]);

	assert_eq!(json["inserted_at"], 9);
	assert_eq!(json["applied"], false);

	let decls = json["declarations"].as_array().expect("declarations array");
	assert_eq!(decls.len(), 3);

	assert_eq!(decls[0]["type"], "int");
	assert_eq!(decls[0]["member"], "count_");
	assert_eq!(decls[0]["accessor"], "count");
	assert_eq!(decls[0]["class"], "primary");
	assert_eq!(decls[0]["comment"], "// item count");

	assert_eq!(decls[1]["type"], "Widget*");
	assert_eq!(decls[1]["class"], "raw_pointer");

	assert_eq!(decls[2]["type"], "std::vector<int>");
	assert_eq!(decls[2]["class"], "composite");
	assert_eq!(decls[2]["comment"], Value::Null);

	let code = json["code"].as_str().expect("code string");
	assert!(code.contains(" public:"), "expected access specifier in code");
	assert!(code.contains("void set_count(int count) { count_ = count; }"));
}

#[test]
fn getter_prints_block_to_stdout() {
	let output = run(&["getter", &fixture("widget.h"), "--lines", "6:8"]);
	assert!(output.status.success(), "getter should succeed");

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	let expected = "\n public:\n  // getters and setters\n  int count() const { return count_; }\n  Widget* widget() const { return widget_; }\n  const std::vector<int>& items() const { return items_; }\n";
	assert_eq!(stdout, expected);
}

#[test]
fn setter_uses_const_reference_for_composite_types() {
	let output = run(&["setter", &fixture("widget.h"), "--lines", "8:8"]);
	assert!(output.status.success(), "setter should succeed");

	let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
	assert!(stdout.contains("void set_items(const std::vector<int> &items) { items_ = items; }"));
}

#[test]
fn decls_json_lists_only_parseable_lines() {
	let json = run_json(&["decls", &fixture("widget.h"), "--json"]);

	assert_eq!(json["scanned"], 9);
	let decls = json["declarations"].as_array().expect("declarations array");
	assert_eq!(decls.len(), 3, "only the three member lines parse");
}

#[test]
fn accessors_in_place_inserts_after_the_selection() {
	let dir = tempfile::tempdir().expect("temp dir creates");
	let header = dir.path().join("widget.h");
	std::fs::copy(fixture_path("widget.h"), &header).expect("fixture copies");

	let output = run(&[
		"accessors",
		header.to_str().expect("path is utf-8"),
		"--lines",
		"6:8",
		"--in-place",
	]);
	assert!(output.status.success(), "accessors should succeed: {}", String::from_utf8_lossy(&output.stderr));

	let written = std::fs::read_to_string(&header).expect("header reads back");
	let block_at = written.find(" public:\n  // getters and setters\n").expect("generated block present");
	assert!(block_at > written.find("items_;").expect("selection still present"), "block lands after the selection");
	assert!(written.contains("  Widget* widget() const { return widget_; }\n  void set_widget(Widget* widget) { widget_ = widget; }"));
	assert!(written.ends_with("};\n"), "closing brace stays after the inserted block");
}

#[test]
fn malformed_line_range_fails_without_output() {
	let output = run(&["accessors", &fixture("widget.h"), "--lines", "8"]);

	assert!(!output.status.success(), "malformed range should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid line range"), "stderr: {stderr}");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_cppgen")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}
