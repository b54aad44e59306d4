use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CppGenError>;

/// Errors produced while reading buffers and generating boilerplate.
#[derive(Debug, Error)]
pub enum CppGenError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encoding failure while emitting a payload.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// The host had no selection to read declarations from.
	#[error("no lines selected")]
	NoSelection,
	/// The host had no file to derive a guard token from.
	#[error("no active file")]
	NoActiveFile,
	/// Header guard requested for a file without a header extension.
	#[error("not a c++ header file: {path}")]
	NotHeaderFile {
		/// Offending file path.
		path: String,
	},
	/// Line range argument did not parse as `start:end`.
	#[error("invalid line range: {range}")]
	InvalidLineRange {
		/// User-provided range string.
		range: String,
	},
	/// Line range argument fell outside the buffer.
	#[error("line range {start}:{end} out of bounds for {lines} lines")]
	LineRangeOutOfBounds {
		/// Requested 1-based first line.
		start: usize,
		/// Requested 1-based last line.
		end: usize,
		/// Lines available in the buffer.
		lines: usize,
	},
}
