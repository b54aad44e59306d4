use std::path::{Path, PathBuf};

/// Ordered lines currently selected in a host buffer.
#[derive(Debug, Clone)]
pub struct Selection {
	/// Selected lines, in buffer order.
	pub lines: Vec<String>,
	/// Zero-based buffer index of the last selected line.
	pub end_line: usize,
}

/// Text source/sink the generation actions run against.
///
/// Stands in for the editing surface (selection, buffer edits, file paths) so
/// the parser, classifier, and generators stay pure and testable without one.
pub trait Host {
	/// Currently selected lines, if any.
	fn selection(&self) -> Option<Selection>;
	/// Total line count of the buffer.
	fn line_count(&self) -> usize;
	/// Insert `text` at column zero of `line`; the text may span lines.
	fn insert_text(&mut self, line: usize, text: &str);
	/// Path of the file backing the buffer, if any.
	fn current_file(&self) -> Option<&Path>;
	/// Project-relative rendition of `path`, used for guard tokens.
	fn relative_path(&self, path: &Path) -> String;
}

/// In-memory line-buffer host backed by an optional file path.
#[derive(Debug, Clone)]
pub struct BufferHost {
	lines: Vec<String>,
	selection: Option<(usize, usize)>,
	file: Option<PathBuf>,
	root: Option<PathBuf>,
}

impl BufferHost {
	/// Build a host over `lines` with the whole buffer selected.
	pub fn from_lines(lines: Vec<String>) -> Self {
		let selection = if lines.is_empty() { None } else { Some((0, lines.len() - 1)) };
		Self {
			lines,
			selection,
			file: None,
			root: None,
		}
	}

	/// Build a host over the lines of `text` with the whole buffer selected.
	pub fn from_text(text: &str) -> Self {
		Self::from_lines(text.lines().map(str::to_owned).collect())
	}

	/// Attach the backing file path.
	pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
		self.file = Some(path.into());
		self
	}

	/// Attach the project root that relative paths are derived against.
	pub fn with_root(mut self, path: impl Into<PathBuf>) -> Self {
		self.root = Some(path.into());
		self
	}

	/// Restrict the selection to a zero-based inclusive line range.
	pub fn select(&mut self, start: usize, end: usize) {
		self.selection = Some((start.min(end), end.min(self.lines.len().saturating_sub(1))));
	}

	/// Current buffer lines.
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Render the buffer back to text with a trailing newline.
	pub fn contents(&self) -> String {
		let mut out = self.lines.join("\n");
		out.push('\n');
		out
	}
}

impl Host for BufferHost {
	fn selection(&self) -> Option<Selection> {
		let (start, end) = self.selection?;
		let lines = self.lines.get(start..=end)?.to_vec();
		Some(Selection { lines, end_line: end })
	}

	fn line_count(&self) -> usize {
		self.lines.len()
	}

	fn insert_text(&mut self, line: usize, text: &str) {
		let mut pieces: Vec<&str> = text.split('\n').collect();
		let tail = pieces.pop().unwrap_or("");
		let at = line.min(self.lines.len());

		if at == self.lines.len() {
			self.lines.extend(pieces.iter().map(|item| (*item).to_owned()));
			if !tail.is_empty() {
				self.lines.push(tail.to_owned());
			}
		} else {
			self.lines[at].insert_str(0, tail);
			for piece in pieces.iter().rev() {
				self.lines.insert(at, (*piece).to_owned());
			}
		}
	}

	fn current_file(&self) -> Option<&Path> {
		self.file.as_deref()
	}

	fn relative_path(&self, path: &Path) -> String {
		let rel = self.root.as_deref().and_then(|root| path.strip_prefix(root).ok()).unwrap_or(path);
		rel.display().to_string()
	}
}
