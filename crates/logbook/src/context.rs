// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Call-site context attached to log lines

use std::{fmt, path::Path};

/// Where a log call happened: source file, enclosing function, and line
/// number.
///
/// Rendered as `file:line function`, with `file` reduced to its final
/// path component so lines stay readable regardless of how deep the
/// source tree is. Capture one with the [`context!`](crate::context!)
/// macro, or construct it manually when the location comes from
/// somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
	/// Source file path as reported by the compiler
	pub file: String,
	/// Fully qualified enclosing function
	pub function: String,
	/// Line number within `file`
	pub line: u32,
}

impl Context {
	pub fn new(file: impl Into<String>, function: impl Into<String>, line: u32) -> Self {
		Self {
			file: file.into(),
			function: function.into(),
			line,
		}
	}

	/// Final path component of `file`
	pub fn file_name(&self) -> &str {
		Path::new(&self.file)
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or(&self.file)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{} {}", self.file_name(), self.line, self.function)
	}
}
