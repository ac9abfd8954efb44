// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

use std::io::{self, Write};

use super::LogSink;

/// Writes lines to the process standard error stream
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
	pub fn new() -> Self {
		Self
	}
}

impl LogSink for StderrSink {
	fn write_line(&self, line: &str) {
		// One write per line so concurrent writers cannot interleave
		// mid-line
		let buffer = format!("{}\n", line);
		let _ = io::stderr().lock().write_all(buffer.as_bytes());
	}
}
