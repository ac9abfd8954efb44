// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

use parking_lot::Mutex;

use super::LogSink;

/// Captures lines in memory, in write order.
///
/// The sink to inject when a test needs to observe exactly what a
/// logger emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
	lines: Mutex<Vec<String>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of every line written so far
	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.lines.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.lock().is_empty()
	}
}

impl LogSink for MemorySink {
	fn write_line(&self, line: &str) {
		self.lines.lock().push(line.to_string());
	}
}
