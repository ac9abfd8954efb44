// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Injectable output targets for rendered log lines

mod file;
mod memory;
mod stderr;

pub use file::FileSink;
pub use memory::MemorySink;
pub use stderr::StderrSink;

/// A destination for rendered log lines.
///
/// An implementation receives one complete line per call, without a
/// trailing terminator, and appends whatever terminator its medium
/// needs. Write failures are swallowed: logging never reports errors
/// back to the caller.
pub trait LogSink: Send + Sync {
	fn write_line(&self, line: &str);
}
