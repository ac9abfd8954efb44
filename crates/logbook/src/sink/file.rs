// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

use std::{
	fs::{File, OpenOptions},
	io::{self, Write},
	path::{Path, PathBuf},
};

use parking_lot::Mutex;

use super::LogSink;

/// Appends lines to a single log file.
///
/// The handle sits behind a mutex so clones of a logger sharing this
/// sink write whole lines in order.
#[derive(Debug)]
pub struct FileSink {
	path: PathBuf,
	file: Mutex<File>,
}

impl FileSink {
	/// Open `path` for appending, creating the file if it is missing.
	pub fn try_open(path: impl Into<PathBuf>) -> io::Result<Self> {
		let path = path.into();
		let file = OpenOptions::new().create(true).append(true).open(&path)?;
		Ok(Self {
			path,
			file: Mutex::new(file),
		})
	}

	/// [`Self::try_open`] with the failure detail discarded
	pub fn open(path: impl Into<PathBuf>) -> Option<Self> {
		Self::try_open(path).ok()
	}

	/// Path of the file this sink appends to
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl LogSink for FileSink {
	fn write_line(&self, line: &str) {
		let buffer = format!("{}\n", line);
		let _ = self.file.lock().write_all(buffer.as_bytes());
	}
}
