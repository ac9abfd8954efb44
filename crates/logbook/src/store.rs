// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Per-run log files: where they live, how they are named, how they are
//! read back

use std::{
	env, fs, io,
	path::{Path, PathBuf},
};

use crate::{sink::FileSink, timestamp};

/// Errors from log file management.
///
/// The silent operations (`create`, `list`, `read`) collapse these to
/// absent results; the `try_` variants hand the detail to callers that
/// want it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
	#[error("failed to create log directory {}: {}", .path.display(), .source)]
	Create {
		path: PathBuf,
		source: io::Error,
	},

	#[error("failed to open log file {}: {}", .path.display(), .source)]
	Open {
		path: PathBuf,
		source: io::Error,
	},

	#[error("failed to list log files in {}: {}", .path.display(), .source)]
	List {
		path: PathBuf,
		source: io::Error,
	},

	#[error("failed to read log file {}: {}", .path.display(), .source)]
	Read {
		path: PathBuf,
		source: io::Error,
	},
}

/// Owns the directory that holds per-run log files
#[derive(Debug, Clone)]
pub struct LogStore {
	directory: PathBuf,
}

impl LogStore {
	/// Store over an explicit directory
	pub fn new(directory: impl Into<PathBuf>) -> Self {
		Self {
			directory: directory.into(),
		}
	}

	/// Store over the platform's per-user data directory:
	/// `$XDG_DATA_HOME` or `$HOME/.local/share` on Unix, `%APPDATA%` on
	/// Windows, each with a `logbook` component appended.
	///
	/// `None` when the environment defines no such place.
	pub fn user_default() -> Option<Self> {
		user_data_dir().map(|dir| Self::new(dir.join("logbook")))
	}

	pub fn directory(&self) -> &Path {
		&self.directory
	}

	/// Create this run's log file and return a sink appending to it.
	///
	/// The file is named after the current instant,
	/// `2024-06-03T18-01-23Z.log`, and opened in append mode. A second
	/// create within the same second appends to the same file rather
	/// than failing. Missing directories are created first.
	pub fn try_create(&self) -> Result<FileSink, StoreError> {
		fs::create_dir_all(&self.directory).map_err(|source| StoreError::Create {
			path: self.directory.clone(),
			source,
		})?;

		let name = format!("{}.log", timestamp::file_name(&timestamp::now()));
		let path = self.directory.join(name);
		FileSink::try_open(&path).map_err(|source| StoreError::Open {
			path,
			source,
		})
	}

	/// [`Self::try_create`] with the failure detail discarded
	pub fn create(&self) -> Option<FileSink> {
		self.try_create().ok()
	}

	/// Paths of the `.log` files in the directory, sorted by file name.
	/// Timestamped names come back in chronological order.
	pub fn try_list(&self) -> Result<Vec<PathBuf>, StoreError> {
		let entries = fs::read_dir(&self.directory).map_err(|source| StoreError::List {
			path: self.directory.clone(),
			source,
		})?;

		let mut files = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|source| StoreError::List {
				path: self.directory.clone(),
				source,
			})?;
			let path = entry.path();
			if path.extension().is_some_and(|extension| extension == "log") {
				files.push(path);
			}
		}
		files.sort();
		Ok(files)
	}

	/// [`Self::try_list`] with the failure detail discarded.
	///
	/// A directory with no log files yields `Some` of an empty vector; a
	/// directory that cannot be enumerated yields `None`.
	pub fn list(&self) -> Option<Vec<PathBuf>> {
		self.try_list().ok()
	}

	/// Full contents of one log file as UTF-8 text, typically a path
	/// returned by [`Self::try_list`]
	pub fn try_read(&self, path: impl AsRef<Path>) -> Result<String, StoreError> {
		let path = path.as_ref();
		fs::read_to_string(path).map_err(|source| StoreError::Read {
			path: path.to_path_buf(),
			source,
		})
	}

	/// [`Self::try_read`] with the failure detail discarded.
	///
	/// Missing file, unreadable file, and non-UTF-8 content all yield
	/// `None`.
	pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
		self.try_read(path).ok()
	}
}

fn user_data_dir() -> Option<PathBuf> {
	#[cfg(windows)]
	{
		env::var_os("APPDATA").filter(|dir| !dir.is_empty()).map(PathBuf::from)
	}
	#[cfg(not(windows))]
	{
		// Per the XDG base directory rules, an empty value counts as
		// unset
		match env::var_os("XDG_DATA_HOME") {
			Some(data) if !data.is_empty() => Some(PathBuf::from(data)),
			_ => env::var_os("HOME")
				.filter(|home| !home.is_empty())
				.map(|home| PathBuf::from(home).join(".local").join("share")),
		}
	}
}
