// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

use std::{env, fs, io, path::Path};

use uuid::Uuid;

/// Run `f` inside a fresh uniquely named directory under the system
/// temp dir. The directory is removed afterwards, whether `f` succeeds
/// or not.
pub fn temp_dir<T, F>(f: F) -> io::Result<T>
where
	F: FnOnce(&Path) -> io::Result<T>,
{
	let mut path = env::temp_dir();
	path.push(format!("logbook-{}", Uuid::new_v4()));

	fs::create_dir(&path)?;
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_directory_exists_during_and_not_after() {
		let mut seen = None;
		temp_dir(|dir| {
			assert!(dir.is_dir());
			seen = Some(dir.to_path_buf());
			Ok(())
		})
		.unwrap();

		assert!(!seen.unwrap().exists());
	}

	#[test]
	fn test_removes_directory_when_closure_fails() {
		let mut seen = None;
		let result: io::Result<()> = temp_dir(|dir| {
			seen = Some(dir.to_path_buf());
			Err(io::Error::other("forced"))
		});

		assert!(result.is_err());
		assert!(!seen.unwrap().exists());
	}

	#[test]
	fn test_returns_closure_value() {
		let value = temp_dir(|dir| Ok(dir.join("a.txt"))).unwrap();
		assert!(value.ends_with("a.txt"));
	}

	#[test]
	fn test_directories_are_unique() {
		temp_dir(|outer| {
			let outer = outer.to_path_buf();
			temp_dir(move |inner| {
				assert_ne!(outer, inner.to_path_buf());
				Ok(())
			})
		})
		.unwrap();
	}
}
