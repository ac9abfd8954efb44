// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

use std::fs;

use logbook::{Context, FileSink, LogSink, LogStore, Logger};
use logbook_testing::tempdir::temp_dir;

#[test]
fn test_create_names_file_after_instant() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		let sink = store.try_create().expect("create log file");

		let name = sink.path().file_name().and_then(|name| name.to_str()).expect("file name");
		assert_eq!(name.len(), "2024-06-03T18-01-23Z.log".len());
		assert!(name.ends_with(".log"));
		assert!(!name.contains(':'));
		assert!(sink.path().starts_with(dir));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_create_builds_missing_directories() {
	temp_dir(|dir| {
		let nested = dir.join("logs").join("app");
		let store = LogStore::new(&nested);
		let sink = store.try_create().expect("create log file");

		assert!(nested.is_dir());
		assert!(sink.path().starts_with(&nested));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_round_trip_message_through_file() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		let logger = Logger::builder().directory(dir).with_log_file(true).build();
		logger.error("disk quota exceeded", Context::new("src/disk.rs", "disk::check", 12));

		let files = store.list().expect("list log files");
		assert_eq!(files.len(), 1);

		let content = store.read(&files[0]).expect("read log file");
		assert!(content.contains("ERROR: disk quota exceeded"));
		assert!(content.contains("➜ disk.rs:12 disk::check"));
		assert!(content.ends_with('\n'));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_list_empty_directory_is_empty_not_absent() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		assert_eq!(store.list(), Some(Vec::new()));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_list_missing_directory_is_absent() {
	temp_dir(|dir| {
		let store = LogStore::new(dir.join("missing"));
		assert_eq!(store.list(), None);
		assert!(store.try_list().is_err());
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_list_filters_to_log_files_and_sorts() {
	temp_dir(|dir| {
		fs::write(dir.join("2024-06-03T18-01-23Z.log"), "later")?;
		fs::write(dir.join("2023-01-01T00-00-00Z.log"), "earlier")?;
		fs::write(dir.join("notes.txt"), "not a log")?;
		fs::write(dir.join("README"), "also not a log")?;

		let store = LogStore::new(dir);
		let files = store.list().expect("list log files");

		assert_eq!(files.len(), 2);
		assert!(files[0].ends_with("2023-01-01T00-00-00Z.log"));
		assert!(files[1].ends_with("2024-06-03T18-01-23Z.log"));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_read_returns_whole_file() {
	temp_dir(|dir| {
		let path = dir.join("run.log");
		fs::write(&path, "line one\nline two\n")?;

		let store = LogStore::new(dir);
		assert_eq!(store.read(&path), Some("line one\nline two\n".to_string()));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_read_missing_file_is_absent() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		let path = dir.join("absent.log");

		assert_eq!(store.read(&path), None);
		assert!(store.try_read(&path).is_err());
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_read_non_utf8_is_absent() {
	temp_dir(|dir| {
		let path = dir.join("busted.log");
		fs::write(&path, [0xff, 0xfe, 0x00, 0x80])?;

		let store = LogStore::new(dir);
		assert_eq!(store.read(&path), None);
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_reopening_same_file_appends() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		let first = store.try_create().expect("create log file");
		first.write_line("from the first sink");

		// The same instant derives the same name; append mode keeps
		// both writers' lines
		let second = FileSink::open(first.path()).expect("reopen log file");
		second.write_line("from the second sink");

		let content = store.read(first.path()).expect("read log file");
		assert!(content.contains("from the first sink"));
		assert!(content.contains("from the second sink"));
		Ok(())
	})
	.unwrap();
}

#[test]
fn test_try_read_reports_failing_path() {
	temp_dir(|dir| {
		let store = LogStore::new(dir);
		let error = store.try_read(dir.join("absent.log")).expect_err("read should fail");

		assert!(error.to_string().contains("absent.log"));
		Ok(())
	})
	.unwrap();
}
