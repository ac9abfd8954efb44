// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Leveled logging with call-site context and per-run log files.
//!
//! This crate provides:
//! - Three severities (`INFO`, `WARN`, `ERROR`) with a fixed line format
//! - Optional call-site context (file, function, line) on any line
//! - An injectable sink abstraction for output targets
//! - Per-run timestamped log files in the per-user data directory
//!
//! # Architecture
//!
//! A [`Logger`] renders each call into one line and hands it to a
//! [`LogSink`]. Sinks are injected at construction: the standard error
//! stream by default, a [`FileSink`] created by a [`LogStore`] when a
//! per-run file is requested, or anything else implementing the trait.
//! Logging never returns errors; failed writes are dropped.
//!
//! # Usage
//!
//! ```ignore
//! use logbook::{LogStore, Logger, error, info};
//!
//! // Build once during startup; clone anywhere
//! let logger = Logger::new(false);
//!
//! info!(logger, "listening on {}", addr);
//!
//! // Errors put the call site on the line
//! error!(logger, "lost connection to {peer}");
//!
//! // Read back earlier runs
//! if let Some(store) = LogStore::user_default() {
//!     for path in store.list().unwrap_or_default() {
//!         println!("{}", store.read(&path).unwrap_or_default());
//!     }
//! }
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod context;
mod level;
mod logger;
mod macros;
mod record;
pub mod sink;
mod store;
pub mod timestamp;

// Re-export from context
pub use context::Context;

// Re-export from level
pub use level::LogLevel;

// Re-export from logger
pub use logger::{Logger, LoggerBuilder};

// Re-export from record
pub use record::Record;

// Re-export from sink
pub use sink::{FileSink, LogSink, MemorySink, StderrSink};

// Re-export from store
pub use store::{LogStore, StoreError};
