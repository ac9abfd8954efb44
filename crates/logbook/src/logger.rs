// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! The logger and its builder

use std::{fmt, path::PathBuf, sync::Arc};

use crate::{
	Context, LogLevel, Record,
	sink::{FileSink, LogSink, StderrSink},
	store::LogStore,
};

/// Leveled logger over one injected sink.
///
/// All configuration happens at construction; a built logger is
/// immutable, cheap to clone, and safe to share across threads. Build
/// one during startup and clone it wherever logging is needed.
#[derive(Clone)]
pub struct Logger {
	sink: Arc<dyn LogSink>,
	min_level: LogLevel,
	color: bool,
}

impl Logger {
	/// Logger writing to the process standard error stream, or to a
	/// fresh per-run log file in the per-user data directory when
	/// `create_log_file` is true.
	///
	/// When the log file cannot be created the logger silently keeps
	/// the standard error stream; construction never fails.
	pub fn new(create_log_file: bool) -> Self {
		Self::builder().with_log_file(create_log_file).build()
	}

	pub fn builder() -> LoggerBuilder {
		LoggerBuilder::new()
	}

	/// Log at Info severity, without call-site context on the line
	pub fn info(&self, message: impl fmt::Display, context: Context) {
		self.level_default(LogLevel::Info, message, context);
	}

	/// Log at Warn severity, without call-site context on the line
	pub fn warn(&self, message: impl fmt::Display, context: Context) {
		self.level_default(LogLevel::Warn, message, context);
	}

	/// Log at Error severity, with call-site context on the line.
	///
	/// Any error value works as the message:
	/// `logger.error(err, context!())`.
	pub fn error(&self, message: impl fmt::Display, context: Context) {
		self.level_default(LogLevel::Error, message, context);
	}

	/// The generic entry point: log `message` at `level`, attaching
	/// `context` to the line when `should_log_context` is true.
	///
	/// Never returns an error and never panics; a failing sink drops
	/// the line.
	pub fn log(
		&self,
		level: LogLevel,
		message: impl fmt::Display,
		should_log_context: bool,
		context: Context,
	) {
		if level < self.min_level {
			return;
		}

		let mut record = Record::new(level, message.to_string());
		if should_log_context {
			record = record.with_context(context);
		}

		let line = if self.color {
			record.render_colored()
		} else {
			record.render()
		};
		self.sink.write_line(&line);
	}

	fn level_default(&self, level: LogLevel, message: impl fmt::Display, context: Context) {
		self.log(level, message, level.logs_context_by_default(), context);
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new(false)
	}
}

/// Builder for configuring a [`Logger`] with a fluent API
pub struct LoggerBuilder {
	sink: Option<Arc<dyn LogSink>>,
	with_log_file: bool,
	directory: Option<PathBuf>,
	min_level: LogLevel,
	color: bool,
}

impl LoggerBuilder {
	/// New builder with default settings: standard error output, every
	/// level emitted, plain text
	pub fn new() -> Self {
		Self {
			sink: None,
			with_log_file: false,
			directory: None,
			min_level: LogLevel::Info,
			color: false,
		}
	}

	/// Write to an injected sink instead of the built-in targets.
	/// Takes precedence over [`Self::with_log_file`].
	pub fn sink(mut self, sink: Arc<dyn LogSink>) -> Self {
		self.sink = Some(sink);
		self
	}

	/// Create a per-run log file and write to it instead of the
	/// standard error stream
	pub fn with_log_file(mut self, enabled: bool) -> Self {
		self.with_log_file = enabled;
		self
	}

	/// Directory for the per-run log file, overriding the per-user data
	/// directory
	pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
		self.directory = Some(directory.into());
		self
	}

	/// Drop records below `level`
	pub fn min_level(mut self, level: LogLevel) -> Self {
		self.min_level = level;
		self
	}

	/// Colorize the severity token on emitted lines
	pub fn color(mut self, enabled: bool) -> Self {
		self.color = enabled;
		self
	}

	/// Build the logger with the configured settings.
	///
	/// Never fails: when the per-run log file cannot be created the
	/// logger keeps the standard error stream.
	pub fn build(mut self) -> Logger {
		let sink: Arc<dyn LogSink> = match self.sink.take() {
			Some(sink) => sink,
			None => match self.file_sink() {
				Some(file) => Arc::new(file),
				None => Arc::new(StderrSink::new()),
			},
		};

		Logger {
			sink,
			min_level: self.min_level,
			color: self.color,
		}
	}

	fn file_sink(&self) -> Option<FileSink> {
		if !self.with_log_file {
			return None;
		}
		let store = match &self.directory {
			Some(directory) => LogStore::new(directory),
			None => LogStore::user_default()?,
		};
		store.create()
	}
}

impl Default for LoggerBuilder {
	fn default() -> Self {
		Self::new()
	}
}
