// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! The log record value and its single-line rendering

use std::fmt;

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::{Context, LogLevel, timestamp};

/// A single log entry: one instant, one severity, one message, and the
/// call-site context when the caller asked for it
#[derive(Debug, Clone)]
pub struct Record {
	/// Instant the record was created
	pub timestamp: DateTime<Utc>,
	/// Log severity level
	pub level: LogLevel,
	/// Message body, rendered verbatim
	pub message: String,
	/// Call-site context; `None` renders no suffix
	pub context: Option<Context>,
}

impl Record {
	pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
		Self {
			timestamp: timestamp::now(),
			level,
			message: message.into(),
			context: None,
		}
	}

	pub fn with_context(mut self, context: Context) -> Self {
		self.context = Some(context);
		self
	}

	/// Render the record as one line:
	///
	/// ```text
	/// <timestamp> <LEVEL>: <message>[ ➜ <file>:<line> <function>]
	/// ```
	pub fn render(&self) -> String {
		self.render_with(self.level.as_str())
	}

	/// Render with the severity token colorized. Timestamp, message, and
	/// context stay plain.
	pub fn render_colored(&self) -> String {
		let level = match self.level {
			LogLevel::Info => self.level.as_str().green(),
			LogLevel::Warn => self.level.as_str().yellow(),
			LogLevel::Error => self.level.as_str().red(),
		};
		self.render_with(level)
	}

	fn render_with(&self, level: impl fmt::Display) -> String {
		let mut line = format!("{} {}: {}", timestamp::line(&self.timestamp), level, self.message);
		if let Some(context) = &self.context {
			line.push_str(&format!(" ➜ {}", context));
		}
		line
	}
}
