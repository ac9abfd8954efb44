// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Log severity levels

use std::fmt;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
	Info = 0,
	Warn = 1,
	Error = 2,
}

impl LogLevel {
	/// Whether calls at this level attach call-site context when the
	/// caller does not decide explicitly. Only errors do.
	pub fn logs_context_by_default(&self) -> bool {
		matches!(self, LogLevel::Error)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}
