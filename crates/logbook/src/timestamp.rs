// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! ISO 8601 timestamp rendering for log lines and log file names

use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant, UTC
pub fn now() -> DateTime<Utc> {
	Utc::now()
}

/// Render an instant for a log line prefix: `2024-06-03T18:01:23Z`.
///
/// Whole seconds, UTC, `Z` designator.
pub fn line(at: &DateTime<Utc>) -> String {
	at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render an instant for a log file name: `2024-06-03T18-01-23Z`.
///
/// Same instant as [`line`], but with the time separators flattened to
/// hyphens. Colons are not legal in file names on every platform.
pub fn file_name(at: &DateTime<Utc>) -> String {
	at.format("%Y-%m-%dT%H-%M-%SZ").to_string()
}
