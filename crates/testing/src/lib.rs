// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Test utilities for the logbook crates

pub mod tempdir;
