// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! erblint adapter library.
//!
//! Finds the `.erb-lint.yml` that applies to a buffer, builds the erblint
//! command line, runs it, and parses the offenses it prints.

pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;
