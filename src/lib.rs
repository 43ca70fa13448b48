//! Spdxgate core library.
//!
//! This crate exposes programmatic APIs for validating SPDX copyright and
//! license headers on files changed between a base git revision and HEAD.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `header`: Header extraction from leading lines and strict parsing.
//! - `git`: Version-control queries behind the `Vcs` trait.
//! - `rules`: The compliance rule engine for years and license lines.
//! - `check`: The per-file check runner and counters.
//! - `models`: Data models for change entries and check output structs.
//! - `output`: Human/JSON printers for check results.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod check;
pub mod cli;
pub mod config;
pub mod git;
pub mod header;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
