//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spdxgate",
    version,
    about = "SPDX header gate for CI",
    long_about = "Spdxgate — validate SPDX copyright/license headers on changed files.\n\nCompares HEAD against a base revision (or scans every tracked file) and checks that each file's SPDX-FileCopyrightText years and SPDX-License-Identifier line are present and up to date.\n\nConfiguration precedence: CLI > environment > spdxgate.toml > defaults.",
    after_help = "Examples:\n  spdxgate check\n  spdxgate check --base origin/main --exclude 'vendor/**'\n  spdxgate check --all-files --holder '*Acme*' --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current spdxgate version.")]
    Version,
    /// Validate SPDX headers on changed files
    #[command(
        about = "Validate SPDX headers",
        long_about = "Diff the working revision against a base reference, extract SPDX headers from changed files, and report year and license-line violations. Exit codes: 0 clean, 1 violations, 2 unresolvable base reference.",
        after_help = "Examples:\n  spdxgate check --base origin/main\n  spdxgate check --include 'src/**/*.rs' --exclude 'src/generated/**'\n  spdxgate check --all-files --year 2026 --debug"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(
            long,
            help = "Base reference to diff against (default: $GITHUB_BASE_REF or origin/main)"
        )]
        base: Option<String>,
        #[arg(long, help = "Glob pattern to include (repeatable; default: all changed files)")]
        include: Vec<String>,
        #[arg(long, help = "Glob pattern to exclude (repeatable)")]
        exclude: Vec<String>,
        #[arg(long, help = "Current year for validation (default: current UTC year)")]
        year: Option<i32>,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Check all tracked files instead of only changed files"
        )]
        all_files: bool,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Enable per-file trace output on stderr"
        )]
        debug: bool,
        #[arg(
            long,
            help = "Only check files whose copyright holder matches this glob"
        )]
        holder: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
