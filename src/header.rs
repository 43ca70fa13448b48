//! SPDX header extraction and parsing.
//!
//! Extraction scans the first 10 physical lines of a file for a
//! `SPDX-FileCopyrightText` line and, after it, a `SPDX-License-Identifier`
//! line. Parsing turns a matched line into structured fields; format
//! validation against the anchored patterns happens here, while year
//! semantics are judged by the rule engine.

use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;

/// Number of leading lines considered when locating the header.
pub const HEADER_WINDOW: usize = 10;

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<prefix>//|#)\s*SPDX-FileCopyrightText:\s*(?P<years>\d{4}(?:-\d{4})?)\s+(?P<holder>.+)$")
            .unwrap()
    })
}

fn license_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<prefix>//|#)\s*SPDX-License-Identifier:\s*(?P<license>\S.*)$").unwrap()
    })
}

// Presence patterns used during extraction. Deliberately looser than the
// strict parse patterns: a line carrying the marker after a comment prefix is
// recorded even when its fields are malformed, so the parser can report a
// format violation instead of the file silently falling out of scope.
fn header_presence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?://|#)\s*SPDX-FileCopyrightText\s*:").unwrap())
}

fn license_presence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?://|#)\s*SPDX-License-Identifier\s*:").unwrap())
}

#[derive(Debug, Default)]
/// Raw header lines located within the leading window of a file.
///
/// `license_line` is only set when a copyright line was found at or before it
/// in scan order.
pub struct HeaderMatch {
    pub copyright_line: Option<String>,
    pub license_line: Option<String>,
}

#[derive(Debug, Clone)]
/// Structured form of a matched copyright line.
pub struct ParsedHeader {
    pub prefix: String,
    pub years: String,
    pub holder: String,
}

#[derive(Debug, Clone)]
/// Structured form of a matched license-identifier line.
pub struct LicenseMatch {
    pub prefix: String,
    pub license: String,
}

/// Scan the first [`HEADER_WINDOW`] lines of `path` for header lines.
///
/// Missing or non-UTF-8 files yield an empty match; such files are out of
/// scope for validation rather than violations. Blank lines are skipped
/// without ending the scan, and a UTF-8 BOM plus line endings are stripped
/// before matching.
pub fn extract_header_lines(path: &Path) -> HeaderMatch {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return HeaderMatch::default(),
    };
    let reader = BufReader::new(file);

    let mut found = HeaderMatch::default();
    for raw in reader.lines().take(HEADER_WINDOW) {
        let raw = match raw {
            Ok(l) => l,
            // Undecodable content (binary file) ends the scan with whatever
            // was found so far; a file without a copyright line is skipped.
            Err(_) => return HeaderMatch::default(),
        };
        let line = raw
            .trim_start_matches('\u{feff}')
            .trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        if found.copyright_line.is_none() && header_presence_regex().is_match(line) {
            found.copyright_line = Some(line.to_string());
            continue;
        }
        if found.copyright_line.is_some()
            && found.license_line.is_none()
            && license_presence_regex().is_match(line)
        {
            found.license_line = Some(line.to_string());
            break;
        }
    }
    found
}

/// Parse a copyright line into its prefix, year field, and holder.
pub fn parse_header_line(line: &str) -> Option<ParsedHeader> {
    let caps = header_regex().captures(line.trim())?;
    Some(ParsedHeader {
        prefix: caps["prefix"].to_string(),
        years: caps["years"].to_string(),
        holder: caps["holder"].to_string(),
    })
}

/// Parse a license-identifier line into its prefix and license expression.
pub fn parse_license_line(line: &str) -> Option<LicenseMatch> {
    let caps = license_regex().captures(line.trim())?;
    Some(LicenseMatch {
        prefix: caps["prefix"].to_string(),
        license: caps["license"].to_string(),
    })
}

/// Split a year field into start and optional end years.
///
/// The field is regex-anchored upstream, so both halves are four-digit
/// numbers by construction.
pub fn parse_years(years: &str) -> (i32, Option<i32>) {
    match years.split_once('-') {
        Some((start, end)) => (
            start.parse().unwrap_or(0),
            Some(end.parse().unwrap_or(0)),
        ),
        None => (years.parse().unwrap_or(0), None),
    }
}

/// Render a year field back to its textual form.
pub fn format_year_field(start: i32, end: Option<i32>) -> String {
    match end {
        Some(e) => format!("{}-{}", start, e),
        None => start.to_string(),
    }
}
