//! Check runner: walks the change list and evaluates header compliance.
//!
//! Produces a `CheckResult` with violations and a summary. Files are
//! processed strictly in change-list order; every per-file problem is
//! recorded as a `Violation` and processing continues with the next file.

use crate::config::Effective;
use crate::git::Vcs;
use crate::header::{extract_header_lines, parse_header_line, parse_license_line};
use crate::models::change::{ChangeEntry, ChangeStatus};
use crate::models::{CheckResult, Summary, Violation};
use crate::rules::{validate_modified_file, validate_new_file};
use crate::utils;
use glob::Pattern;

fn matches_any(patterns: &[Pattern], path: &str) -> bool {
    patterns.iter().any(|p| p.matches(path))
}

fn compile_patterns(raw: &[String]) -> Vec<Pattern> {
    // Unparseable globs can never match; drop them with a note so a typo'd
    // pattern does not silently widen or narrow the run.
    let mut patterns = Vec::new();
    for p in raw {
        match Pattern::new(p) {
            Ok(pat) => patterns.push(pat),
            Err(_) => eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("Ignoring unparseable glob pattern: {}", p)
            ),
        }
    }
    patterns
}

fn trace(eff: &Effective, msg: &str) {
    if eff.debug {
        eprintln!("{} {}", utils::debug_prefix(), msg);
    }
}

/// Run header validation over `entries`, consulting `vcs` for creation
/// years of modified files.
pub fn run_check(eff: &Effective, vcs: &dyn Vcs, entries: &[ChangeEntry]) -> CheckResult {
    let include = compile_patterns(&eff.include);
    let exclude = compile_patterns(&eff.exclude);
    let holder_filter = match eff.holder.as_deref() {
        Some(p) => match Pattern::new(p) {
            Ok(pat) => Some(pat),
            Err(_) => {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    format!("Ignoring unparseable holder pattern: {}", p)
                );
                None
            }
        },
        None => None,
    };

    let mut violations: Vec<Violation> = Vec::new();
    let mut checked = 0usize;
    let mut passed = 0usize;
    let mut skipped = 0usize;
    let mut ignored = 0usize;

    for entry in entries {
        let rel_path = entry.path.as_str();
        let full_path = eff.repo_root.join(rel_path);

        // Gate on the configured list, not the compiled one: an include list
        // consisting solely of unparseable globs admits nothing.
        if !eff.include.is_empty() && !matches_any(&include, rel_path) {
            trace(eff, &format!("⊘ Skipped (not in include patterns): {}", rel_path));
            skipped += 1;
            continue;
        }
        if matches_any(&exclude, rel_path) {
            trace(eff, &format!("⊘ Skipped (in exclude patterns): {}", rel_path));
            skipped += 1;
            continue;
        }
        if full_path.is_dir() {
            trace(eff, &format!("⊘ Skipped (directory): {}", rel_path));
            skipped += 1;
            continue;
        }

        let found = extract_header_lines(&full_path);
        let Some(header_line) = found.copyright_line.as_deref() else {
            // Files without a copyright line are out of scope, not failures.
            trace(eff, &format!("⊘ Skipped (no SPDX header): {}", rel_path));
            skipped += 1;
            continue;
        };

        let parsed = parse_header_line(header_line);

        if let Some(filter) = &holder_filter {
            // Holder filter is a pre-filter: a non-matching (or unverifiable)
            // holder excludes the file from all rule evaluation.
            let holder_matches = parsed
                .as_ref()
                .map(|p| filter.matches(p.holder.trim()))
                .unwrap_or(false);
            if !holder_matches {
                trace(eff, &format!("⊘ Ignored (holder mismatch): {}", rel_path));
                ignored += 1;
                continue;
            }
        }

        checked += 1;
        let before = violations.len();

        let mut years_field: Option<String> = None;
        let mut holder: Option<String> = None;
        let mut header_prefix: Option<String> = None;
        match &parsed {
            Some(p) => {
                years_field = Some(p.years.clone());
                if p.holder.trim().is_empty() {
                    violations.push(Violation::new(
                        rel_path,
                        "SPDX header format is invalid: missing copyright holder.",
                        "SPDX 版权头格式不正确：缺少版权持有者信息。",
                    ));
                } else {
                    holder = Some(p.holder.clone());
                    header_prefix = Some(p.prefix.clone());
                }
            }
            None => {
                violations.push(Violation::new(
                    rel_path,
                    "SPDX header format is invalid.",
                    "SPDX 版权头格式不符合要求。",
                ));
            }
        }

        let mut license_ok = false;
        if let Some(license_line) = found.license_line.as_deref() {
            match parse_license_line(license_line) {
                Some(lic) => {
                    license_ok = header_prefix
                        .as_deref()
                        .map(|p| p == lic.prefix)
                        .unwrap_or(true);
                    if !license_ok {
                        violations.push(Violation::new(
                            rel_path,
                            "SPDX header and license lines must use the same comment prefix.",
                            "SPDX 版权头与许可证行需使用相同的注释前缀。",
                        ));
                    }
                }
                None => {
                    violations.push(Violation::new(
                        rel_path,
                        "SPDX license identifier line format is invalid.",
                        "SPDX-License-Identifier 行格式不正确。",
                    ));
                }
            }
        }

        match entry.status {
            ChangeStatus::Added => validate_new_file(
                rel_path,
                years_field.as_deref(),
                license_ok,
                eff.year,
                Some(header_line),
                holder.as_deref(),
                &mut violations,
            ),
            ChangeStatus::Modified | ChangeStatus::Copied | ChangeStatus::Renamed => {
                let creation_year = vcs.creation_year(rel_path);
                validate_modified_file(
                    rel_path,
                    years_field.as_deref(),
                    license_ok,
                    creation_year,
                    eff.year,
                    Some(header_line),
                    holder.as_deref(),
                    &mut violations,
                );
            }
        }

        if violations.len() > before {
            trace(eff, &format!("✗ Failed: {}", rel_path));
        } else {
            trace(eff, &format!("✓ Passed: {}", rel_path));
            passed += 1;
        }
    }

    trace(
        eff,
        &format!(
            "Summary: {} checked, {} passed, {} failed, {} skipped, {} ignored",
            checked,
            passed,
            violations.len(),
            skipped,
            ignored
        ),
    );

    let total = violations.len();
    CheckResult {
        violations,
        summary: Summary {
            checked,
            passed,
            skipped,
            ignored,
            violations: total,
        },
    }
}
