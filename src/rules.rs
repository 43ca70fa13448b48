//! Compliance rule engine for SPDX header years and license lines.
//!
//! Rules are cumulative: every applicable sub-rule for a file is evaluated
//! and appended to the collector before moving on, so a contributor sees
//! everything wrong with a header in a single CI run. A `None` year field
//! means the header was already reported as malformed upstream and no year
//! rule fires.

use crate::header::parse_years;
use crate::models::Violation;

const HOLDER_PLACEHOLDER: &str = "Your Company Name";

fn correct_header(years_text: &str, holder: Option<&str>) -> String {
    format!(
        "SPDX-FileCopyrightText: {} {}",
        years_text,
        holder.unwrap_or(HOLDER_PLACEHOLDER)
    )
}

/// Render the bilingual message pair carrying the offending line and the
/// corrected replacement.
fn detailed(
    lead_en: &str,
    lead_zh: &str,
    header_line: Option<&str>,
    correct: &str,
) -> (String, String) {
    let current = header_line.map(str::trim).unwrap_or("N/A");
    let en = format!(
        "{}\n  Current: {}\n  Expected: // {} (or # for Python/Shell)",
        lead_en, current, correct
    );
    let zh = format!(
        "{}\n  当前内容：{}\n  建议修改：// {}（Python/Shell 文件用 #）",
        lead_zh, current, correct
    );
    (en, zh)
}

fn push_detailed(
    violations: &mut Vec<Violation>,
    path: &str,
    lead_en: &str,
    lead_zh: &str,
    header_line: Option<&str>,
    correct: &str,
) {
    let (en, zh) = detailed(lead_en, lead_zh, header_line, correct);
    violations.push(Violation::new(path, en, zh));
}

fn push_missing_license(violations: &mut Vec<Violation>, path: &str) {
    violations.push(Violation::new(
        path,
        "Missing SPDX license identifier line below the copyright header.",
        "缺少 SPDX-License-Identifier 行，请紧跟在版权头下方添加。",
    ));
}

/// Validate a newly added file's header.
pub fn validate_new_file(
    path: &str,
    years_field: Option<&str>,
    license_ok: bool,
    current_year: i32,
    header_line: Option<&str>,
    holder: Option<&str>,
    violations: &mut Vec<Violation>,
) {
    let Some(years) = years_field else {
        // Malformed header was reported upstream; nothing more to say here.
        return;
    };

    let (start_year, end_year) = parse_years(years);
    if end_year.is_some() {
        let correct = correct_header(&current_year.to_string(), holder);
        push_detailed(
            violations,
            path,
            "New files must use a single year (no range) in the SPDX header.",
            "新增文件的 SPDX 版权头必须只包含当前年份，不能使用年份范围。",
            header_line,
            &correct,
        );
    } else if start_year != current_year {
        let correct = correct_header(&current_year.to_string(), holder);
        push_detailed(
            violations,
            path,
            &format!("SPDX header year should be {} for new files.", current_year),
            &format!("新增文件的 SPDX 版权年份应为 {}。", current_year),
            header_line,
            &correct,
        );
    }
    if !license_ok {
        push_missing_license(violations, path);
    }
}

/// Validate a modified (or copied/renamed) file's header against its
/// creation year and the current year.
#[allow(clippy::too_many_arguments)]
pub fn validate_modified_file(
    path: &str,
    years_field: Option<&str>,
    license_ok: bool,
    creation_year: Option<i32>,
    current_year: i32,
    header_line: Option<&str>,
    holder: Option<&str>,
    violations: &mut Vec<Violation>,
) {
    let Some(years) = years_field else {
        return;
    };

    let (start_year, end_year) = parse_years(years);
    match end_year {
        None => {
            if start_year != current_year {
                match creation_year {
                    Some(created) if created < current_year => {
                        let range_text = format!("{}-{}", created, current_year);
                        let correct = correct_header(&range_text, holder);
                        push_detailed(
                            violations,
                            path,
                            &format!(
                                "File predates current year; update SPDX header to use a year range {}.",
                                range_text
                            ),
                            &format!(
                                "文件创建年份早于当前年份，请将 SPDX 版权头更新为年份范围 {}。",
                                range_text
                            ),
                            header_line,
                            &correct,
                        );
                    }
                    _ => {
                        let correct = correct_header(&current_year.to_string(), holder);
                        push_detailed(
                            violations,
                            path,
                            &format!("SPDX header year should be {}.", current_year),
                            &format!("请将 SPDX 版权年份更新为 {}。", current_year),
                            header_line,
                            &correct,
                        );
                    }
                }
            } else if let Some(created) = creation_year {
                // Upper bound equals current year but the file's lifespan is
                // longer than one year.
                if created < current_year {
                    let range_text = format!("{}-{}", created, current_year);
                    let correct = correct_header(&range_text, holder);
                    push_detailed(
                        violations,
                        path,
                        &format!(
                            "File has earlier creation year; use range format {}.",
                            range_text
                        ),
                        &format!("该文件创建于较早年份，应使用年份范围格式 {}。", range_text),
                        header_line,
                        &correct,
                    );
                }
            }
        }
        Some(end_year) => {
            // Range sub-rules are independent; one header can accrue several.
            if start_year > end_year {
                let correct = correct_header(&format!("{}-{}", end_year, start_year), holder);
                push_detailed(
                    violations,
                    path,
                    "Invalid SPDX year range (start year greater than end year).",
                    "SPDX 年份范围不合法：起始年份大于结束年份。",
                    header_line,
                    &correct,
                );
            }
            if end_year != current_year {
                let correct = correct_header(&format!("{}-{}", start_year, current_year), holder);
                push_detailed(
                    violations,
                    path,
                    &format!("Update SPDX year range end to {}.", current_year),
                    &format!("请将 SPDX 年份范围的结束年份更新为 {}。", current_year),
                    header_line,
                    &correct,
                );
            }
            if let Some(created) = creation_year {
                if start_year != created {
                    let correct = correct_header(&format!("{}-{}", created, end_year), holder);
                    push_detailed(
                        violations,
                        path,
                        &format!("Year range should start at the file creation year {}.", created),
                        &format!("年份范围应以文件创建年份 {} 开始。", created),
                        header_line,
                        &correct,
                    );
                }
            }
            if start_year == end_year {
                let correct = correct_header(&start_year.to_string(), holder);
                push_detailed(
                    violations,
                    path,
                    "Year range uses identical start and end; use single year format instead.",
                    "年份范围的起止相同，应改为单年份格式。",
                    header_line,
                    &correct,
                );
            }
        }
    }
    if !license_ok {
        push_missing_license(violations, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: i32 = 2026;

    #[test]
    fn test_new_file_missing_year_field_is_silent() {
        let mut violations = Vec::new();
        validate_new_file("test.py", None, false, CURRENT, None, None, &mut violations);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_new_file_current_year_passes() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2026 Test Corp";
        validate_new_file(
            "test.py",
            Some("2026"),
            true,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_new_file_stale_year() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2025 Test Corp";
        validate_new_file(
            "test.py",
            Some("2025"),
            true,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("should be 2026"));
        assert!(violations[0].message_en.contains("Current: // SPDX-FileCopyrightText: 2025 Test Corp"));
        assert!(violations[0]
            .message_en
            .contains("Expected: // SPDX-FileCopyrightText: 2026 Test Corp"));
        assert!(violations[0].message_zh.contains("2026"));
    }

    #[test]
    fn test_new_file_rejects_range() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2023-2026 Test Corp";
        validate_new_file(
            "test.py",
            Some("2023-2026"),
            true,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("single year"));
    }

    #[test]
    fn test_new_file_missing_license() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2026 Test Corp";
        validate_new_file(
            "test.py",
            Some("2026"),
            false,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("license identifier"));
    }

    #[test]
    fn test_modified_missing_year_field_is_silent() {
        let mut violations = Vec::new();
        validate_modified_file(
            "test.py",
            None,
            false,
            Some(2023),
            CURRENT,
            None,
            None,
            &mut violations,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_modified_current_year_created_this_year_passes() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2026 Test Corp";
        validate_modified_file(
            "test.py",
            Some("2026"),
            true,
            Some(CURRENT),
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_modified_stale_single_year_known_creation_recommends_range() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2023 Test Corp";
        validate_modified_file(
            "test.py",
            Some("2023"),
            true,
            Some(2023),
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("year range 2023-2026"));
        assert!(violations[0]
            .message_en
            .contains("Expected: // SPDX-FileCopyrightText: 2023-2026 Test Corp"));
    }

    #[test]
    fn test_modified_stale_single_year_unknown_creation_recommends_current() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2023 Test Corp";
        validate_modified_file(
            "test.py",
            Some("2023"),
            true,
            None,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("should be 2026"));
    }

    #[test]
    fn test_modified_current_year_but_older_creation_recommends_range() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2026 Test Corp";
        validate_modified_file(
            "test.py",
            Some("2026"),
            true,
            Some(2022),
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("range format 2022-2026"));
    }

    #[test]
    fn test_modified_correct_range_passes() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2023-2026 Test Corp";
        validate_modified_file(
            "test.py",
            Some("2023-2026"),
            true,
            Some(2023),
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn test_modified_stale_range_end() {
        let mut violations = Vec::new();
        let header = "# SPDX-FileCopyrightText: 2022-2025 Acme";
        validate_modified_file(
            "file.py",
            Some("2022-2025"),
            true,
            Some(2022),
            CURRENT,
            Some(header),
            Some("Acme"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("Update SPDX year range end to 2026"));
        assert!(violations[0]
            .message_en
            .contains("Expected: // SPDX-FileCopyrightText: 2022-2026 Acme"));
    }

    #[test]
    fn test_modified_identical_range_bounds() {
        let mut violations = Vec::new();
        let header = "# SPDX-FileCopyrightText: 2026-2026 Acme";
        validate_modified_file(
            "file.py",
            Some("2026-2026"),
            true,
            Some(CURRENT),
            CURRENT,
            Some(header),
            Some("Acme"),
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("identical start and end"));
        assert!(violations[0]
            .message_en
            .contains("Expected: // SPDX-FileCopyrightText: 2026 Acme"));
    }

    #[test]
    fn test_modified_range_rules_are_cumulative() {
        // start > end, end != current, start != creation: three findings in
        // one pass, no short-circuiting.
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2025-2024 Test Corp";
        validate_modified_file(
            "test.rs",
            Some("2025-2024"),
            true,
            Some(2022),
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 3);
        assert!(violations[0].message_en.contains("start year greater than end year"));
        assert!(violations[1].message_en.contains("Update SPDX year range end to 2026"));
        assert!(violations[2].message_en.contains("start at the file creation year 2022"));
    }

    #[test]
    fn test_modified_missing_license_stacks_with_year_rules() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2023 Test Corp";
        validate_modified_file(
            "test.rs",
            Some("2023"),
            false,
            None,
            CURRENT,
            Some(header),
            Some("Test Corp"),
            &mut violations,
        );
        assert_eq!(violations.len(), 2);
        assert!(violations[1].message_en.contains("license identifier"));
    }

    #[test]
    fn test_placeholder_holder_in_corrected_line() {
        let mut violations = Vec::new();
        let header = "// SPDX-FileCopyrightText: 2024 ";
        validate_new_file(
            "test.rs",
            Some("2024"),
            true,
            CURRENT,
            Some(header),
            None,
            &mut violations,
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message_en.contains("Your Company Name"));
    }
}
