//! Output rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. Human output prints each
//! violation's English paragraph followed by its Chinese paragraph; the JSON
//! form includes per-violation fields and a top-level summary.

use crate::models::CheckResult;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print check results in the requested format.
pub fn print_check(res: &CheckResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if res.violations.is_empty() {
                let msg = "All checked files have valid SPDX headers.";
                if color {
                    println!("{}", msg.green().bold());
                } else {
                    println!("{}", msg);
                }
            } else {
                let heading = "SPDX header validation failed:";
                if color {
                    println!("{}\n", heading.red().bold());
                } else {
                    println!("{}\n", heading);
                }
                for v in &res.violations {
                    let loc = format!("[{}]", v.path);
                    if color {
                        println!("{} {}", loc.bold(), v.message_en);
                    } else {
                        println!("{} {}", loc, v.message_en);
                    }
                    println!("{}", v.message_zh);
                    println!();
                }
            }
            let summary = format!(
                "— Summary — checked={} passed={} violations={} skipped={} ignored={}",
                res.summary.checked,
                res.summary.passed,
                res.summary.violations,
                res.summary.skipped,
                res.summary.ignored
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult) -> JsonVal {
    // Directly serialize CheckResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
