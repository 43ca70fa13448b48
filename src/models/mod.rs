//! Shared data models for check output and change classification.

pub mod change;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// A single header compliance failure with bilingual messages.
pub struct Violation {
    pub path: String,
    pub message_en: String,
    pub message_zh: String,
}

impl Violation {
    pub fn new(path: &str, message_en: impl Into<String>, message_zh: impl Into<String>) -> Self {
        Violation {
            path: path.to_string(),
            message_en: message_en.into(),
            message_zh: message_zh.into(),
        }
    }
}

#[derive(Debug, Serialize)]
/// Aggregated counters used by printers and the final exit decision.
pub struct Summary {
    pub checked: usize,
    pub passed: usize,
    pub skipped: usize,
    pub ignored: usize,
    pub violations: usize,
}

#[derive(Debug, Serialize)]
/// Check results container.
pub struct CheckResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}
