//! Change classification consumed from version control.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Kind of change a file underwent between the base revision and HEAD.
///
/// Renames and copies carry the destination path and are validated with the
/// modified-file rule set.
pub enum ChangeStatus {
    Added,
    Modified,
    Copied,
    Renamed,
}

impl ChangeStatus {
    /// Map a `git diff --name-status` code onto a status.
    ///
    /// Rename/copy codes carry a similarity score suffix (e.g. `R100`), so
    /// only the first byte is significant. Unknown codes yield `None` and the
    /// row is dropped by the caller.
    pub fn from_code(code: &str) -> Option<ChangeStatus> {
        match code.chars().next()? {
            'A' => Some(ChangeStatus::Added),
            'M' => Some(ChangeStatus::Modified),
            'C' => Some(ChangeStatus::Copied),
            'R' => Some(ChangeStatus::Renamed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// One row of classifier output: a status and the repository-relative path.
pub struct ChangeEntry {
    pub status: ChangeStatus,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ChangeStatus::from_code("A"), Some(ChangeStatus::Added));
        assert_eq!(ChangeStatus::from_code("M"), Some(ChangeStatus::Modified));
        assert_eq!(ChangeStatus::from_code("C75"), Some(ChangeStatus::Copied));
        assert_eq!(ChangeStatus::from_code("R100"), Some(ChangeStatus::Renamed));
        assert_eq!(ChangeStatus::from_code("D"), None);
        assert_eq!(ChangeStatus::from_code(""), None);
    }
}
