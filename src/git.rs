//! Version-control queries behind an injectable trait.
//!
//! The checker only needs four operations: resolve the base reference, list
//! files changed since it, list every tracked file, and find the year a path
//! first entered history. `GitCli` shells out to `git`; tests substitute an
//! in-memory implementation.

use crate::models::change::{ChangeEntry, ChangeStatus};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("git {args} failed with exit code {code}:\n{output}")]
    Failed {
        args: String,
        code: i32,
        output: String,
    },
}

/// Version-control history access used by the check runner.
pub trait Vcs {
    /// Verify that `base` names a resolvable revision.
    fn resolve_ref(&self, base: &str) -> Result<(), GitError>;
    /// Files changed between `base` and HEAD, renames/copies normalized to
    /// their destination path.
    fn changed_files(&self, base: &str) -> Result<Vec<ChangeEntry>, GitError>;
    /// Every tracked file, marked `Modified` for validation purposes.
    fn all_files(&self) -> Result<Vec<ChangeEntry>, GitError>;
    /// Year of the earliest recorded commit introducing `path`, if known.
    fn creation_year(&self, path: &str) -> Option<i32>;
}

/// `Vcs` implementation shelling out to the `git` binary.
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new(repo_root: &Path) -> Self {
        GitCli {
            repo_root: repo_root.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let out = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()?;
        if !out.status.success() {
            let mut combined = String::from_utf8_lossy(&out.stdout).to_string();
            combined.push_str(&String::from_utf8_lossy(&out.stderr));
            return Err(GitError::Failed {
                args: args.join(" "),
                code: out.status.code().unwrap_or(-1),
                output: combined,
            });
        }
        Ok(String::from_utf8_lossy(&out.stdout).to_string())
    }
}

impl Vcs for GitCli {
    fn resolve_ref(&self, base: &str) -> Result<(), GitError> {
        self.run(&["rev-parse", base]).map(|_| ())
    }

    fn changed_files(&self, base: &str) -> Result<Vec<ChangeEntry>, GitError> {
        let range = format!("{}...HEAD", base);
        let out = self.run(&["diff", "--name-status", &range, "--diff-filter=ACMR"])?;
        Ok(parse_name_status(&out))
    }

    fn all_files(&self) -> Result<Vec<ChangeEntry>, GitError> {
        let out = self.run(&["ls-files"])?;
        Ok(out
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| ChangeEntry {
                status: ChangeStatus::Modified,
                path: l.trim().to_string(),
            })
            .collect())
    }

    fn creation_year(&self, path: &str) -> Option<i32> {
        let out = self
            .run(&[
                "log",
                "--diff-filter=A",
                "--follow",
                "--format=%ad",
                "--date=format:%Y",
                path,
            ])
            .ok()?;
        // Default log ordering is newest first; the introducing commit is the
        // last non-blank line.
        out.lines()
            .filter(|l| !l.trim().is_empty())
            .last()?
            .trim()
            .parse()
            .ok()
    }
}

/// Parse `git diff --name-status` rows into change entries.
///
/// Rename/copy rows carry three tab-separated columns (status, source,
/// destination); the destination path is kept. Status codes outside the
/// A/M/C/R set are dropped.
pub fn parse_name_status(output: &str) -> Vec<ChangeEntry> {
    let mut entries = Vec::new();
    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        let status = match ChangeStatus::from_code(parts[0]) {
            Some(s) => s,
            None => continue,
        };
        let path = match status {
            ChangeStatus::Renamed | ChangeStatus::Copied => {
                if parts.len() >= 3 {
                    parts[2]
                } else {
                    continue;
                }
            }
            _ => {
                if parts.len() >= 2 {
                    parts[1]
                } else {
                    continue;
                }
            }
        };
        entries.push(ChangeEntry {
            status,
            path: path.to_string(),
        });
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_status_basic() {
        let out = "A\tsrc/new.rs\nM\tsrc/old.rs\n";
        let entries = parse_name_status(out);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, ChangeStatus::Added);
        assert_eq!(entries[0].path, "src/new.rs");
        assert_eq!(entries[1].status, ChangeStatus::Modified);
    }

    #[test]
    fn test_parse_name_status_rename_uses_destination() {
        let out = "R100\tsrc/a.rs\tsrc/b.rs\nC75\tsrc/c.rs\tsrc/d.rs\n";
        let entries = parse_name_status(out);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, ChangeStatus::Renamed);
        assert_eq!(entries[0].path, "src/b.rs");
        assert_eq!(entries[1].status, ChangeStatus::Copied);
        assert_eq!(entries[1].path, "src/d.rs");
    }

    #[test]
    fn test_parse_name_status_drops_unknown_and_blank() {
        let out = "D\tsrc/gone.rs\n\nM\tsrc/kept.rs\n";
        let entries = parse_name_status(out);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "src/kept.rs");
    }

    #[test]
    fn test_parse_name_status_truncated_rows() {
        let out = "R100\tsrc/only-source.rs\nM\n";
        assert!(parse_name_status(out).is_empty());
    }
}
