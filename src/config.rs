//! Configuration discovery and effective settings resolution.
//!
//! Spdxgate reads `spdxgate.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags and the environment to
//! produce an `Effective` config. Defaults:
//! - `base`: `$GITHUB_BASE_REF`, else `origin/main`
//! - `output`: `human`
//! - `year`: current UTC year
//! - `include`/`exclude`: empty (all changed files considered)
//! - `holder`: unset (no holder filtering)
//!
//! Overrides precedence: CLI > environment > config file > defaults.

use chrono::{Datelike, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Base reference used when neither CLI, environment, nor config supply one.
pub const DEFAULT_BASE: &str = "origin/main";

/// Environment variable consulted for the base reference (set by GitHub
/// Actions on pull requests).
pub const BASE_REF_ENV: &str = "GITHUB_BASE_REF";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `spdxgate.toml|yaml|yml`.
pub struct FileConfig {
    pub base: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub include: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    pub holder: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the check run after applying
/// precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub base: String,
    pub output: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub year: i32,
    pub all_files: bool,
    pub debug: bool,
    pub holder: Option<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `spdxgate.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("spdxgate.toml").exists()
            || cur.join("spdxgate.yaml").exists()
            || cur.join("spdxgate.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FileConfig` from `spdxgate.toml` or `spdxgate.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<FileConfig> {
    let toml_path = root.join("spdxgate.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: FileConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["spdxgate.yaml", "spdxgate.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: FileConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, the environment, discovered
/// config, and defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_base: Option<&str>,
    cli_include: &[String],
    cli_exclude: &[String],
    cli_year: Option<i32>,
    cli_all_files: bool,
    cli_debug: bool,
    cli_holder: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let base = cli_base
        .map(|s| s.to_string())
        .or_else(|| std::env::var(BASE_REF_ENV).ok().filter(|s| !s.is_empty()))
        .or(cfg.base)
        .unwrap_or_else(|| DEFAULT_BASE.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let include = if cli_include.is_empty() {
        cfg.include.unwrap_or_default()
    } else {
        cli_include.to_vec()
    };
    let exclude = if cli_exclude.is_empty() {
        cfg.exclude.unwrap_or_default()
    } else {
        cli_exclude.to_vec()
    };

    let year = cli_year.unwrap_or_else(|| Utc::now().year());

    let holder = cli_holder.map(|s| s.to_string()).or(cfg.holder);

    Effective {
        repo_root,
        base,
        output,
        include,
        exclude,
        year,
        all_files: cli_all_files,
        debug: cli_debug,
        holder,
    }
}
