//! Spdxgate CLI binary entry point.
//! Delegates to modules for header checking and prints the report.

mod check;
mod cli;
mod config;
mod git;
mod header;
mod models;
mod output;
mod rules;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use git::{GitCli, Vcs};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            base,
            include,
            exclude,
            year,
            all_files,
            debug,
            holder,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                base.as_deref(),
                &include,
                &exclude,
                year,
                all_files,
                debug,
                holder.as_deref(),
                output.as_deref(),
            );
            // Friendly note if no spdxgate config was found
            if config::load_config(&eff.repo_root).is_none() && eff.output != "json" {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No spdxgate.toml found; using defaults."
                );
            }

            let vcs = GitCli::new(&eff.repo_root);
            let entries = if eff.all_files {
                if eff.debug {
                    eprintln!(
                        "{} Running in all-files mode: checking all tracked files",
                        utils::debug_prefix()
                    );
                }
                match vcs.all_files() {
                    Ok(es) => es,
                    Err(e) => {
                        eprintln!("{} {}", utils::error_prefix(), e);
                        std::process::exit(2);
                    }
                }
            } else {
                // An unresolvable base reference is a configuration error and
                // aborts before any per-file processing.
                if let Err(e) = vcs.resolve_ref(&eff.base) {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
                if eff.debug {
                    eprintln!(
                        "{} Running in diff mode: checking files changed since {}",
                        utils::debug_prefix(),
                        eff.base
                    );
                }
                match vcs.changed_files(&eff.base) {
                    Ok(es) => es,
                    Err(e) => {
                        eprintln!("{} {}", utils::error_prefix(), e);
                        std::process::exit(2);
                    }
                }
            };

            if entries.is_empty() {
                if eff.output == "json" {
                    // Emit an empty result so machine consumers always get a
                    // document.
                    let empty = check::run_check(&eff, &vcs, &[]);
                    output::print_check(&empty, &eff.output);
                } else {
                    println!("No applicable file changes detected; skipping SPDX validation.");
                }
                return;
            }
            if eff.debug {
                eprintln!(
                    "{} Found {} file(s) to process",
                    utils::debug_prefix(),
                    entries.len()
                );
            }

            let result = check::run_check(&eff, &vcs, &entries);
            output::print_check(&result, &eff.output);
            if result.summary.violations > 0 {
                std::process::exit(1);
            }
        }
    }
}
