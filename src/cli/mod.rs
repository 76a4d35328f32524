// CLI module for command-line interface

pub mod check;
pub mod latest;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::check::CheckCommand;
use self::latest::LatestCommand;
use self::list::ListCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "pkgver")]
#[command(about = "Inspect installed package versions and check a package index for newer releases")]
#[command(long_about = r#"pkgver inspects Python-style installed-package metadata, compares
semantic version triples, and scrapes a package index page to discover
the latest published version of a named package.

Examples:
  pkgver list --path .venv/lib/python3.11/site-packages
  pkgver latest requests                Query the index for the newest release
  pkgver check requests                 Compare installed vs. latest release

Search paths default to the entries of PYTHONPATH when no --path is given."#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List installed packages found under the search paths
    #[command(long_about = r#"Scan the search paths for installed distribution metadata
(*.dist-info and *.egg-info directories) and print every package found
together with its recorded version string.

Examples:
  pkgver list                           Scan the PYTHONPATH entries
  pkgver list --path site-packages      Scan an explicit directory
  pkgver list --json                    Machine-readable output"#)]
    List {
        /// Directory to scan (repeatable; default: PYTHONPATH entries)
        #[arg(long = "path")]
        paths: Vec<PathBuf>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Show the latest version published on the package index
    #[command(long_about = r#"Fetch the package's index page, scrape the listed wheel filenames and
report the highest embedded three-part version. Wheels whose filenames
carry no parseable version are ignored.

Examples:
  pkgver latest requests                Newest release of requests
  pkgver latest requests --files        List wheel files, newest first
  pkgver latest requests --index-url https://example.test/simple"#)]
    Latest {
        /// Package name to look up
        package: String,

        /// Package index base URL
        #[arg(long)]
        index_url: Option<String>,

        /// List the wheel filenames instead of just the version
        #[arg(long)]
        files: bool,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Compare the installed version against the latest index release
    #[command(long_about = r#"Look the package up in the local registry and on the package index,
then report whether the installed version is outdated, up to date, or
ahead of the newest published release.

A package that is not installed at all compares as version 0.0.0, so it
always reports as outdated rather than failing.

Examples:
  pkgver check requests                 Compare against the default index
  pkgver check requests --path site-packages --index-url https://example.test/simple"#)]
    Check {
        /// Package name to check
        package: String,

        /// Directory to scan (repeatable; default: PYTHONPATH entries)
        #[arg(long = "path")]
        paths: Vec<PathBuf>,

        /// Package index base URL
        #[arg(long)]
        index_url: Option<String>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::List { paths, json } => {
                let cmd = ListCommand { paths, json };
                cmd.run()
            }

            Commands::Latest {
                package,
                index_url,
                files,
                json,
            } => {
                let cmd = LatestCommand {
                    package,
                    index_url,
                    files,
                    json,
                };
                cmd.run()
            }

            Commands::Check {
                package,
                paths,
                index_url,
                json,
            } => {
                let cmd = CheckCommand {
                    package,
                    paths,
                    index_url,
                    json,
                };
                cmd.run()
            }
        }
    }
}

/// Build a registry over the given paths, falling back to PYTHONPATH
pub(crate) fn registry_for(paths: Vec<PathBuf>) -> crate::services::PackageRegistry {
    if paths.is_empty() {
        crate::services::PackageRegistry::from_env()
    } else {
        crate::services::PackageRegistry::new(paths)
    }
}

/// Build an index client, optionally against a custom base URL
pub(crate) fn client_for(index_url: Option<String>) -> crate::services::IndexClient {
    match index_url {
        Some(url) => crate::services::IndexClient::with_index_url(url),
        None => crate::services::IndexClient::new(),
    }
}
