// Check command: compare installed version against the latest release

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;

use crate::models::Version;

/// Compare a package's installed version with the index's latest release
pub struct CheckCommand {
    pub package: String,
    pub paths: Vec<PathBuf>,
    pub index_url: Option<String>,
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut registry = super::registry_for(self.paths.clone());
        registry
            .load()
            .context("failed to scan search paths for installed packages")?;

        let installed = registry.lookup(&self.package)?;

        let client = super::client_for(self.index_url.clone());
        let latest = client
            .lookup(&self.package)
            .with_context(|| format!("failed to resolve latest version of '{}'", self.package))?;

        let status = match installed.compare(&latest)? {
            Ordering::Less => "outdated",
            Ordering::Equal => "up-to-date",
            Ordering::Greater => "ahead",
        };

        if self.json {
            let entry = serde_json::json!({
                "name": self.package,
                "installed": fmt_version(installed.version),
                "latest": fmt_version(latest.version),
                "status": status,
            });
            println!("{}", serde_json::to_string_pretty(&entry)?);
        } else {
            println!(
                "{}: installed {}, latest {} ({status})",
                self.package,
                fmt_version(installed.version),
                fmt_version(latest.version),
            );
        }

        Ok(())
    }
}

fn fmt_version(version: Option<Version>) -> String {
    version.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}
