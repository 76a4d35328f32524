// List command: print installed packages from the local registry

use std::path::PathBuf;

use anyhow::Context;

/// Scan the search paths and print the installed packages
pub struct ListCommand {
    pub paths: Vec<PathBuf>,
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let mut registry = super::registry_for(self.paths.clone());
        registry
            .load()
            .context("failed to scan search paths for installed packages")?;

        let mut packages: Vec<(&str, &str)> = registry.iter()?.collect();
        packages.sort();

        if self.json {
            let entries: Vec<serde_json::Value> = packages
                .iter()
                .map(|(name, version)| {
                    serde_json::json!({
                        "name": name,
                        "version": version,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for (name, version) in &packages {
                println!("{name} {version}");
            }
        }

        Ok(())
    }
}
