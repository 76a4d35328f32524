// Latest command: query the package index for the newest release

use anyhow::Context;

/// Print the latest version published on the package index
pub struct LatestCommand {
    pub package: String,
    pub index_url: Option<String>,
    pub files: bool,
    pub json: bool,
}

impl LatestCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let client = super::client_for(self.index_url.clone());

        if self.files {
            let wheels = client
                .available_wheels(&self.package)
                .with_context(|| format!("failed to list releases of '{}'", self.package))?;

            if self.json {
                println!("{}", serde_json::to_string_pretty(&wheels)?);
            } else {
                for wheel in &wheels {
                    println!("{wheel}");
                }
            }
            return Ok(());
        }

        let latest = client
            .latest_version(&self.package)
            .with_context(|| format!("failed to resolve latest version of '{}'", self.package))?;

        if self.json {
            let entry = serde_json::json!({
                "name": self.package,
                "latest": latest.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&entry)?);
        } else {
            println!("{} {latest}", self.package);
        }

        Ok(())
    }
}
