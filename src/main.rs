// pkgver - package version inspector
// Main CLI entry point

use clap::Parser;
use pkgver::cli::{Cli, CliDispatcher};
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = CliDispatcher::execute(cli.command) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
