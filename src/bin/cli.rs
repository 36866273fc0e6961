// src/bin/cli.rs
use color_eyre::eyre::{self, eyre};

use pagepick::cli;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!(e.to_string()))
}
