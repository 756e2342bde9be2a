//! BrandForge CLI: turn a marketing brief into a website blueprint.
//!
//! Reads a JSON or TOML brief, runs the generation pipeline and prints the
//! blueprint as JSON. Generated blueprints are kept in a local database.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
