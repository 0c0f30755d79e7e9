mod api;
mod app;
mod cli;
mod configuration;
mod fetcher;
mod filter;
mod tracing;
mod types;

use std::path::Path;

use anyhow::Result;
use dotenvy::dotenv;

fn main() -> Result<()> {
    dotenv().ok();
    crate::tracing::init();

    let cli = cli::parse();
    crate::tracing::set_log_file(cli.log_file.as_deref().map(Path::new));

    let config = configuration::Configuration::from_cli(&cli)?;
    let collections = app::run(&config)?;

    println!("{}", serde_json::to_string_pretty(&collections)?);
    Ok(())
}
