use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use crate::cli::Cli;

/// Resolved runtime configuration, decoupled from CLI parsing.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub url: Url,
    pub fields: Vec<String>,
    pub timeout: Duration,
    pub log_file: Option<String>,
}

impl Configuration {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let url = Url::parse(&cli.url)
            .with_context(|| format!("invalid listing URL: {}", cli.url))?;
        Ok(Self {
            url,
            fields: cli.fields.clone(),
            timeout: Duration::from_secs(cli.timeout),
            log_file: cli.log_file.clone(),
        })
    }
}
