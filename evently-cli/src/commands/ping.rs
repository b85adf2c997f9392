//! `evently ping` — probe the API server's health route.

use anyhow::{Context, Result};
use evently_core::EventApi;

use crate::client::Client;
use crate::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    client
        .health_check()
        .await
        .with_context(|| format!("Server at {} is not reachable", config.api_url))?;

    println!("{} is up", config.api_url);
    Ok(())
}
