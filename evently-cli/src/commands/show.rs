//! `evently show` — fetch and render one event by id.

use anyhow::Result;
use evently_core::EventApi;

use crate::client::Client;
use crate::config::Config;
use crate::render::{Render, Theme};

pub async fn run(config: &Config, id: i64) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    let event = client.get_event(id).await?;

    let theme = Theme::for_backend(&config.backend);
    println!("{}", event.render(&theme));
    Ok(())
}
