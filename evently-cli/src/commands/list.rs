//! `evently list` — fetch and render the full collection.

use anyhow::Result;
use evently_core::EventStore;

use crate::client::Client;
use crate::config::Config;
use crate::render::{self, Render, Theme};

pub async fn run(config: &Config) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    let mut store = EventStore::new(&config.backend);
    store.load(&client).await?;

    let theme = Theme::for_backend(&config.backend);
    println!("{}", render::backend_title(&config.backend, &theme));
    println!();

    if store.events().is_empty() {
        println!("No events yet.");
        return Ok(());
    }

    for event in store.events() {
        println!("{}", event.render(&theme));
        println!();
    }

    Ok(())
}
