//! `evently add` — create an event from flags or interactive prompts.

use anyhow::Result;
use evently_core::EventStore;

use super::prompt;
use crate::client::Client;
use crate::config::Config;
use crate::render::{Render, Theme};

pub async fn run(
    config: &Config,
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    let mut store = EventStore::new(&config.backend);

    let draft = store.create_draft_mut();
    draft.name = match name {
        Some(value) => value,
        None => prompt("Name", "")?,
    };
    draft.date = match date {
        Some(value) => value,
        None => prompt("Date", "")?,
    };
    draft.location = match location {
        Some(value) => value,
        None => prompt("Location", "")?,
    };
    draft.description = match description {
        Some(value) => value,
        None => prompt("Description", "")?,
    };

    let created = store.create(&client).await?;

    let theme = Theme::for_backend(&config.backend);
    println!("Created:");
    println!("{}", created.render(&theme));
    Ok(())
}
