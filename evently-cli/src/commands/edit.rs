//! `evently edit` — update one event's fields.

use anyhow::Result;
use evently_core::EventStore;

use super::prompt;
use crate::client::Client;
use crate::config::Config;
use crate::render::{Render, Theme};

pub async fn run(
    config: &Config,
    id: String,
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    let mut store = EventStore::new(&config.backend);
    store.load(&client).await?;

    // Seed the prompts from the current server copy when the id is known,
    // so an untouched field keeps its value.
    let current = id
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| store.events().iter().find(|e| e.id == id).cloned());
    let seed = |field: fn(&evently_core::Event) -> &String| {
        current.as_ref().map(field).cloned().unwrap_or_default()
    };

    let draft = store.update_draft_mut();
    draft.id = id;
    draft.name = match name {
        Some(value) => value,
        None => prompt("Name", &seed(|e| &e.name))?,
    };
    draft.date = match date {
        Some(value) => value,
        None => prompt("Date", &seed(|e| &e.date))?,
    };
    draft.location = match location {
        Some(value) => value,
        None => prompt("Location", &seed(|e| &e.location))?,
    };
    draft.description = match description {
        Some(value) => value,
        None => prompt("Description", &seed(|e| &e.description))?,
    };

    let target = draft.target_id();
    store.update(&client).await?;

    let theme = Theme::for_backend(&config.backend);
    match target.ok().and_then(|id| {
        store.events().iter().find(|e| e.id == id)
    }) {
        Some(updated) => {
            println!("Updated:");
            println!("{}", updated.render(&theme));
        }
        None => println!("Update acknowledged (no such event in the current list)."),
    }
    Ok(())
}
