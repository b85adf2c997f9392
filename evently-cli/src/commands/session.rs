//! `evently session` — interactive loop holding one store and its drafts.
//!
//! Drafts survive failed submissions: a rejected create or update leaves
//! the entered values in place and the next prompt re-offers them, so
//! nothing has to be retyped. Switching backends constructs a fresh store
//! rather than re-pointing the old one.

use anyhow::Result;
use dialoguer::{Input, Select};
use evently_core::EventStore;

use super::prompt;
use crate::client::Client;
use crate::config::Config;
use crate::render::{self, Render, Theme};

const MENU: &[&str] = &[
    "refresh",
    "add",
    "edit",
    "inspect",
    "delete",
    "switch backend",
    "quit",
];

pub async fn run(config: &Config) -> Result<()> {
    let mut backend = config.backend.clone();
    let mut client = Client::new(&config.api_url, &backend);
    let mut store = EventStore::new(&backend);
    let mut theme = Theme::for_backend(&backend);

    if let Err(err) = store.load(&client).await {
        eprintln!("Could not reach {}: {err}", config.api_url);
    }

    loop {
        print_cards(&store, &backend, &theme);

        let choice = Select::new()
            .with_prompt("Action")
            .items(MENU)
            .default(0)
            .interact()?;

        match MENU[choice] {
            "refresh" => {
                if let Err(err) = store.load(&client).await {
                    eprintln!("Refresh failed: {err}");
                }
            }
            "add" => {
                fill_create_draft(&mut store)?;
                match store.create(&client).await {
                    Ok(created) => println!("Created event {}", created.id),
                    Err(err) => eprintln!("Create failed: {err} (your input was kept)"),
                }
            }
            "edit" => {
                fill_update_draft(&mut store)?;
                match store.update(&client).await {
                    Ok(()) => println!("Updated"),
                    Err(err) => eprintln!("Update failed: {err} (your input was kept)"),
                }
            }
            "inspect" => {
                let id: i64 = Input::new().with_prompt("Event id").interact_text()?;
                match store.refresh_one(&client, id).await {
                    Ok(event) => println!("{}", event.render(&theme)),
                    Err(err) => eprintln!("Fetch failed: {err}"),
                }
            }
            "delete" => {
                let id: i64 = Input::new().with_prompt("Event id").interact_text()?;
                if let Err(err) = store.delete(&client, id).await {
                    eprintln!("Delete failed: {err}");
                }
            }
            "switch backend" => {
                let next: String = Input::new()
                    .with_prompt("Backend name")
                    .with_initial_text(&backend)
                    .interact_text()?;
                if next != backend {
                    // Fresh store per backend: a late reply from the old
                    // one can no longer land in the new collection.
                    backend = next;
                    client = Client::new(&config.api_url, &backend);
                    store = EventStore::new(&backend);
                    theme = Theme::for_backend(&backend);
                    if let Err(err) = store.load(&client).await {
                        eprintln!("Could not load {backend}: {err}");
                    }
                }
            }
            "quit" => break,
            _ => unreachable!(),
        }
        println!();
    }

    Ok(())
}

fn print_cards(store: &EventStore, backend: &str, theme: &Theme) {
    println!("{}", render::backend_title(backend, theme));
    if store.events().is_empty() {
        println!("(no events)");
    }
    for event in store.events() {
        println!("{}", event.render(theme));
    }
    println!();
}

fn fill_create_draft(store: &mut EventStore) -> Result<()> {
    let draft = store.create_draft_mut();
    draft.name = prompt("Name", &draft.name)?;
    draft.date = prompt("Date", &draft.date)?;
    draft.location = prompt("Location", &draft.location)?;
    draft.description = prompt("Description", &draft.description)?;
    Ok(())
}

fn fill_update_draft(store: &mut EventStore) -> Result<()> {
    let draft = store.update_draft_mut();
    draft.id = prompt("Event id", &draft.id)?;
    draft.name = prompt("Name", &draft.name)?;
    draft.date = prompt("Date", &draft.date)?;
    draft.location = prompt("Location", &draft.location)?;
    draft.description = prompt("Description", &draft.description)?;
    Ok(())
}
