//! `evently remove` — delete an event by id.

use anyhow::Result;
use evently_core::EventStore;

use crate::client::Client;
use crate::config::Config;

pub async fn run(config: &Config, id: i64) -> Result<()> {
    let client = Client::new(&config.api_url, &config.backend);
    let mut store = EventStore::new(&config.backend);

    store.delete(&client, id).await?;
    println!("Deleted event {id}");
    Ok(())
}
