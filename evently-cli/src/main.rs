mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Manage event records on a remote evently backend")]
struct Cli {
    /// Backend namespace to talk to (e.g. "flask")
    #[arg(short, long, global = true)]
    backend: Option<String>,

    /// Base URL of the API server
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events, most recent first
    List,
    /// Show a single event
    Show { id: i64 },
    /// Create a new event; missing fields are prompted for
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit an existing event; missing fields are prompted for
    Edit {
        /// Id of the event to edit
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Remove { id: i64 },
    /// Interactive session against one backend
    Session,
    /// Check that the API server is reachable
    Ping,
}

// A current-thread runtime: every intent is one cooperative async unit,
// and store mutations only ever happen when a call resumes.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.api_url.as_deref(), cli.backend.as_deref())?;

    match cli.command {
        Commands::List => commands::list::run(&config).await,
        Commands::Show { id } => commands::show::run(&config, id).await,
        Commands::Add {
            name,
            date,
            location,
            description,
        } => commands::add::run(&config, name, date, location, description).await,
        Commands::Edit {
            id,
            name,
            date,
            location,
            description,
        } => commands::edit::run(&config, id, name, date, location, description).await,
        Commands::Remove { id } => commands::remove::run(&config, id).await,
        Commands::Session => commands::session::run(&config).await,
        Commands::Ping => commands::ping::run(&config).await,
    }
}
