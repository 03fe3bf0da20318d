// Snapshot runner: one fetch cycle printed to stdout.
//
// Stands in for the presentation layer: wires config, transport, pipeline
// and favorites together, runs the startup fetch and prints the view.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_client::AgentClient;
use scout_core::{
    filters, recency, AgentTransport, Config, FavoritesStore, FetchController, FileStore,
    FilterState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,scout_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Job Scout");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Build transport and pipeline
    let mut client = AgentClient::new(&config.agent_id)?;
    if let Some(url) = &config.agent_api_url {
        client = client.with_base_url(url);
    }
    let transport = Arc::new(AgentTransport::new(client));
    let mut controller = FetchController::new(transport, config.search_query.clone());
    let favorites = FavoritesStore::load(Arc::new(FileStore::new(&config.favorites_dir)));

    // Startup fetch
    controller.refresh().await;

    if let Some(error) = controller.error() {
        println!("Fetch failed: {}", error);
        return Ok(());
    }

    if let Some(updated) = controller.last_updated() {
        println!("Last updated: {}", updated.to_rfc3339());
    }

    let now = Utc::now();
    let state = FilterState::new();
    let visible = filters::apply(controller.jobs(), &state, now);
    let locations = filters::available_locations(controller.jobs());

    println!(
        "{} job{} found across {} location{}\n",
        visible.len(),
        if visible.len() == 1 { "" } else { "s" },
        locations.len(),
        if locations.len() == 1 { "" } else { "s" },
    );

    for job in &visible {
        let age = recency::classify(&job.posted_date, now);
        let star = if favorites.is_favorite(&job.link) { "*" } else { " " };
        let new_badge = if age.is_new { " [NEW]" } else { "" };

        println!("{} {}{}", star, job.title, new_badge);
        println!("    {} | {} | {}", job.company, job.location, age.label);
        if let Some(salary) = job.display_salary() {
            println!("    {}", salary);
        }
        println!("    {}", job.link);
    }

    Ok(())
}
