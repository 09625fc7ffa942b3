//! RaiderBot - Raider.io character lookups for Discord
//!
//! Registers a `/raider` slash command that asks for `Name-Realm`, scans the
//! configured regions for the character and replies with a profile embed.

mod card;
mod common;
mod config;
mod discord;
mod raiderio;

use std::sync::Arc;

use anyhow::Result;
use tokio::signal;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use card::{CardOptions, LookupTables};
use config::{env::get_config_path, load_and_validate};
use discord::{DiscordBotBuilder, LookupState};
use raiderio::RaiderIoClient;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal in containers.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("RaiderBot v{} starting...", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let config_path = get_config_path();
    info!("Loading configuration from {}...", config_path);

    let config = load_and_validate(&config_path).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Set DISCORD_TOKEN or provide {}.", config_path);
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  API: {}", config.raiderio.api_url);
    info!("  Regions: {}", config.raiderio.regions.join(", "));
    info!("  Max M+ runs: {}", config.display.max_mythic_plus_runs);
    info!("  Show affixes: {}", config.display.show_affixes);
    if config.raiderio.api_key.is_some() {
        info!("  API key configured (not sent with requests)");
    }

    let state = Arc::new(LookupState {
        source: Arc::new(RaiderIoClient::new(&config.raiderio)),
        tables: Arc::new(LookupTables::new(&config.emojis)),
        regions: config.raiderio.regions.clone(),
        options: CardOptions::from(&config.display),
    });

    let discord_bot = DiscordBotBuilder::new(config.discord.token.clone(), state)
        .build()
        .await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    info!("Starting Discord bot...");
    let mut discord_task = tokio::spawn(discord_bot.run(shutdown_rx));

    let shutdown = tokio::select! {
        biased;
        _ = shutdown_signal() => {
            info!("Shutdown signal received - disconnecting...");
            true
        }
        _ = &mut discord_task => false,
    };

    if shutdown {
        if let Err(e) = shutdown_tx.send(true) {
            debug!("Shutdown channel closed (Discord task already exited): {}", e);
        }
        let timeout = tokio::time::Duration::from_secs(5);
        match tokio::time::timeout(timeout, discord_task).await {
            Ok(Ok(())) => info!("Discord client shut down gracefully"),
            Ok(Err(e)) => warn!("Discord task panicked: {}", e),
            Err(_) => warn!("Discord shutdown timed out"),
        }
    }

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
