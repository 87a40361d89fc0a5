//! quipd - chat-triggered command interpreter daemon.

use quip_cmd::Trigger;
use quipd::config::Config;
use quipd::dispatch::Dispatcher;
use quipd::handlers::build_registry;
use quipd::services::ServiceClients;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        bot = %config.bot.name,
        user_id = config.bot.user_id,
        prefix = %config.bot.prefix,
        "Starting quipd"
    );

    let services = ServiceClients::from_config(&config.services)?;

    let registry = build_registry();
    info!(commands = registry.len(), "Command registry built");

    let trigger = Trigger::new(
        config.bot.prefix.clone(),
        format!("<@{}>", config.bot.user_id),
    );
    let dispatcher = Arc::new(Dispatcher::new(
        config.bot.user_id,
        trigger,
        registry,
        services,
    ));

    quipd::gateway::run(dispatcher).await?;

    Ok(())
}
