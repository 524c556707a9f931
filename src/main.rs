use anyhow::Context;

use izin_bot::bot::Dispatcher;
use izin_bot::config::BotConfig;
use izin_bot::logging;
use izin_bot::telegram::TelegramClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; deployments usually set the environment directly
    dotenvy::dotenv().ok();

    // Initialize logging system
    logging::init_logging()?;

    tracing::info!("=== Izin Bot Starting ===");

    // The bot token is the one hard startup requirement
    let config = BotConfig::from_env()
        .map_err(|e| {
            tracing::error!("Startup configuration error: {}", e);
            e
        })
        .context("BOT_TOKEN belum diset. Set it in the environment or a .env file")?;

    tracing::info!(
        "Configured: poll timeout {}s, heartbeat every {:?} (first after {:?})",
        config.poll_timeout_secs,
        config.heartbeat_interval,
        config.heartbeat_initial_delay
    );

    let client = TelegramClient::new(&config.token);

    // Run the update loop until the process is stopped
    let dispatcher = Dispatcher::new(client, config);
    dispatcher.run().await?;

    tracing::info!("=== Izin Bot Shutting Down ===");

    Ok(())
}
