use anyhow::Result;
use std::net::SocketAddr;
use tracing::{error, info, instrument, warn};

use hibr_core::init_tracing;
use hibr_telegram::run_dispatcher;

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, start keep-alive, then poll.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        max_input_chars = config.app().max_input_chars,
        session_ttl_secs = config.app().session_ttl_secs,
        admins = config.app().admin_ids.len(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None).await?;
    match components.sessions.purge_expired(config.app().session_ttl()).await {
        Ok(n) => info!(purged = n, "Expired sessions purged"),
        Err(e) => warn!(error = %e, "Failed to purge expired sessions"),
    }
    let handler_chain = build_handler_chain(&config, &components)?;

    if let Some(port) = config.app().keepalive_port {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tokio::spawn(async move {
            if let Err(e) = keepalive::serve(addr).await {
                error!(error = %e, port = port, "Keep-alive endpoint stopped");
            }
        });
    }

    info!("Bot started successfully");
    run_dispatcher(components.teloxide_bot.clone(), handler_chain).await
}
