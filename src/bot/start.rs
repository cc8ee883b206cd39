use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tokio::sync::RwLock;

use crate::bot::handler::Handler;
use crate::bot::selection::MoveSelections;
use crate::config::Config;
use crate::error::AppError;

/// Builds the Discord client.
///
/// Configures gateway intents, installs the event handler, and seeds the
/// shared selection store into the client's data map. The returned client has
/// not connected yet; pass it to [`start_bot`].
///
/// # Arguments
/// - `config` - Application configuration (token, guild, channel list)
///
/// # Returns
/// - `Ok(Client)` - Configured client ready to start
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(config.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .type_map_insert::<MoveSelections>(Arc::new(RwLock::new(HashMap::new())))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Connects to the gateway and runs until the connection is torn down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(client: &mut Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
