//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot
//! successfully connects to Discord's gateway and completes the initial
//! handshake. The ready handler logs connection information, sets the
//! activity, and registers the `/moveusers` command on the configured guild.
//! Guild-scoped registration makes the command available immediately instead
//! of waiting for Discord's global command propagation.

use serenity::all::{ActivityData, Context, Ready};

use crate::bot::command::move_users;
use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration replaces the guild's command set with the single
/// `/moveusers` command. A registration failure is logged but does not take
/// the bot down; the gateway connection stays up.
///
/// # Arguments
/// - `config` - Application configuration carrying the target guild id
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Shuffling voice channels")));

    match config
        .guild_id
        .set_commands(&ctx.http, vec![move_users::register()])
        .await
    {
        Ok(commands) => {
            tracing::info!(
                "Registered {} command(s) on guild {}",
                commands.len(),
                config.guild_id
            );
        }
        Err(e) => {
            tracing::error!(
                "Failed to register commands on guild {}: {:?}",
                config.guild_id,
                e
            );
        }
    }
}
