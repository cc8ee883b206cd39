use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::config::Config;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Config,
}

impl Handler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called for every slash command and component interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.config, ctx, interaction).await;
    }
}
