//! Interaction dispatch.
//!
//! Routes slash command interactions by command name and component
//! interactions by custom id to their handlers. Handler failures are logged
//! here; the gateway dispatch loop has nowhere to surface an error to.

use serenity::all::{Context, Interaction};

use crate::bot::command::move_users;
use crate::bot::component;
use crate::config::Config;

/// Handles the interaction_create event.
///
/// # Arguments
/// - `config` - Application configuration
/// - `ctx` - Discord context
/// - `interaction` - The incoming interaction
pub async fn handle_interaction_create(config: &Config, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => match command.data.name.as_str() {
            move_users::COMMAND_NAME => {
                if let Err(e) = move_users::run(config, &ctx, &command).await {
                    tracing::error!("Failed to handle /{}: {:?}", move_users::COMMAND_NAME, e);
                }
            }
            name => {
                tracing::warn!("Received unknown command interaction: {}", name);
            }
        },
        Interaction::Component(interaction) => {
            let custom_id = interaction.data.custom_id.clone();

            let result = match custom_id.as_str() {
                component::USER_SELECT_ID => {
                    component::select::handle_user_select(&ctx, &interaction).await
                }
                component::CHANNEL_SELECT_ID => {
                    component::select::handle_channel_select(&ctx, &interaction).await
                }
                component::CONFIRM_BUTTON_ID => {
                    component::confirm::handle_confirm(&ctx, &interaction).await
                }
                component::CANCEL_BUTTON_ID => {
                    component::cancel::handle_cancel(&ctx, &interaction).await
                }
                id => {
                    tracing::debug!("Ignoring unknown component interaction: {}", id);
                    Ok(())
                }
            };

            if let Err(e) = result {
                tracing::error!("Failed to handle component {}: {:?}", custom_id, e);
            }
        }
        _ => {}
    }
}
