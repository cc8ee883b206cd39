//! Confirm button callback.
//!
//! Validates the pending form, builds the move plan from the cached guild
//! snapshot, executes it, and resolves the form. An incomplete form gets a
//! prompt naming the missing piece and stays pending, so the operator can
//! finish it without rerunning the command.

use serenity::all::{ComponentInteraction, Context};

use crate::bot::component::{respond, EXPIRED_MESSAGE};
use crate::bot::{mover, selection};
use crate::error::AppError;

/// Handles the confirm button of a selection form.
pub async fn handle_confirm(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let message_id = interaction.message.id;

    let Some(pending) = selection::get(ctx, message_id).await? else {
        return respond(ctx, interaction, EXPIRED_MESSAGE).await;
    };

    if !pending.has_users() {
        return respond(ctx, interaction, "Select at least one user to move first.").await;
    }

    let Some(target) = pending.target else {
        return respond(ctx, interaction, "Select a target voice channel first.").await;
    };

    let Some(guild_id) = interaction.guild_id else {
        tracing::warn!("Confirm interaction arrived without a guild id");
        return respond(ctx, interaction, EXPIRED_MESSAGE).await;
    };

    let plan = {
        let Some(guild) = guild_id.to_guild_cached(&ctx.cache) else {
            tracing::warn!("Guild {} is not in the cache", guild_id);
            return respond(ctx, interaction, "The server is not available right now.").await;
        };

        mover::build_move_plan(&guild, &pending, target)
    };

    let moved = mover::execute(ctx, guild_id, &plan).await;

    selection::remove(ctx, message_id).await?;

    tracing::info!(
        "Moved {} member(s) to channel {} ({} skipped)",
        moved,
        plan.target,
        plan.skipped.len()
    );

    respond(ctx, interaction, "Move operation successful!").await
}
