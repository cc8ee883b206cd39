//! Cancel button callback.

use serenity::all::{ComponentInteraction, Context};

use crate::bot::component::respond;
use crate::bot::selection;
use crate::error::AppError;

/// Handles the cancel button by dropping the pending form state.
pub async fn handle_cancel(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    selection::remove(ctx, interaction.message.id).await?;

    respond(ctx, interaction, "Operation cancelled.").await
}
