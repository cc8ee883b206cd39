//! Component callbacks for the selection form.
//!
//! Each component carries a fixed custom id; the interaction dispatcher
//! routes on it. The selects silently acknowledge after recording their
//! values (the form stays up), while Confirm and Cancel resolve the form
//! with an ephemeral reply.

use serenity::all::{
    ComponentInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::error::AppError;

pub mod cancel;
pub mod confirm;
pub mod select;

pub const USER_SELECT_ID: &str = "moveusers:users";
pub const CHANNEL_SELECT_ID: &str = "moveusers:channel";
pub const CONFIRM_BUTTON_ID: &str = "moveusers:confirm";
pub const CANCEL_BUTTON_ID: &str = "moveusers:cancel";

/// Reply shown when a component event arrives for a form the bot no longer
/// knows, e.g. after a restart.
pub const EXPIRED_MESSAGE: &str = "This selection has expired. Run /moveusers again.";

/// Sends an ephemeral text reply to a component interaction.
pub async fn respond(
    ctx: &Context,
    interaction: &ComponentInteraction,
    content: &str,
) -> Result<(), AppError> {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Silently acknowledges a component interaction, leaving the form as is.
pub async fn acknowledge(ctx: &Context, interaction: &ComponentInteraction) -> Result<(), AppError> {
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await?;

    Ok(())
}
