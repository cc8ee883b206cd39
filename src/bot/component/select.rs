//! Select menu callbacks.
//!
//! Both selects record their parsed values into the form's pending entry and
//! then silently acknowledge; the operator keeps interacting with the same
//! message until Confirm or Cancel resolves it.

use serenity::all::{ComponentInteraction, ComponentInteractionDataKind, Context};

use crate::bot::component::{acknowledge, respond, EXPIRED_MESSAGE};
use crate::bot::selection;
use crate::error::AppError;

/// Records a user selection.
pub async fn handle_user_select(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        tracing::warn!("User select interaction carried no string values");
        return acknowledge(ctx, interaction).await;
    };

    let choice = selection::parse_user_values(values)?;
    let updated =
        selection::update(ctx, interaction.message.id, |pending| pending.apply_users(choice))
            .await?;

    if !updated {
        return respond(ctx, interaction, EXPIRED_MESSAGE).await;
    }

    acknowledge(ctx, interaction).await
}

/// Records a target channel selection.
pub async fn handle_channel_select(
    ctx: &Context,
    interaction: &ComponentInteraction,
) -> Result<(), AppError> {
    let ComponentInteractionDataKind::StringSelect { values } = &interaction.data.kind else {
        tracing::warn!("Channel select interaction carried no string values");
        return acknowledge(ctx, interaction).await;
    };

    let Some(target) = selection::parse_channel_value(values)? else {
        return acknowledge(ctx, interaction).await;
    };

    let updated =
        selection::update(ctx, interaction.message.id, |pending| pending.apply_target(target))
            .await?;

    if !updated {
        return respond(ctx, interaction, EXPIRED_MESSAGE).await;
    }

    acknowledge(ctx, interaction).await
}
