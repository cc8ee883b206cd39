//! The `/moveusers` slash command.
//!
//! Renders the ephemeral selection form: a user multi-select fed from the
//! configured voice channels, a single-select of target voice channels,
//! and Confirm/Cancel buttons. The form carries no state of its own; the
//! component callbacks accumulate selections in the selection store keyed by
//! the form's message id.

use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton, CreateCommand,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};

use crate::bot::component::{CANCEL_BUTTON_ID, CHANNEL_SELECT_ID, CONFIRM_BUTTON_ID, USER_SELECT_ID};
use crate::bot::roster::{self, VoiceChannelEntry, VoiceUser};
use crate::bot::selection::{self, PendingMove, EVERYBODY_VALUE};
use crate::config::Config;
use crate::error::AppError;

pub const COMMAND_NAME: &str = "moveusers";

/// Discord rejects select menus with more than 25 options.
pub const SELECT_OPTION_LIMIT: usize = 25;

/// Builds the command registration payload.
pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME).description("Move users between voice channels")
}

/// Handles a `/moveusers` invocation by rendering the selection form.
///
/// Reads the guild snapshot from the cache, builds the form components, and
/// registers the rendered form in the selection store. The reply is
/// ephemeral; only the invoking operator sees the form.
///
/// # Arguments
/// - `config` - Application configuration carrying the channel list
/// - `ctx` - Discord context
/// - `interaction` - The command interaction to respond to
pub async fn run(
    config: &Config,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return reply(ctx, interaction, "This command only works in a server.").await;
    };

    // Clone the needed slices out of the cache before awaiting anything;
    // the cache reference cannot be held across an await point.
    let snapshot = {
        guild_id.to_guild_cached(&ctx.cache).map(|guild| {
            (
                roster::collect_voice_users(&guild, &config.voice_channel_ids),
                roster::voice_channels(&guild),
            )
        })
    };

    let Some((users, channels)) = snapshot else {
        tracing::warn!("Guild {} is not in the cache", guild_id);
        return reply(ctx, interaction, "The server is not available right now.").await;
    };

    if channels.is_empty() {
        return reply(ctx, interaction, "This server has no voice channels.").await;
    }

    let components = vec![
        CreateActionRow::SelectMenu(user_select(&users)),
        CreateActionRow::SelectMenu(channel_select(&channels)),
        CreateActionRow::Buttons(vec![
            CreateButton::new(CONFIRM_BUTTON_ID)
                .label("Confirm")
                .style(ButtonStyle::Success),
            CreateButton::new(CANCEL_BUTTON_ID)
                .label("Cancel")
                .style(ButtonStyle::Danger),
        ]),
    ];

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("Select users and target channel:")
                    .components(components)
                    .ephemeral(true),
            ),
        )
        .await?;

    // The form message id keys the pending selections for the callbacks.
    let message = interaction.get_response(&ctx.http).await?;
    selection::insert(ctx, message.id, PendingMove::default()).await?;

    Ok(())
}

/// Builds the user multi-select.
///
/// The "Everybody" option comes first, followed by one option per roster
/// entry. The option list is truncated to Discord's 25-option cap; everything
/// up to the cap remains selectable at once.
pub fn user_select(users: &[VoiceUser]) -> CreateSelectMenu {
    let mut options = vec![
        CreateSelectMenuOption::new("Everybody", EVERYBODY_VALUE).description("Select all users"),
    ];

    options.extend(
        users
            .iter()
            .map(|user| CreateSelectMenuOption::new(user.display_name.clone(), user.id.to_string())),
    );

    if options.len() > SELECT_OPTION_LIMIT {
        tracing::warn!(
            "Truncating user select from {} to {} options",
            options.len(),
            SELECT_OPTION_LIMIT
        );
        options.truncate(SELECT_OPTION_LIMIT);
    }

    let max_values = options.len() as u8;

    CreateSelectMenu::new(USER_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder("Select users to move")
        .min_values(1)
        .max_values(max_values)
}

/// Builds the single-choice target channel select.
pub fn channel_select(channels: &[VoiceChannelEntry]) -> CreateSelectMenu {
    let mut options: Vec<CreateSelectMenuOption> = channels
        .iter()
        .map(|channel| CreateSelectMenuOption::new(channel.name.clone(), channel.id.to_string()))
        .collect();

    if options.len() > SELECT_OPTION_LIMIT {
        tracing::warn!(
            "Truncating channel select from {} to {} options",
            options.len(),
            SELECT_OPTION_LIMIT
        );
        options.truncate(SELECT_OPTION_LIMIT);
    }

    CreateSelectMenu::new(CHANNEL_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder("Select target voice channel")
        .min_values(1)
        .max_values(1)
}

async fn reply(ctx: &Context, interaction: &CommandInteraction, content: &str) -> Result<(), AppError> {
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
