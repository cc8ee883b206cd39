//! Per-form selection state.
//!
//! Discord delivers each select-menu choice as its own component interaction,
//! so the form's state has to be accumulated somewhere until Confirm is
//! pressed. It lives in the client's `TypeMap`, keyed by the form message id,
//! and is dropped when the form is confirmed or cancelled. The state is
//! process-local; a form rendered before a restart is treated as expired.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{ChannelId, MessageId, UserId};
use serenity::prelude::{Context, TypeMapKey};
use tokio::sync::RwLock;

use crate::error::{internal::InternalError, AppError};
use crate::util::parse::parse_u64_from_string;

/// Select value of the "Everybody" option in the user select.
pub const EVERYBODY_VALUE: &str = "all";

/// Accumulated selections for one rendered form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingMove {
    /// The "Everybody" option was part of the last user selection.
    pub everybody: bool,
    /// Explicitly selected user ids (ignored when `everybody` is set).
    pub user_ids: Vec<UserId>,
    /// Selected target voice channel, once the channel select was used.
    pub target: Option<ChannelId>,
}

/// Parsed values of a user select interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserChoice {
    pub everybody: bool,
    pub user_ids: Vec<UserId>,
}

impl PendingMove {
    pub fn apply_users(&mut self, choice: UserChoice) {
        self.everybody = choice.everybody;
        self.user_ids = choice.user_ids;
    }

    pub fn apply_target(&mut self, target: ChannelId) {
        self.target = Some(target);
    }

    /// A form is complete once users and a target channel were chosen.
    pub fn has_users(&self) -> bool {
        self.everybody || !self.user_ids.is_empty()
    }
}

/// TypeMap key for the shared selection store.
///
/// Inserted at client build time; see `bot::start::init_bot`.
pub struct MoveSelections;

impl TypeMapKey for MoveSelections {
    type Value = Arc<RwLock<HashMap<MessageId, PendingMove>>>;
}

async fn store(ctx: &Context) -> Result<Arc<RwLock<HashMap<MessageId, PendingMove>>>, AppError> {
    let data = ctx.data.read().await;

    data.get::<MoveSelections>()
        .cloned()
        .ok_or_else(|| InternalError::MissingSelectionStore.into())
}

/// Registers a freshly rendered form.
pub async fn insert(ctx: &Context, message_id: MessageId, pending: PendingMove) -> Result<(), AppError> {
    let store = store(ctx).await?;
    store.write().await.insert(message_id, pending);

    Ok(())
}

/// Returns a snapshot of a form's pending selections, if the form is known.
pub async fn get(ctx: &Context, message_id: MessageId) -> Result<Option<PendingMove>, AppError> {
    let store = store(ctx).await?;
    let pending = store.read().await.get(&message_id).cloned();

    Ok(pending)
}

/// Applies `f` to a form's pending selections.
///
/// Returns `false` when the form is unknown, e.g. it was rendered before the
/// bot restarted.
pub async fn update<F>(ctx: &Context, message_id: MessageId, f: F) -> Result<bool, AppError>
where
    F: FnOnce(&mut PendingMove),
{
    let store = store(ctx).await?;
    let mut selections = store.write().await;

    match selections.get_mut(&message_id) {
        Some(pending) => {
            f(pending);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Drops a form's state once the form is resolved.
pub async fn remove(ctx: &Context, message_id: MessageId) -> Result<(), AppError> {
    let store = store(ctx).await?;
    store.write().await.remove(&message_id);

    Ok(())
}

/// Parses the values of a user select interaction.
///
/// The "Everybody" option anywhere in the selection short-circuits to
/// everybody; every other value must be a user id.
pub fn parse_user_values(values: &[String]) -> Result<UserChoice, AppError> {
    if values.iter().any(|value| value == EVERYBODY_VALUE) {
        return Ok(UserChoice {
            everybody: true,
            user_ids: Vec::new(),
        });
    }

    let user_ids = values
        .iter()
        .map(|value| parse_u64_from_string(value.clone()).map(UserId::new))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UserChoice {
        everybody: false,
        user_ids,
    })
}

/// Parses the single value of a channel select interaction.
pub fn parse_channel_value(values: &[String]) -> Result<Option<ChannelId>, AppError> {
    let Some(value) = values.first() else {
        return Ok(None);
    };

    let id = parse_u64_from_string(value.clone())?;

    Ok(Some(ChannelId::new(id)))
}
