//! Move planning and execution.
//!
//! Planning is a pure pass over the cached guild snapshot; execution issues
//! one member edit per mover. Members with no active voice connection are
//! never sent a move request.

use serenity::all::{ChannelId, EditMember, Guild, GuildId, UserId};
use serenity::prelude::Context;

use crate::bot::selection::PendingMove;

/// The resolved outcome of a confirmed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlan {
    pub target: ChannelId,
    /// Selected members with an active voice connection, in id order.
    pub movers: Vec<UserId>,
    /// Selected members that had no voice connection at confirm time.
    pub skipped: Vec<UserId>,
}

/// Builds the move plan for a confirmed form.
///
/// With the "Everybody" selection, every member currently connected to any
/// voice channel of the guild becomes a mover. Otherwise each explicitly
/// selected member becomes a mover when the guild has an active voice state
/// for them, and is skipped when it does not (they disconnected after the
/// form was rendered, or were never connected).
pub fn build_move_plan(guild: &Guild, pending: &PendingMove, target: ChannelId) -> MovePlan {
    let mut movers = Vec::new();
    let mut skipped = Vec::new();

    if pending.everybody {
        movers = guild
            .voice_states
            .values()
            .filter(|state| state.channel_id.is_some())
            .map(|state| state.user_id)
            .collect();
    } else {
        for user_id in &pending.user_ids {
            let in_voice = guild
                .voice_states
                .get(user_id)
                .is_some_and(|state| state.channel_id.is_some());

            if in_voice {
                movers.push(*user_id);
            } else {
                skipped.push(*user_id);
            }
        }
    }

    movers.sort();
    movers.dedup();
    skipped.sort();

    MovePlan {
        target,
        movers,
        skipped,
    }
}

/// Executes a move plan against the Discord API.
///
/// A per-member failure (the member dropped from voice between confirm and
/// execution) is logged as a warning and does not abort the remaining moves.
///
/// # Returns
/// The number of members actually moved.
pub async fn execute(ctx: &Context, guild_id: GuildId, plan: &MovePlan) -> usize {
    let mut moved = 0;

    for user_id in &plan.movers {
        let edit = EditMember::new().voice_channel(plan.target);

        match guild_id.edit_member(&ctx.http, *user_id, edit).await {
            Ok(_) => moved += 1,
            Err(e) => {
                tracing::warn!(
                    "Failed to move member {} to channel {}: {:?}",
                    user_id,
                    plan.target,
                    e
                );
            }
        }
    }

    for user_id in &plan.skipped {
        tracing::debug!("Skipping member {} with no active voice connection", user_id);
    }

    moved
}
