//! Read model over the cached guild state.
//!
//! The selection form is rendered from a single guild snapshot: which users
//! sit in the configured voice channels, and which voice channels exist as
//! move targets. Nothing here is stored; every command invocation reads the
//! cache fresh and discards the result with the interaction.

use std::collections::HashSet;

use serenity::all::{ChannelId, ChannelType, Guild, UserId};

/// A member currently connected to one of the configured voice channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceUser {
    pub id: UserId,
    /// Label shown in the user select (nickname, global name, or username).
    pub display_name: String,
}

/// A voice channel offered as a move target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoiceChannelEntry {
    pub id: ChannelId,
    pub name: String,
}

/// Collects the members connected to the configured voice channels.
///
/// Channels are visited in configuration order. A configured id that does not
/// resolve to a voice channel in the guild cache is logged as a warning and
/// skipped. Members whose `Member` object is not cached are skipped with a
/// debug log since there is no display name to render. The result is
/// duplicate-free and ordered by channel, then display name.
///
/// # Arguments
/// - `guild` - Cached guild snapshot
/// - `channel_ids` - The configured voice channel ids
pub fn collect_voice_users(guild: &Guild, channel_ids: &[ChannelId]) -> Vec<VoiceUser> {
    let mut users = Vec::new();
    let mut seen: HashSet<UserId> = HashSet::new();

    for channel_id in channel_ids {
        let Some(channel) = guild.channels.get(channel_id) else {
            tracing::warn!(
                "Channel ID {} is not accessible or does not exist",
                channel_id
            );
            continue;
        };

        if channel.kind != ChannelType::Voice {
            tracing::warn!(
                "Channel {} ({}) is not a voice channel",
                channel.name,
                channel_id
            );
            continue;
        }

        let mut channel_users: Vec<VoiceUser> = guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(*channel_id))
            .filter_map(|state| {
                let Some(member) = guild.members.get(&state.user_id) else {
                    tracing::debug!(
                        "Skipping uncached member {} in channel {}",
                        state.user_id,
                        channel_id
                    );
                    return None;
                };

                Some(VoiceUser {
                    id: state.user_id,
                    display_name: member.display_name().to_string(),
                })
            })
            .filter(|user| seen.insert(user.id))
            .collect();

        channel_users.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        users.extend(channel_users);
    }

    users
}

/// Lists every voice channel of the guild as a move target.
///
/// Every guild voice channel is a valid destination, not only the configured
/// ones. Sorted by position, then id, matching the order the Discord client
/// shows.
pub fn voice_channels(guild: &Guild) -> Vec<VoiceChannelEntry> {
    let mut channels: Vec<(u16, VoiceChannelEntry)> = guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Voice)
        .map(|channel| {
            (
                channel.position,
                VoiceChannelEntry {
                    id: channel.id,
                    name: channel.name.clone(),
                },
            )
        })
        .collect();

    channels.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(&b.1.id)));
    channels.into_iter().map(|(_, entry)| entry).collect()
}
