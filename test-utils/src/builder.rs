//! Fluent builder for guild snapshots.
//!
//! Assembles a Serenity `Guild` with voice channels, members, and voice
//! states the way the gateway cache would hold them, so roster and move-plan
//! code can be exercised against a realistic snapshot.

use serenity::all::Guild;

use crate::serenity::{
    create_test_guild, create_test_member, create_test_text_channel, create_test_voice_channel,
    create_test_voice_state,
};

/// Builder for creating test guild snapshots.
///
/// Channels are positioned in insertion order. Members added via
/// `member_in_voice` get a voice state pointing at the given channel;
/// members added via `member` have no voice state at all.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::GuildBuilder;
///
/// let guild = GuildBuilder::new(1000, "Test Guild")
///     .voice_channel(2001, "General")
///     .member_in_voice(3001, "alice", 2001)
///     .member(3002, "bob")
///     .build();
/// ```
pub struct GuildBuilder {
    guild_id: u64,
    guild: Guild,
    next_position: u16,
}

impl GuildBuilder {
    /// Creates a builder around an empty guild snapshot.
    pub fn new(guild_id: u64, name: &str) -> Self {
        Self {
            guild_id,
            guild: create_test_guild(guild_id, name),
            next_position: 0,
        }
    }

    /// Adds a voice channel at the next position.
    pub fn voice_channel(mut self, channel_id: u64, name: &str) -> Self {
        let channel =
            create_test_voice_channel(channel_id, self.guild_id, name, self.next_position);
        self.next_position += 1;
        self.guild.channels.insert(channel.id, channel);
        self
    }

    /// Adds a text channel.
    pub fn text_channel(mut self, channel_id: u64, name: &str) -> Self {
        let channel = create_test_text_channel(channel_id, self.guild_id, name);
        self.guild.channels.insert(channel.id, channel);
        self
    }

    /// Adds a cached member with no voice connection.
    pub fn member(mut self, user_id: u64, name: &str) -> Self {
        let member = create_test_member(self.guild_id, user_id, name, None);
        self.guild.members.insert(member.user.id, member);
        self
    }

    /// Adds a cached member connected to the given voice channel.
    pub fn member_in_voice(mut self, user_id: u64, name: &str, channel_id: u64) -> Self {
        let member = create_test_member(self.guild_id, user_id, name, None);
        let state = create_test_voice_state(self.guild_id, user_id, Some(channel_id));
        self.guild.members.insert(member.user.id, member);
        self.guild.voice_states.insert(state.user_id, state);
        self
    }

    /// Adds a voice state without a cached member, as the gateway delivers
    /// for members that joined voice before the member chunk arrived.
    pub fn uncached_member_in_voice(mut self, user_id: u64, channel_id: u64) -> Self {
        let state = create_test_voice_state(self.guild_id, user_id, Some(channel_id));
        self.guild.voice_states.insert(state.user_id, state);
        self
    }

    pub fn build(self) -> Guild {
        self.guild
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::ChannelId;

    #[test]
    fn wires_channels_members_and_voice_states() {
        let guild = GuildBuilder::new(1000, "Test Guild")
            .voice_channel(2001, "General")
            .text_channel(2002, "chat")
            .member_in_voice(3001, "alice", 2001)
            .member(3002, "bob")
            .build();

        assert_eq!(guild.channels.len(), 2);
        assert_eq!(guild.members.len(), 2);
        assert_eq!(guild.voice_states.len(), 1);

        let state = guild.voice_states.values().next().unwrap();
        assert_eq!(state.channel_id.map(|id| id.get()), Some(2001));
    }

    #[test]
    fn positions_voice_channels_in_insertion_order() {
        let guild = GuildBuilder::new(1000, "Test Guild")
            .voice_channel(2001, "First")
            .voice_channel(2002, "Second")
            .build();

        let first = &guild.channels[&ChannelId::new(2001)];
        let second = &guild.channels[&ChannelId::new(2002)];
        assert!(first.position < second.position);
    }
}
