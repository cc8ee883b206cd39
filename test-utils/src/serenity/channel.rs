//! Test factories for creating Serenity GuildChannel objects.
//!
//! These factories create valid GuildChannel objects by deserializing JSON,
//! simulating what Discord's API would return for voice and text channels.

use serenity::all::GuildChannel;

/// Creates a test voice channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Owning guild ID
/// - `name` - Channel name
/// - `position` - Sorting position within the guild's channel list
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, position, 2)
}

/// Creates a test text channel.
///
/// Useful for asserting that non-voice channels are excluded from rosters
/// and target lists.
pub fn create_test_text_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_test_channel(channel_id, guild_id, name, 0, 0)
}

fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
    kind: u8,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "last_message_id": null,
        "last_pin_timestamp": null,
        "bitrate": 64000,
        "user_limit": 0,
        "rate_limit_per_user": 0,
        "rtc_region": null,
        "video_quality_mode": null,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
