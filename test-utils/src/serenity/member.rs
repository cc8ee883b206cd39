//! Test factory for creating Serenity Member objects.
//!
//! These factories create valid Member objects by deserializing JSON,
//! simulating what Discord's API would return for a guild member.

use serenity::all::Member;

/// Creates a test guild member.
///
/// The member's username and global name are both set from `name`, so
/// `Member::display_name()` resolves to `name` unless a nickname is given.
///
/// # Arguments
/// - `guild_id` - Owning guild ID
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username / global display name
/// - `nick` - Optional guild nickname, takes precedence in `display_name()`
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(guild_id: u64, user_id: u64, name: &str, nick: Option<&str>) -> Member {
    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": name,
            "discriminator": "0",
            "global_name": name,
            "avatar": null,
            "bot": false,
            "public_flags": 0,
            "banner": null,
            "accent_color": null,
        },
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": null,
        "guild_id": guild_id.to_string(),
        "unusual_dm_activity_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
