//! Test factory for creating Serenity VoiceState objects.
//!
//! These factories create valid VoiceState objects by deserializing JSON,
//! simulating the gateway voice state of a connected (or disconnected)
//! member.

use serenity::all::VoiceState;

/// Creates a test voice state.
///
/// # Arguments
/// - `guild_id` - Owning guild ID
/// - `user_id` - The member the state belongs to
/// - `channel_id` - The connected voice channel, or `None` for a state with
///   no active connection
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    guild_id: u64,
    user_id: u64,
    channel_id: Option<u64>,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": null,
        "session_id": format!("session-{user_id}"),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
