use serenity::all::{ChannelId, UserId};

use crate::bot::command::move_users::{channel_select, user_select, SELECT_OPTION_LIMIT};
use crate::bot::component::{CHANNEL_SELECT_ID, USER_SELECT_ID};
use crate::bot::roster::{VoiceChannelEntry, VoiceUser};

fn users(count: usize) -> Vec<VoiceUser> {
    (0..count)
        .map(|i| VoiceUser {
            id: UserId::new(3001 + i as u64),
            display_name: format!("user{i}"),
        })
        .collect()
}

/// Tests the user select leads with the "Everybody" option.
///
/// The select serializes to the component payload Discord receives; the
/// option layout and selection bounds are asserted over that JSON.
///
/// Expected: "Everybody"/"all" first, one option per user, max_values = count
#[test]
fn user_select_leads_with_everybody() {
    let menu = user_select(&users(2));
    let value = serde_json::to_value(&menu).unwrap();

    assert_eq!(value["custom_id"], USER_SELECT_ID);

    let options = value["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0]["label"], "Everybody");
    assert_eq!(options[0]["value"], "all");
    assert_eq!(options[1]["label"], "user0");
    assert_eq!(options[1]["value"], "3001");

    assert_eq!(value["min_values"], 1);
    assert_eq!(value["max_values"], 3);
}

/// Tests the user select respects Discord's 25-option cap.
///
/// Thirty connected users would make Discord reject the form; the list is
/// truncated with "Everybody" kept in front.
///
/// Expected: exactly 25 options, max_values = 25
#[test]
fn user_select_truncates_to_option_limit() {
    let menu = user_select(&users(30));
    let value = serde_json::to_value(&menu).unwrap();

    let options = value["options"].as_array().unwrap();
    assert_eq!(options.len(), SELECT_OPTION_LIMIT);
    assert_eq!(options[0]["value"], "all");
    assert_eq!(value["max_values"], SELECT_OPTION_LIMIT);
}

/// Tests the channel select is a single-choice list of the given channels.
///
/// Expected: one option per channel, min and max of one
#[test]
fn channel_select_is_single_choice() {
    let channels = vec![
        VoiceChannelEntry {
            id: ChannelId::new(2001),
            name: "General".to_string(),
        },
        VoiceChannelEntry {
            id: ChannelId::new(2002),
            name: "AFK".to_string(),
        },
    ];

    let menu = channel_select(&channels);
    let value = serde_json::to_value(&menu).unwrap();

    assert_eq!(value["custom_id"], CHANNEL_SELECT_ID);

    let options = value["options"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["label"], "General");
    assert_eq!(options[0]["value"], "2001");

    assert_eq!(value["min_values"], 1);
    assert_eq!(value["max_values"], 1);
}
