use serenity::all::{ChannelId, UserId};
use test_utils::builder::GuildBuilder;
use test_utils::serenity::create_test_voice_state;

use crate::bot::mover::build_move_plan;
use crate::bot::selection::PendingMove;

fn pending_for(user_ids: &[u64]) -> PendingMove {
    PendingMove {
        everybody: false,
        user_ids: user_ids.iter().copied().map(UserId::new).collect(),
        target: Some(ChannelId::new(2002)),
    }
}

/// Tests an explicit selection only moves members with a voice connection.
///
/// One selected member is connected, one is cached but not in voice, one is
/// not in the guild at all.
///
/// Expected: one mover, two skipped
#[test]
fn moves_only_selected_members_in_voice() {
    let guild = GuildBuilder::new(1000, "Test Guild")
        .voice_channel(2001, "General")
        .voice_channel(2002, "AFK")
        .member_in_voice(3001, "alice", 2001)
        .member(3002, "bob")
        .build();

    let pending = pending_for(&[3001, 3002, 3003]);
    let plan = build_move_plan(&guild, &pending, ChannelId::new(2002));

    assert_eq!(plan.movers, vec![UserId::new(3001)]);
    assert_eq!(plan.skipped, vec![UserId::new(3002), UserId::new(3003)]);
    assert_eq!(plan.target, ChannelId::new(2002));
}

/// Tests a voice state with no channel does not count as connected.
///
/// A member can retain a voice state whose channel is `None` after a
/// disconnect; they must be skipped, not moved.
///
/// Expected: the member is skipped
#[test]
fn skips_member_with_disconnected_voice_state() {
    let mut guild = GuildBuilder::new(1000, "Test Guild")
        .voice_channel(2001, "General")
        .member(3001, "alice")
        .build();

    let state = create_test_voice_state(1000, 3001, None);
    guild.voice_states.insert(state.user_id, state);

    let pending = pending_for(&[3001]);
    let plan = build_move_plan(&guild, &pending, ChannelId::new(2001));

    assert!(plan.movers.is_empty());
    assert_eq!(plan.skipped, vec![UserId::new(3001)]);
}

/// Tests the "Everybody" selection covers every connected member.
///
/// Members connected to any voice channel of the guild are movers, including
/// channels outside the configured list; members not in voice are not.
///
/// Expected: both connected members move, the disconnected one does not
#[test]
fn everybody_includes_all_connected_members() {
    let guild = GuildBuilder::new(1000, "Test Guild")
        .voice_channel(2001, "General")
        .voice_channel(2003, "Private")
        .member_in_voice(3001, "alice", 2001)
        .member_in_voice(3002, "bob", 2003)
        .member(3003, "carol")
        .build();

    let pending = PendingMove {
        everybody: true,
        user_ids: Vec::new(),
        target: Some(ChannelId::new(2001)),
    };
    let plan = build_move_plan(&guild, &pending, ChannelId::new(2001));

    assert_eq!(plan.movers, vec![UserId::new(3001), UserId::new(3002)]);
    assert!(plan.skipped.is_empty());
}

/// Tests "Everybody" takes precedence over any explicit ids.
///
/// Expected: the plan ignores the explicit list entirely
#[test]
fn everybody_ignores_explicit_selection() {
    let guild = GuildBuilder::new(1000, "Test Guild")
        .voice_channel(2001, "General")
        .member_in_voice(3001, "alice", 2001)
        .build();

    let pending = PendingMove {
        everybody: true,
        user_ids: vec![UserId::new(9999)],
        target: Some(ChannelId::new(2001)),
    };
    let plan = build_move_plan(&guild, &pending, ChannelId::new(2001));

    assert_eq!(plan.movers, vec![UserId::new(3001)]);
    assert!(plan.skipped.is_empty());
}
