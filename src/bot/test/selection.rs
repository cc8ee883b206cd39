use serenity::all::{ChannelId, UserId};

use crate::bot::selection::{
    parse_channel_value, parse_user_values, PendingMove, EVERYBODY_VALUE,
};
use crate::error::{internal::InternalError, AppError};

/// Tests user select values parse into user ids in order.
///
/// Expected: both ids, everybody flag unset
#[test]
fn parses_explicit_user_selection() {
    let values = vec!["3001".to_string(), "3002".to_string()];

    let choice = parse_user_values(&values).unwrap();

    assert!(!choice.everybody);
    assert_eq!(choice.user_ids, vec![UserId::new(3001), UserId::new(3002)]);
}

/// Tests the "Everybody" option short-circuits an explicit selection.
///
/// Expected: everybody flag set, no explicit ids retained
#[test]
fn everybody_value_overrides_explicit_ids() {
    let values = vec!["3001".to_string(), EVERYBODY_VALUE.to_string()];

    let choice = parse_user_values(&values).unwrap();

    assert!(choice.everybody);
    assert!(choice.user_ids.is_empty());
}

/// Tests a malformed select value surfaces as an internal error.
///
/// Form options are built from real ids, so a non-numeric value means the
/// form was built wrong.
///
/// Expected: Err(InternalError::ParseStringId)
#[test]
fn rejects_malformed_user_value() {
    let values = vec!["not-an-id".to_string()];

    let err = parse_user_values(&values).unwrap_err();

    assert!(matches!(
        err,
        AppError::InternalErr(InternalError::ParseStringId { .. })
    ));
}

/// Tests the channel select yields its single value.
///
/// Expected: Some(channel id) for one value, None for an empty selection
#[test]
fn parses_channel_selection() {
    let target = parse_channel_value(&["2001".to_string()]).unwrap();
    assert_eq!(target, Some(ChannelId::new(2001)));

    let empty = parse_channel_value(&[]).unwrap();
    assert_eq!(empty, None);
}

/// Tests pending state accumulation across select events.
///
/// A later user selection replaces the earlier one, and the target survives
/// user re-selection.
///
/// Expected: the latest choice of each select wins
#[test]
fn accumulates_selections_per_form() {
    let mut pending = PendingMove::default();
    assert!(!pending.has_users());

    pending.apply_users(parse_user_values(&["3001".to_string()]).unwrap());
    pending.apply_target(ChannelId::new(2001));
    assert!(pending.has_users());

    pending.apply_users(parse_user_values(&["3002".to_string(), "3003".to_string()]).unwrap());

    assert_eq!(pending.user_ids, vec![UserId::new(3002), UserId::new(3003)]);
    assert_eq!(pending.target, Some(ChannelId::new(2001)));
}

/// Tests the everybody flag satisfies the user requirement on its own.
///
/// Expected: has_users() is true with an empty explicit list
#[test]
fn everybody_counts_as_users() {
    let mut pending = PendingMove::default();
    pending.apply_users(parse_user_values(&[EVERYBODY_VALUE.to_string()]).unwrap());

    assert!(pending.has_users());
    assert!(pending.user_ids.is_empty());
}
