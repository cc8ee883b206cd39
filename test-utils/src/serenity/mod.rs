//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, GuildChannel, Member, VoiceState) for testing purposes. These
//! factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Overview
//!
//! When testing code that reads the gateway cache via Serenity, you often
//! need guild snapshots populated with channels, members, and voice states.
//! These factories provide a consistent way to create those objects with
//! sensible defaults while allowing customization of the key fields. For
//! assembling a whole snapshot in one expression, prefer
//! `crate::builder::GuildBuilder`.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `channel::create_test_voice_channel` / `channel::create_test_text_channel` - Create GuildChannel objects
//! - `member::create_test_member` - Create Member objects
//! - `voice_state::create_test_voice_state` - Create VoiceState objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::{create_test_text_channel, create_test_voice_channel};
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use voice_state::create_test_voice_state;
