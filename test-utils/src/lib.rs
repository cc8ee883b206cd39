//! Voice Mover Test Utils
//!
//! Provides shared testing utilities for the voice mover bot. This crate
//! offers factory functions for mock Serenity structs and a builder for
//! assembling complete guild snapshots with voice channels, members, and
//! voice states, simulating what the gateway cache would hold.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **serenity factories**: JSON-deserialized Serenity objects (Guild,
//!   GuildChannel, Member, VoiceState)
//! - **GuildBuilder**: Fluent builder wiring the factories into one guild
//!   snapshot
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::GuildBuilder;
//!
//! let guild = GuildBuilder::new(1000, "Test Guild")
//!     .voice_channel(2001, "General")
//!     .voice_channel(2002, "AFK")
//!     .member_in_voice(3001, "alice", 2001)
//!     .member(3002, "bob")
//!     .build();
//! ```

pub mod builder;
pub mod serenity;
