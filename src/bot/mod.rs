//! Discord bot wiring for the voice mover.
//!
//! This module contains everything gateway-facing: client construction, the
//! event handler, the `/moveusers` slash command, and the component callbacks
//! driving the selection form. The heavy lifting (gateway connection, event
//! dispatch, component rendering, permission checks) is owned by Serenity;
//! the code here reads cached guild state, renders the form, and issues the
//! move requests.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel state for the cache
//! - `GUILD_MEMBERS` - Member display names (privileged intent)
//! - `GUILD_VOICE_STATES` - Who is connected to which voice channel
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application. The bot
//! user additionally needs the MOVE_MEMBERS permission in the target guild.

pub mod command;
pub mod component;
pub mod handler;
pub mod mover;
pub mod roster;
pub mod selection;
pub mod start;

#[cfg(test)]
mod test;
