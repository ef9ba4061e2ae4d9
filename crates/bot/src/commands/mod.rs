//! Whitelist command parsing and dispatch.
//!
//! The inbound surface delivers a flat list of string tokens; [`parse`]
//! turns them into a [`Command`] and [`CommandHandler`] runs it against
//! the store. Every command is one independent fetch-patch-replace round
//! trip - there is no shared state between invocations and no cache.

mod handler;
mod parse;

pub use handler::{CommandHandler, CommandReply};
pub use parse::{Command, ParseError};
