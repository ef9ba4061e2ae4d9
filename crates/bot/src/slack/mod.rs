//! Slack integration for the whitelist bot.
//!
//! This module provides:
//! - [`SlackClient`] for posting messages and verifying webhook signatures
//! - Block Kit types for building rich command replies
//! - Message builders for every command outcome
//!
//! # Flow
//!
//! 1. A slash command webhook arrives and its signature is verified
//! 2. The command is dispatched and its outcome rendered as blocks
//! 3. Blocks go back in the webhook response; add/remove outcomes are also
//!    posted to the audit channel

mod client;
mod error;
mod messages;
mod types;

pub use client::SlackClient;
pub use error::SlackError;
pub use messages::{
    build_added_message, build_error_message, build_help_message, build_list_message,
    build_removed_message, build_usage_message, build_view_message,
};
pub use types::{
    Block, CommandResponse, ContextElement, PlainText, PostMessageResponse, SlackMessage,
    SlashCommand, Text,
};
