//! CodeRaw Bot library.
//!
//! This crate provides the whitelist bot's functionality as a library,
//! allowing it to be tested and reused by the CLI tools.
//!
//! # Flow
//!
//! 1. A slash command arrives on the webhook and its signature is verified
//! 2. The command text is tokenized and dispatched
//! 3. The raw is fetched from the document store, its `code` patched, and
//!    the new code written back (one round trip per command, no cache)
//! 4. The outcome is rendered as Block Kit and returned to the channel

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commands;
pub mod config;
pub mod error;
pub mod routes;
pub mod slack;
pub mod state;
pub mod store;
