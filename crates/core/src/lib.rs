//! CodeRaw Core - Shared types library.
//!
//! This crate provides the pieces shared by the CodeRaw whitelist components:
//! - `bot` - Slack webhook service that edits raws on command
//! - `cli` - Command-line tools for operating on raws directly
//!
//! # Architecture
//!
//! The core crate contains only types and pure transforms - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe raw and player identifiers
//! - [`whitelist`] - The line-oriented whitelist patcher over raw `code` text

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod whitelist;

pub use types::*;
pub use whitelist::{Expiry, Patcher, PatcherConfig};
