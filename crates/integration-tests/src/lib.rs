//! Integration tests for the CodeRaw whitelist bot.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coderaw-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `whitelist_flows` - Full patcher flows over raw code text
//! - `slack_messages` - Block Kit reply construction
//! - `command_parsing` - Slash-command token handling
//!
//! Everything here runs without a network: the store and Slack clients are
//! exercised only up to their request-building seams, and the patcher is
//! pure by construction.
