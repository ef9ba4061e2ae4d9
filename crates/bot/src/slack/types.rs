//! Slack Block Kit types for building command replies.
//!
//! A small subset of the Block Kit specification - enough for headers,
//! markdown sections, and context footers.
//!
//! See: <https://api.slack.com/block-kit>

use serde::{Deserialize, Serialize};

/// A Slack message with blocks.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    /// Channel ID to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Block Kit block types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Header block with large text.
    Header { text: PlainText },
    /// Section block with markdown or plain text.
    Section { text: Text },
    /// Context block with small muted text.
    Context { elements: Vec<ContextElement> },
    /// Divider block (horizontal line).
    Divider,
}

/// Text object types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Plain text (no formatting).
    PlainText { text: String, emoji: bool },
    /// Markdown text (supports formatting).
    Mrkdwn { text: String },
}

impl Text {
    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// Plain text object (for headers).
#[derive(Debug, Clone, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    /// Create a new plain text object.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: true,
        }
    }
}

/// Context block elements.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextElement {
    /// Markdown text in context.
    Mrkdwn { text: String },
}

// =============================================================================
// Webhook Payload & Response Types
// =============================================================================

/// A parsed slash-command payload.
///
/// Slack delivers slash commands as a form-encoded body; only the fields
/// the dispatcher needs are retained.
#[derive(Debug, Clone, Default)]
pub struct SlashCommand {
    /// Free-form text after the command name.
    pub text: String,
    /// Display name of the invoking user.
    pub user_name: String,
    /// Channel the command was invoked from.
    pub channel_id: String,
}

impl SlashCommand {
    /// Parse a form-encoded slash-command body.
    #[must_use]
    pub fn from_form_body(body: &str) -> Self {
        let mut command = Self::default();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            match key.as_ref() {
                "text" => command.text = value.into_owned(),
                "user_name" => command.user_name = value.into_owned(),
                "channel_id" => command.channel_id = value.into_owned(),
                _ => {}
            }
        }
        command
    }
}

/// Immediate JSON response to a slash command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    /// `in_channel` (visible to everyone) or `ephemeral`.
    pub response_type: &'static str,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Plain text fallback.
    pub text: String,
}

impl CommandResponse {
    /// Build an in-channel response.
    #[must_use]
    pub fn in_channel(blocks: Vec<Block>, text: impl Into<String>) -> Self {
        Self {
            response_type: "in_channel",
            blocks,
            text: text.into(),
        }
    }

    /// Build an ephemeral response (visible to the invoker only).
    #[must_use]
    pub fn ephemeral(blocks: Vec<Block>, text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            blocks,
            text: text.into(),
        }
    }
}

/// Response from posting a message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Channel ID where message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}
