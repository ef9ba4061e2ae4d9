//! HTTP routes for the webhook service.

use axum::{Router, routing::post};

use crate::state::AppState;

pub mod commands;

/// Create the webhook routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/slack/commands", post(commands::handle_command))
}
