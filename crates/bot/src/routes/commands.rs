//! Slack slash-command webhook handler.
//!
//! Receives `/raw …` invocations, verifies the request signature, and
//! answers with the command outcome as Block Kit.

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::slack::{CommandResponse, SlashCommand};
use crate::state::AppState;

/// Handle a slash-command webhook.
///
/// The reply goes back in the HTTP response so Slack renders it in the
/// invoking channel; mutations additionally post an audit line to the
/// configured channel, best effort.
#[instrument(skip(state, headers, body))]
pub async fn handle_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    // Extract headers for signature verification
    let timestamp = headers
        .get("X-Slack-Request-Timestamp")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing timestamp header".into()))?;

    let signature = headers
        .get("X-Slack-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing signature header".into()))?;

    state
        .slack()
        .verify_signature(timestamp, &body, signature)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    debug!("Slack signature verified");

    let payload = SlashCommand::from_form_body(&body);
    let invoked_by = if payload.user_name.is_empty() {
        "desconhecido"
    } else {
        payload.user_name.as_str()
    };

    info!(text = %payload.text, user = %invoked_by, "Dispatching whitelist command");

    let reply = state.commands().dispatch(&payload.text, invoked_by).await;

    // Audit posting must never fail the command itself
    if let Some(audit) = &reply.audit {
        let channel = state.slack().audit_channel();
        if let Err(e) = state.slack().post_text(channel, audit).await {
            warn!(error = %e, "Audit message failed to post");
        }
    }

    Ok(Json(CommandResponse::in_channel(
        reply.blocks,
        reply.fallback,
    )))
}
