//! Whitelist management commands.
//!
//! Each command runs the same fetch-patch-replace round trip the bot
//! performs, against the store configured by `STORE_BASE_URL`.

use chrono::{Duration, Local};
use coderaw_bot::config::{ConfigError, StoreConfig, WhitelistConfig};
use coderaw_bot::store::{StoreClient, StoreError};
use coderaw_core::{Expiry, Patcher, PatcherConfig, PlayerId, RawId};
use thiserror::Error;

/// Errors that can occur during whitelist operations.
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store round trip failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The raw does not exist in the store.
    #[error("Raw not found: {0}")]
    RawNotFound(RawId),
}

struct Context {
    store: StoreClient,
    patcher: Patcher,
    default_days: i64,
}

impl Context {
    fn from_env() -> Result<Self, WhitelistError> {
        dotenvy::dotenv().ok();

        let store = StoreClient::new(&StoreConfig::from_env()?);
        let whitelist = WhitelistConfig::from_env()?;

        Ok(Self {
            store,
            patcher: Patcher::new(PatcherConfig {
                role_label: whitelist.role_label,
            }),
            default_days: whitelist.default_days,
        })
    }

    async fn fetch(
        &self,
        raw_id: &RawId,
    ) -> Result<coderaw_bot::store::RawDocument, WhitelistError> {
        self.store
            .fetch(raw_id)
            .await?
            .ok_or_else(|| WhitelistError::RawNotFound(raw_id.clone()))
    }
}

/// Resolve the operator name recorded in synthesized headers.
fn operator() -> String {
    std::env::var("USER").unwrap_or_else(|_| "coderaw-cli".to_owned())
}

/// Add a player to a raw's whitelist.
///
/// # Errors
///
/// Returns error if configuration is missing, the raw does not exist, or
/// the store round trip fails.
pub async fn add(raw_id: &str, player: &str, days: Option<i64>) -> Result<(), WhitelistError> {
    let ctx = Context::from_env()?;
    let raw_id = RawId::from(raw_id);
    let player = PlayerId::from(player);
    let days = days.unwrap_or(ctx.default_days);

    let document = ctx.fetch(&raw_id).await?;

    let now = Local::now().naive_local();
    let expires_at = now + Duration::days(days);
    let expiry = Expiry::from_datetime(expires_at);

    let new_code = ctx
        .patcher
        .insert(&document.code, &player, &expiry, &operator(), now);
    ctx.store.replace_code(&raw_id, &new_code).await?;

    tracing::info!(
        "Whitelist added: {player} on {} ({raw_id}), expires {}",
        document.display_title(),
        expires_at.format("%d/%m/%Y %H:%M")
    );

    Ok(())
}

/// Remove a player from a raw's whitelist.
///
/// # Errors
///
/// Returns error if configuration is missing, the raw does not exist, or
/// the store round trip fails.
pub async fn remove(raw_id: &str, player: &str) -> Result<(), WhitelistError> {
    let ctx = Context::from_env()?;
    let raw_id = RawId::from(raw_id);
    let player = PlayerId::from(player);

    let document = ctx.fetch(&raw_id).await?;

    let new_code = ctx.patcher.remove(&document.code, &player);
    ctx.store.replace_code(&raw_id, &new_code).await?;

    tracing::info!(
        "Whitelist removed: {player} from {} ({raw_id})",
        document.display_title()
    );

    Ok(())
}

/// List the players whitelisted in a raw.
///
/// # Errors
///
/// Returns error if configuration is missing, the raw does not exist, or
/// the fetch fails.
pub async fn list(raw_id: &str) -> Result<(), WhitelistError> {
    let ctx = Context::from_env()?;
    let raw_id = RawId::from(raw_id);

    let document = ctx.fetch(&raw_id).await?;
    let players = ctx.patcher.list(&document.code);

    tracing::info!(
        "Whitelist of {} ({raw_id}): {} players",
        document.display_title(),
        players.len()
    );
    for player in players {
        tracing::info!("  {player}");
    }

    Ok(())
}

/// Show a raw's info and code.
///
/// # Errors
///
/// Returns error if configuration is missing, the raw does not exist, or
/// the fetch fails.
pub async fn view(raw_id: &str) -> Result<(), WhitelistError> {
    let ctx = Context::from_env()?;
    let raw_id = RawId::from(raw_id);

    let document = ctx.fetch(&raw_id).await?;

    tracing::info!(
        "{} ({raw_id}) by {} - {} views",
        document.display_title(),
        document.display_author(),
        document.views
    );
    for line in document.code.lines() {
        tracing::info!("  {line}");
    }

    Ok(())
}
