//! Command execution against the raw store.

use chrono::{Duration, Local, NaiveDateTime};
use coderaw_core::{Expiry, Patcher, PatcherConfig, PlayerId, RawId};
use tracing::{error, info, instrument};

use crate::config::WhitelistConfig;
use crate::slack::{
    Block, build_added_message, build_error_message, build_help_message, build_list_message,
    build_removed_message, build_usage_message, build_view_message,
};
use crate::store::{RawDocument, StoreClient};

use super::parse::{Command, ParseError};

/// Reply produced by one command invocation.
#[derive(Debug, Clone)]
pub struct CommandReply {
    /// Blocks returned to the invoking channel.
    pub blocks: Vec<Block>,
    /// Plain-text fallback for notifications.
    pub fallback: String,
    /// Audit line for the configured channel, when a raw was mutated.
    pub audit: Option<String>,
}

impl CommandReply {
    fn new(blocks: Vec<Block>, fallback: impl Into<String>) -> Self {
        Self {
            blocks,
            fallback: fallback.into(),
            audit: None,
        }
    }

    fn with_audit(mut self, audit: String) -> Self {
        self.audit = Some(audit);
        self
    }

    fn error(description: &str) -> Self {
        Self::new(build_error_message(description), format!("❌ {description}"))
    }
}

/// Executes parsed whitelist commands.
///
/// Holds the store client and a configured patcher; every invocation is an
/// independent fetch-patch-replace round trip with no document cache and
/// no concurrency guard (last write wins, accepted).
#[derive(Debug, Clone)]
pub struct CommandHandler {
    store: StoreClient,
    patcher: Patcher,
    default_days: i64,
}

impl CommandHandler {
    /// Create a handler from the store client and whitelist configuration.
    #[must_use]
    pub fn new(store: StoreClient, whitelist: &WhitelistConfig) -> Self {
        Self {
            store,
            patcher: Patcher::new(PatcherConfig {
                role_label: whitelist.role_label.clone(),
            }),
            default_days: whitelist.default_days,
        }
    }

    /// Expiry window applied when a command omits `-days`.
    #[must_use]
    pub const fn default_days(&self) -> i64 {
        self.default_days
    }

    /// Parse and run one command invocation.
    ///
    /// Parse failures become usage/error replies; they never escape as
    /// errors, mirroring how the bot always answers the channel.
    #[instrument(skip(self), fields(user = %invoked_by))]
    pub async fn dispatch(&self, text: &str, invoked_by: &str) -> CommandReply {
        match Command::parse(text, self.default_days) {
            Ok(command) => self.run(command, invoked_by).await,
            Err(ParseError::Usage { usage, example }) => {
                CommandReply::new(build_usage_message(usage, example), "❌ Uso incorreto")
            }
            Err(err) => CommandReply::error(&err.to_string()),
        }
    }

    /// Run an already-parsed command.
    pub async fn run(&self, command: Command, invoked_by: &str) -> CommandReply {
        match command {
            Command::Add {
                raw_id,
                player,
                days,
            } => self.add(&raw_id, &player, days, invoked_by).await,
            Command::Remove { raw_id, player } => self.remove(&raw_id, &player, invoked_by).await,
            Command::List { raw_id } => self.list(&raw_id).await,
            Command::View { raw_id } => self.view(&raw_id).await,
            Command::Help => CommandReply::new(build_help_message(), "Comandos do CodeRaw Whitelist Bot"),
        }
    }

    async fn add(
        &self,
        raw_id: &RawId,
        player: &PlayerId,
        days: i64,
        invoked_by: &str,
    ) -> CommandReply {
        let document = match self.fetch_document(raw_id).await {
            Ok(document) => document,
            Err(reply) => return reply,
        };

        let now = Local::now().naive_local();
        let expires_at = now + Duration::days(days);
        let expiry = Expiry::from_datetime(expires_at);

        let new_code = self
            .patcher
            .insert(&document.code, player, &expiry, invoked_by, now);

        if let Err(err) = self.store.replace_code(raw_id, &new_code).await {
            error!(error = %err, %raw_id, "Failed to write whitelist addition");
            return CommandReply::error("Não foi possível atualizar o raw.");
        }

        info!(%raw_id, %player, days, "Whitelist entry added");

        let title = document.display_title();
        let player_name = format!("Player_{player}");
        let expires_display = format_stamp(expires_at);
        let entry_line = self.patcher.entry_line(player, &expiry);

        CommandReply::new(
            build_added_message(
                title,
                raw_id,
                player,
                &player_name,
                &expires_display,
                invoked_by,
                &entry_line,
            ),
            format!("Whitelist adicionada: {player} em {raw_id}"),
        )
        .with_audit(format!(
            "➕ `{player}` adicionado à whitelist de *{title}* (`{raw_id}`) por *{invoked_by}*, expira em {expires_display}"
        ))
    }

    async fn remove(&self, raw_id: &RawId, player: &PlayerId, invoked_by: &str) -> CommandReply {
        let document = match self.fetch_document(raw_id).await {
            Ok(document) => document,
            Err(reply) => return reply,
        };

        let new_code = self.patcher.remove(&document.code, player);

        if let Err(err) = self.store.replace_code(raw_id, &new_code).await {
            error!(error = %err, %raw_id, "Failed to write whitelist removal");
            return CommandReply::error("Não foi possível atualizar o raw.");
        }

        info!(%raw_id, %player, "Whitelist entry removed");

        let title = document.display_title();

        CommandReply::new(
            build_removed_message(title, raw_id, player, invoked_by),
            format!("Whitelist removida: {player} de {raw_id}"),
        )
        .with_audit(format!(
            "🗑️ `{player}` removido da whitelist de *{title}* (`{raw_id}`) por *{invoked_by}*"
        ))
    }

    async fn list(&self, raw_id: &RawId) -> CommandReply {
        let document = match self.fetch_document(raw_id).await {
            Ok(document) => document,
            Err(reply) => return reply,
        };

        let players = self.patcher.list(&document.code);

        CommandReply::new(
            build_list_message(document.display_title(), raw_id, &players),
            format!("Whitelist de {raw_id}: {} usuários", players.len()),
        )
    }

    async fn view(&self, raw_id: &RawId) -> CommandReply {
        let document = match self.fetch_document(raw_id).await {
            Ok(document) => document,
            Err(reply) => return reply,
        };

        CommandReply::new(
            build_view_message(
                document.display_title(),
                raw_id,
                document.display_author(),
                document.views,
                &document.code,
            ),
            format!("Raw {raw_id}"),
        )
    }

    /// Fetch a raw, folding not-found and transport failures into replies.
    async fn fetch_document(&self, raw_id: &RawId) -> Result<RawDocument, CommandReply> {
        match self.store.fetch(raw_id).await {
            Ok(Some(document)) => Ok(document),
            Ok(None) => Err(CommandReply::error(&format!(
                "Raw com ID `{raw_id}` não foi encontrado."
            ))),
            Err(err) => {
                error!(error = %err, %raw_id, "Failed to fetch raw");
                Err(CommandReply::error("Erro ao buscar raw."))
            }
        }
    }
}


fn format_stamp(stamp: NaiveDateTime) -> String {
    stamp.format("%d/%m/%Y %H:%M").to_string()
}
