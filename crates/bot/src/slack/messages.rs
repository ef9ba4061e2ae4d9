//! Slack message builders for command replies.
//!
//! Each builder renders one command outcome as Block Kit. Wording stays in
//! the project's Portuguese voice so replies read the same everywhere the
//! bot is deployed.

use coderaw_core::{PlayerId, RawId};

use super::types::{Block, ContextElement, PlainText, Text};

/// Footer shown on every whitelist reply.
const FOOTER: &str = "CodeRaw 2025 - Sistema de Whitelist";

/// Listing entries shown before the overflow line.
const LIST_PREVIEW_LIMIT: usize = 10;

/// Longest code preview embedded in a reply.
const CODE_PREVIEW_LIMIT: usize = 1000;

/// Build the confirmation for a whitelist addition.
///
/// Includes the raw's title and id, the player, the expiry, who added the
/// entry, and a preview of the exact line that landed in the code.
#[must_use]
pub fn build_added_message(
    title: &str,
    raw_id: &RawId,
    player: &PlayerId,
    player_name: &str,
    expires_display: &str,
    added_by: &str,
    entry_line: &str,
) -> Vec<Block> {
    vec![
        Block::Header {
            text: PlainText::new("✅ Whitelist Adicionada"),
        },
        Block::Section {
            text: Text::mrkdwn(format!(
                "*📝 Raw:* `{title}`\n*🆔 Raw ID:* `{raw_id}`\n*🎮 Player ID:* `{player}`\n*👤 Player Name:* {player_name}\n*⏰ Expira em:* {expires_display}\n*📝 Adicionado por:* {added_by}"
            )),
        },
        Block::Section {
            text: Text::mrkdwn(format!(
                "```lua\n-- Linha adicionada:\n{entry_line}\n```"
            )),
        },
        Block::Context {
            elements: vec![ContextElement::Mrkdwn {
                text: FOOTER.to_owned(),
            }],
        },
    ]
}

/// Build the confirmation for a whitelist removal.
#[must_use]
pub fn build_removed_message(
    title: &str,
    raw_id: &RawId,
    player: &PlayerId,
    removed_by: &str,
) -> Vec<Block> {
    vec![
        Block::Header {
            text: PlainText::new("✅ Whitelist Removida"),
        },
        Block::Section {
            text: Text::mrkdwn(format!(
                "*📝 Raw:* {title}\n*🆔 Raw ID:* `{raw_id}`\n*🎮 Player ID:* `{player}`\n*🗑️ Removido por:* {removed_by}"
            )),
        },
        Block::Context {
            elements: vec![ContextElement::Mrkdwn {
                text: FOOTER.to_owned(),
            }],
        },
    ]
}

/// Build the whitelist listing for a raw.
///
/// Shows the total count and the first ten ids; longer lists get an
/// overflow line instead of flooding the channel.
#[must_use]
pub fn build_list_message(title: &str, raw_id: &RawId, players: &[PlayerId]) -> Vec<Block> {
    let mut blocks = vec![Block::Header {
        text: PlainText::new(format!("📋 Whitelist - {title}")),
    }];

    if players.is_empty() {
        blocks.push(Block::Section {
            text: Text::mrkdwn("Nenhum usuário na whitelist."),
        });
    } else {
        let mut users_text: String = players
            .iter()
            .take(LIST_PREVIEW_LIMIT)
            .map(|id| format!("• `{id}`\n"))
            .collect();
        if players.len() > LIST_PREVIEW_LIMIT {
            users_text.push_str(&format!(
                "... e mais {} usuários",
                players.len() - LIST_PREVIEW_LIMIT
            ));
        }

        blocks.push(Block::Section {
            text: Text::mrkdwn(format!(
                "*Total de usuários na whitelist:* {}",
                players.len()
            )),
        });
        blocks.push(Block::Section {
            text: Text::mrkdwn(format!("*👥 Usuários:*\n{}", users_text.trim_end())),
        });
    }

    blocks.push(Block::Context {
        elements: vec![ContextElement::Mrkdwn {
            text: format!("Raw ID: {raw_id}"),
        }],
    });

    blocks
}

/// Build the raw info + code preview reply.
#[must_use]
pub fn build_view_message(
    title: &str,
    raw_id: &RawId,
    author: &str,
    views: u64,
    code: &str,
) -> Vec<Block> {
    vec![
        Block::Header {
            text: PlainText::new(format!("📄 {title}")),
        },
        Block::Section {
            text: Text::mrkdwn(format!(
                "*🆔 ID:* `{raw_id}`\n*👤 Autor:* {author}\n*👀 Views:* {views}"
            )),
        },
        Block::Divider,
        Block::Section {
            text: Text::mrkdwn(format!("```lua\n{}\n```", truncate_chars(code, CODE_PREVIEW_LIMIT))),
        },
    ]
}

/// Build the command usage overview.
#[must_use]
pub fn build_help_message() -> Vec<Block> {
    vec![
        Block::Header {
            text: PlainText::new("🤖 Comandos do CodeRaw Whitelist Bot"),
        },
        Block::Section {
            text: Text::mrkdwn("Sistema de gerenciamento de whitelist em raws"),
        },
        Block::Section {
            text: Text::mrkdwn(
                "*➕ Adicionar Whitelist*\n`/raw add <raw_id> -player <playerId> -days <dias>`\nAdiciona whitelist a um raw\n*Exemplo:* `/raw add -OcfVWoCNOj7-B-kxUO8 -player 123456 -days 30`",
            ),
        },
        Block::Section {
            text: Text::mrkdwn(
                "*🗑️ Remover Whitelist*\n`/raw remove <raw_id> -player <playerId>`\nRemove usuário da whitelist\n*Exemplo:* `/raw remove -OcfVWoCNOj7-B-kxUO8 -player 123456`",
            ),
        },
        Block::Section {
            text: Text::mrkdwn(
                "*📋 Listar Whitelist*\n`/raw list <raw_id>`\nMostra todos os usuários na whitelist",
            ),
        },
        Block::Section {
            text: Text::mrkdwn(
                "*👀 Ver Raw*\n`/raw view <raw_id>`\nMostra informações e código de um raw",
            ),
        },
        Block::Context {
            elements: vec![ContextElement::Mrkdwn {
                text: FOOTER.to_owned(),
            }],
        },
    ]
}

/// Build an incorrect-usage reply for one subcommand.
#[must_use]
pub fn build_usage_message(usage: &str, example: &str) -> Vec<Block> {
    vec![
        Block::Header {
            text: PlainText::new("❌ Uso incorreto"),
        },
        Block::Section {
            text: Text::mrkdwn(format!(
                "*Uso correto:* `{usage}`\n*Exemplo:* `{example}`"
            )),
        },
    ]
}

/// Build an error reply.
#[must_use]
pub fn build_error_message(description: &str) -> Vec<Block> {
    vec![Block::Section {
        text: Text::mrkdwn(format!("❌ {description}")),
    }]
}

/// Truncate to at most `limit` characters, marking the cut with `...`.
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_owned()
    } else {
        let mut truncated: String = text.chars().take(limit).collect();
        truncated.push_str("...");
        truncated
    }
}
