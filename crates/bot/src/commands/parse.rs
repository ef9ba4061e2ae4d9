//! Token parsing for whitelist commands.

use coderaw_core::{PlayerId, RawId};
use thiserror::Error;

pub(crate) const ADD_USAGE: &str = "/raw add <raw_id> -player <playerId> -days <dias>";
pub(crate) const ADD_EXAMPLE: &str = "/raw add -OcfVWoCNOj7-B-kxUO8 -player 123456 -days 30";
pub(crate) const REMOVE_USAGE: &str = "/raw remove <raw_id> -player <playerId>";
pub(crate) const REMOVE_EXAMPLE: &str = "/raw remove -OcfVWoCNOj7-B-kxUO8 -player 123456";
pub(crate) const LIST_USAGE: &str = "/raw list <raw_id>";
pub(crate) const VIEW_USAGE: &str = "/raw view <raw_id>";

/// A parsed whitelist command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a player to a raw's whitelist.
    Add {
        raw_id: RawId,
        player: PlayerId,
        days: i64,
    },
    /// Remove a player from a raw's whitelist.
    Remove { raw_id: RawId, player: PlayerId },
    /// List the players whitelisted in a raw.
    List { raw_id: RawId },
    /// Show a raw's info and code preview.
    View { raw_id: RawId },
    /// Show command usage.
    Help,
}

/// Errors produced while parsing command tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Required arguments are missing for a subcommand.
    #[error("Uso correto: {usage}")]
    Usage {
        usage: &'static str,
        example: &'static str,
    },

    /// `-days` was given a non-numeric value.
    #[error("Valor inválido para -days: `{0}`")]
    InvalidDays(String),
}

impl Command {
    /// Parse the slash-command text into a command.
    ///
    /// The first token selects the subcommand; within `add` and `remove`,
    /// `-player <id>` (and `-days <n>` for `add`) are consumed pairwise
    /// and the first remaining token is the raw id. Token order is
    /// otherwise free. An empty or unknown subcommand parses to `Help`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Usage` when required arguments are missing and
    /// `ParseError::InvalidDays` for a malformed day count. The patcher
    /// itself never validates - bad input stops here.
    pub fn parse(text: &str, default_days: i64) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let Some((subcommand, rest)) = tokens.split_first() else {
            return Ok(Self::Help);
        };

        match subcommand.to_lowercase().as_str() {
            "add" | "addwhitelist" => {
                let args = parse_target_args(rest, default_days, true)?;
                match (args.raw_id, args.player) {
                    (Some(raw_id), Some(player)) => Ok(Self::Add {
                        raw_id,
                        player,
                        days: args.days,
                    }),
                    _ => Err(ParseError::Usage {
                        usage: ADD_USAGE,
                        example: ADD_EXAMPLE,
                    }),
                }
            }
            "remove" | "removewhitelist" => {
                let args = parse_target_args(rest, default_days, false)?;
                match (args.raw_id, args.player) {
                    (Some(raw_id), Some(player)) => Ok(Self::Remove { raw_id, player }),
                    _ => Err(ParseError::Usage {
                        usage: REMOVE_USAGE,
                        example: REMOVE_EXAMPLE,
                    }),
                }
            }
            "list" | "listwhitelist" => rest.first().map_or(
                Err(ParseError::Usage {
                    usage: LIST_USAGE,
                    example: LIST_USAGE,
                }),
                |raw_id| {
                    Ok(Self::List {
                        raw_id: RawId::from(*raw_id),
                    })
                },
            ),
            "view" | "viewraw" => rest.first().map_or(
                Err(ParseError::Usage {
                    usage: VIEW_USAGE,
                    example: VIEW_USAGE,
                }),
                |raw_id| {
                    Ok(Self::View {
                        raw_id: RawId::from(*raw_id),
                    })
                },
            ),
            _ => Ok(Self::Help),
        }
    }
}

/// Arguments shared by the add/remove subcommands.
struct TargetArgs {
    raw_id: Option<RawId>,
    player: Option<PlayerId>,
    days: i64,
}

/// Consume `-player`/`-days` flag pairs; the first free token is the raw id.
///
/// Extra free tokens are ignored, and a flag at the end of the token list
/// with no value falls through to the free-token branch - both quirks are
/// load-bearing for callers that paste ids containing dashes.
fn parse_target_args(
    tokens: &[&str],
    default_days: i64,
    parse_days: bool,
) -> Result<TargetArgs, ParseError> {
    let mut raw_id: Option<RawId> = None;
    let mut player: Option<PlayerId> = None;
    let mut days = default_days;

    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == "-player" && i + 1 < tokens.len() {
            player = Some(PlayerId::from(tokens[i + 1]));
            i += 2;
        } else if parse_days && tokens[i] == "-days" && i + 1 < tokens.len() {
            days = tokens[i + 1]
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidDays(tokens[i + 1].to_owned()))?;
            i += 2;
        } else if raw_id.is_none() {
            raw_id = Some(RawId::from(tokens[i]));
            i += 1;
        } else {
            i += 1;
        }
    }

    Ok(TargetArgs {
        raw_id,
        player,
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_full() {
        let command = Command::parse("add -Ocf -player 123456 -days 7", 30).expect("parses");
        assert_eq!(
            command,
            Command::Add {
                raw_id: RawId::new("-Ocf"),
                player: PlayerId::new("123456"),
                days: 7,
            }
        );
    }

    #[test]
    fn test_parse_add_default_days() {
        let command = Command::parse("add -Ocf -player 123456", 30).expect("parses");
        assert_eq!(
            command,
            Command::Add {
                raw_id: RawId::new("-Ocf"),
                player: PlayerId::new("123456"),
                days: 30,
            }
        );
    }

    #[test]
    fn test_parse_add_flags_before_raw_id() {
        // Flag pairs may precede the free raw id token
        let command = Command::parse("add -player 9 -days 2 raw42", 30).expect("parses");
        assert_eq!(
            command,
            Command::Add {
                raw_id: RawId::new("raw42"),
                player: PlayerId::new("9"),
                days: 2,
            }
        );
    }

    #[test]
    fn test_parse_add_missing_player_is_usage_error() {
        let err = Command::parse("add -Ocf", 30).expect_err("usage error");
        assert!(matches!(err, ParseError::Usage { .. }));
    }

    #[test]
    fn test_parse_add_malformed_days() {
        let err = Command::parse("add -Ocf -player 1 -days muitos", 30).expect_err("days error");
        assert_eq!(err, ParseError::InvalidDays("muitos".to_owned()));
    }

    #[test]
    fn test_parse_remove_ignores_days_flag() {
        // remove has no -days flag; the dangling pair is skipped as free tokens
        let command = Command::parse("remove -Ocf -player 1 -days 5", 30).expect("parses");
        assert_eq!(
            command,
            Command::Remove {
                raw_id: RawId::new("-Ocf"),
                player: PlayerId::new("1"),
            }
        );
    }

    #[test]
    fn test_parse_list_and_view() {
        assert_eq!(
            Command::parse("list raw1", 30).expect("parses"),
            Command::List {
                raw_id: RawId::new("raw1")
            }
        );
        assert_eq!(
            Command::parse("view raw1", 30).expect("parses"),
            Command::View {
                raw_id: RawId::new("raw1")
            }
        );
    }

    #[test]
    fn test_parse_list_missing_raw_is_usage_error() {
        assert!(matches!(
            Command::parse("list", 30),
            Err(ParseError::Usage { .. })
        ));
    }

    #[test]
    fn test_parse_empty_and_unknown_are_help() {
        assert_eq!(Command::parse("", 30).expect("parses"), Command::Help);
        assert_eq!(Command::parse("   ", 30).expect("parses"), Command::Help);
        assert_eq!(Command::parse("banana", 30).expect("parses"), Command::Help);
        assert_eq!(Command::parse("help", 30).expect("parses"), Command::Help);
    }

    #[test]
    fn test_parse_raw_id_with_leading_dash() {
        // Real raw ids start with a dash; they must not be eaten as flags
        let command = Command::parse("add -OcfVWoCNOj7-B-kxUO8 -player 123456 -days 30", 30)
            .expect("parses");
        assert_eq!(
            command,
            Command::Add {
                raw_id: RawId::new("-OcfVWoCNOj7-B-kxUO8"),
                player: PlayerId::new("123456"),
                days: 30,
            }
        );
    }
}
