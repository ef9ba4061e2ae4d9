//! Application state shared across handlers.

use std::sync::Arc;

use crate::commands::CommandHandler;
use crate::config::BotConfig;
use crate::slack::SlackClient;
use crate::store::StoreClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BotConfig,
    slack: SlackClient,
    commands: CommandHandler,
}

impl AppState {
    /// Build the state, wiring the clients from configuration.
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        let slack = SlackClient::new(&config.slack);
        let store = StoreClient::new(&config.store);
        let commands = CommandHandler::new(store, &config.whitelist);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                slack,
                commands,
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.inner.config
    }

    /// The Slack client.
    #[must_use]
    pub fn slack(&self) -> &SlackClient {
        &self.inner.slack
    }

    /// The command handler.
    #[must_use]
    pub fn commands(&self) -> &CommandHandler {
        &self.inner.commands
    }
}
