use async_trait::async_trait;
use std::sync::Arc;

use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandHandler, Invocation};
use crate::domain::traits::Bot;
use crate::infrastructure::storage::QuoteStore;

/// `!trekquote` - one random quote from the quote file
pub struct QuoteCommand {
    quotes: Arc<QuoteStore>,
}

impl QuoteCommand {
    pub fn new(quotes: Arc<QuoteStore>) -> Self {
        Self { quotes }
    }
}

#[async_trait]
impl CommandHandler for QuoteCommand {
    async fn execute(&self, _invocation: Invocation, _bot: &dyn Bot) -> Result<String, CommandError> {
        // pick_random only fails on an empty store
        self.quotes
            .pick_random()
            .map(|quote| quote.to_string())
            .map_err(|_| CommandError::Unavailable("No quotes are loaded".to_string()))
    }
}

pub fn command(quotes: Arc<QuoteStore>) -> Command {
    Command::new("trekquote")
        .with_description("Show a random quote")
        .with_aliases(vec!["quote".to_string()])
        .with_usage("!trekquote")
        .with_handler(QuoteCommand::new(quotes))
}
