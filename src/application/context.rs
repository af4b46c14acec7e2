//! Application context - everything the handlers share, built once at startup

use std::sync::Arc;

use crate::domain::traits::Bot;
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::{FileBrain, QuoteStore};

pub struct AppContext<B: Bot> {
    pub bot: Arc<B>,
    pub config: Config,
    pub quotes: Arc<QuoteStore>,
    pub brain: Arc<FileBrain>,
}

impl<B: Bot> AppContext<B> {
    /// Load the quote file and open the brain. A bad quote file is logged
    /// and replaced by an empty store.
    pub fn new(bot: Arc<B>, config: Config) -> Self {
        let quotes = match QuoteStore::load(&config.quotes.path) {
            Ok(quotes) => quotes,
            Err(e) => {
                tracing::warn!("Failed to load quotes: {}, continuing without quotes", e);
                QuoteStore::default()
            }
        };

        let brain = FileBrain::new(config.brain.path.clone());
        tracing::info!("Brain file: {}", brain.path().display());

        Self {
            bot,
            config,
            quotes: Arc::new(quotes),
            brain: Arc::new(brain),
        }
    }
}
