//! Built-in command handlers

pub mod date;
pub mod nickname;
pub mod quote;

use std::sync::Arc;

use crate::application::services::CommandService;
use crate::infrastructure::storage::QuoteStore;

/// Register date, quote and nickname on top of the service defaults
pub fn register_all(commands: &mut CommandService, quotes: Arc<QuoteStore>) {
    commands.register_defaults();
    commands.register(date::command());
    commands.register(quote::command(quotes));
    commands.register(nickname::command());
}
