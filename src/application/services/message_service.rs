use std::sync::Arc;

use crate::domain::entities::Message;
use crate::domain::rules::{to_brain_entry, TriggerContext};
use crate::domain::traits::{BotInfo, BrainStore};
use super::Responder;

/// Service for the chatter path: record to the brain, answer when addressed
pub struct MessageService {
    brain: Arc<dyn BrainStore>,
    responder: Responder,
    record: bool,
}

impl MessageService {
    pub fn new(brain: Arc<dyn BrainStore>, fallback_reply: Option<String>, record: bool) -> Self {
        Self {
            responder: Responder::new(brain.clone(), fallback_reply),
            brain,
            record,
        }
    }

    /// Append the message to the brain. Failures are logged and swallowed.
    pub async fn record(&self, message: &Message) {
        if !self.record {
            return;
        }

        let entry = to_brain_entry(&message.text, &message.mentions);
        tracing::debug!("Logging message: {}", entry);

        if let Err(e) = self.brain.append(&entry).await {
            tracing::warn!("Failed to write brain entry: {}", e);
        }
    }

    /// Reply to send if the message addresses the bot
    pub async fn process(&self, message: &Message, bot: &BotInfo) -> Option<String> {
        let triggered = TriggerContext::from_message(message, bot).is_triggered();
        if triggered {
            tracing::debug!("Addressed in {}", message.chat_id);
        }
        self.responder.respond(triggered).await
    }
}
