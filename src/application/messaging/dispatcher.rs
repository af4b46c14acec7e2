//! Message dispatcher - Routes every inbound message through the bot

use std::sync::Arc;

use crate::application::commands;
use crate::application::context::AppContext;
use crate::application::services::{CommandService, MessageService};
use crate::domain::entities::Message;
use crate::domain::traits::Bot;
use super::parser::MessageParser;

/// Per-message pipeline: brain append, trigger and reply, then commands
pub struct MessageDispatcher<B: Bot> {
    bot: Arc<B>,
    parser: MessageParser,
    messages: MessageService,
    commands: CommandService,
}

impl<B: Bot> MessageDispatcher<B> {
    pub fn new(ctx: &AppContext<B>) -> Self {
        let prefix = ctx.config.bot.prefix.clone();

        let mut commands = CommandService::new(&prefix);
        commands::register_all(&mut commands, ctx.quotes.clone());

        let messages = MessageService::new(
            ctx.brain.clone(),
            ctx.config.responder.fallback_reply.clone(),
            ctx.config.brain.record,
        );

        Self {
            bot: ctx.bot.clone(),
            parser: MessageParser::new(prefix),
            messages,
            commands,
        }
    }

    pub fn parser(&self) -> &MessageParser {
        &self.parser
    }

    pub fn bot(&self) -> &Arc<B> {
        &self.bot
    }

    /// Process one message; returns the replies that were sent
    pub async fn dispatch(&self, message: Message) -> Vec<String> {
        let info = self.bot.bot_info();
        if message.sender_id() == Some(info.id.as_str()) {
            return Vec::new();
        }

        let mut sent = Vec::new();

        self.messages.record(&message).await;

        if let Some(reply) = self.messages.process(&message, &info).await {
            if self.send(&message.chat_id, &reply).await {
                sent.push(reply);
            }
        }

        if let Some(reply) = self.commands.respond(&message, self.bot.as_ref()).await {
            if self.send(&message.chat_id, &reply).await {
                sent.push(reply);
            }
        }

        sent
    }

    /// Single send attempt; failures are logged only
    async fn send(&self, chat_id: &str, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        match self.bot.send_message(chat_id, text).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Failed to send message to {}: {}", chat_id, e);
                false
            }
        }
    }
}
