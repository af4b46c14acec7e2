//! Trigger detection - decides whether a message addresses the bot

use crate::domain::entities::Message;
use crate::domain::traits::BotInfo;

/// Per-message snapshot used for trigger evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContext {
    pub text: String,
    pub account_name: String,
    pub nickname: Option<String>,
    pub mentioned: bool,
}

impl TriggerContext {
    /// Build a context; all strings are lowercased here
    pub fn new(text: &str, account_name: &str, nickname: Option<&str>, mentioned: bool) -> Self {
        Self {
            text: text.to_lowercase(),
            account_name: account_name.to_lowercase(),
            nickname: nickname
                .map(str::to_lowercase)
                .filter(|n| !n.is_empty()),
            mentioned,
        }
    }

    pub fn from_message(message: &Message, bot: &BotInfo) -> Self {
        let nickname = message.guild.as_ref().and_then(|g| g.bot_nickname.as_deref());
        Self::new(&message.text, &bot.name, nickname, message.mentions_bot)
    }

    /// Whether the message addresses the bot
    pub fn is_triggered(&self) -> bool {
        let has_name = !self.account_name.is_empty();

        let name_in_text = has_name && self.text.contains(&self.account_name);
        let nickname_hit = self
            .nickname
            .as_deref()
            .map(|nick| self.text.contains(nick) || self.text.starts_with(nick))
            .unwrap_or(false);
        let starts_with_name = has_name && self.text.starts_with(&self.account_name);

        name_in_text | nickname_hit | starts_with_name | self.mentioned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Guild, Message};

    #[test]
    fn test_account_name_substring_case_insensitive() {
        let ctx = TriggerContext::new("Hey GaleBot, what's up", "GaleBot", None, false);
        assert!(ctx.is_triggered());

        let ctx = TriggerContext::new("hey galebot", "GALEBOT", None, false);
        assert!(ctx.is_triggered());
    }

    #[test]
    fn test_explicit_mention_without_name() {
        let ctx = TriggerContext::new("<@999> hello", "GaleBot", None, true);
        assert!(ctx.is_triggered());
    }

    #[test]
    fn test_nickname_substring_and_prefix() {
        let ctx = TriggerContext::new("what do you think, Stormy?", "GaleBot", Some("Stormy"), false);
        assert!(ctx.is_triggered());

        let ctx = TriggerContext::new("stormy tell me", "GaleBot", Some("Stormy"), false);
        assert!(ctx.is_triggered());
    }

    #[test]
    fn test_no_trigger() {
        let ctx = TriggerContext::new("just chatting here", "GaleBot", Some("Stormy"), false);
        assert!(!ctx.is_triggered());
    }

    #[test]
    fn test_empty_nickname_is_skipped() {
        let ctx = TriggerContext::new("anything at all", "GaleBot", Some(""), false);
        assert_eq!(ctx.nickname, None);
        assert!(!ctx.is_triggered());
    }

    #[test]
    fn test_empty_account_name_never_matches() {
        let ctx = TriggerContext::new("anything at all", "", None, false);
        assert!(!ctx.is_triggered());
    }

    #[test]
    fn test_from_message_uses_guild_nickname() {
        let bot = BotInfo {
            id: "999".to_string(),
            name: "GaleBot".to_string(),
            username: "GaleBot".to_string(),
        };
        let msg = Message::from_text("chan", "Stormy, say something")
            .with_guild(Guild::new("g1", "owner").with_bot_nickname(Some("Stormy".to_string())));

        let ctx = TriggerContext::from_message(&msg, &bot);
        assert_eq!(ctx.nickname.as_deref(), Some("stormy"));
        assert!(ctx.is_triggered());

        let dm = Message::from_text("chan", "Stormy, say something");
        assert!(!TriggerContext::from_message(&dm, &bot).is_triggered());
    }
}
