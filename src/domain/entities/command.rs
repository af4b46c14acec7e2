use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// Precondition evaluated by the dispatcher before any handler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Sender must own the server the message was posted in
    GuildOwner,
}

impl Check {
    pub fn passes(&self, message: &Message) -> bool {
        match self {
            Check::GuildOwner => match (&message.guild, message.sender_id()) {
                (Some(guild), Some(sender)) => guild.owner_id == sender,
                _ => false,
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Check::GuildOwner => "guild-owner",
        }
    }
}

/// A parsed command call handed to a handler
#[derive(Debug, Clone)]
pub struct Invocation {
    pub message: Message,
    pub name: String,
    pub args: Vec<String>,
    pub rest: String,
}

/// Command handler - one per registered command
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, invocation: Invocation, bot: &dyn Bot) -> Result<String, CommandError>;
}

/// Represents a bot command
pub struct Command {
    pub name: String,
    pub description: Option<String>,
    pub aliases: Vec<String>,
    pub usage: Option<String>,
    pub handler: Option<Arc<dyn CommandHandler>>,
    pub checks: Vec<Check>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aliases: Vec::new(),
            usage: None,
            handler: None,
            checks: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn matches(&self, input: &str) -> bool {
        let input_lower = input.to_lowercase();
        self.name.to_lowercase() == input_lower ||
            self.aliases.iter().any(|a| a.to_lowercase() == input_lower)
    }

    /// First check the message fails, if any
    pub fn failed_check(&self, message: &Message) -> Option<Check> {
        self.checks.iter().copied().find(|c| !c.passes(message))
    }
}

/// Command registry for managing available commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: Command) {
        self.commands.insert(command.name.clone(), command);
    }

    pub fn find(&self, input: &str) -> Option<&Command> {
        self.commands.values().find(|c| c.matches(input))
    }

    /// Commands in name order
    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Guild, User};

    fn message_from(sender: &str, guild: Option<Guild>) -> Message {
        let mut msg = Message::from_text("chan", "!nickname Gale").with_sender(User::new(sender));
        msg.guild = guild;
        msg
    }

    #[test]
    fn test_guild_owner_check() {
        let guild = Guild::new("g1", "owner");
        assert!(Check::GuildOwner.passes(&message_from("owner", Some(guild.clone()))));
        assert!(!Check::GuildOwner.passes(&message_from("someone", Some(guild))));
    }

    #[test]
    fn test_guild_owner_check_fails_outside_guild() {
        assert!(!Check::GuildOwner.passes(&message_from("owner", None)));
    }

    #[test]
    fn test_matches_aliases_case_insensitively() {
        let cmd = Command::new("trekquote").with_aliases(vec!["quote".to_string()]);
        assert!(cmd.matches("TrekQuote"));
        assert!(cmd.matches("QUOTE"));
        assert!(!cmd.matches("date"));
    }

    #[test]
    fn test_failed_check_reports_first_failure() {
        let cmd = Command::new("nickname").with_check(Check::GuildOwner);
        let msg = message_from("someone", Some(Guild::new("g1", "owner")));
        assert_eq!(cmd.failed_check(&msg), Some(Check::GuildOwner));

        let open = Command::new("date");
        assert_eq!(open.failed_check(&msg), None);
    }
}
