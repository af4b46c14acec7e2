use crate::application::errors::CommandError;
use crate::domain::entities::{Command, CommandRegistry, Content, Invocation, Message};
use crate::domain::traits::Bot;

const HELP_COMMAND: &str = "help";

/// Service for managing and executing commands
pub struct CommandService {
    registry: CommandRegistry,
    prefix: String,
}

impl CommandService {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            prefix: prefix.into(),
        }
    }

    pub fn register(&mut self, command: Command) {
        self.registry.register(command);
    }

    pub fn register_defaults(&mut self) {
        // Answered by get_help, no handler
        let usage = format!("{}help [command]", self.prefix);
        self.register(Command::new(HELP_COMMAND)
            .with_description("Show help message")
            .with_usage(usage));
    }

    /// Run the command in `message`, if it carries one.
    ///
    /// Checks run before the handler; a failing check yields
    /// `CommandError::PermissionDenied` without touching the handler.
    pub async fn handle(&self, message: &Message, bot: &dyn Bot) -> Result<Option<String>, CommandError> {
        let Content::Command { name, args, rest } = &message.content else {
            return Ok(None);
        };

        let cmd = self.registry.find(name)
            .ok_or_else(|| CommandError::NotFound(name.clone()))?;

        if let Some(check) = cmd.failed_check(message) {
            tracing::debug!(
                "Check {} failed for {} by {:?}",
                check.as_str(),
                cmd.name,
                message.sender_id()
            );
            return Err(CommandError::PermissionDenied);
        }

        // Only help is registered without a handler
        let Some(handler) = &cmd.handler else {
            return Ok(Some(self.get_help(args.first().map(String::as_str))));
        };

        let invocation = Invocation {
            message: message.clone(),
            name: cmd.name.clone(),
            args: args.clone(),
            rest: rest.clone(),
        };

        handler.execute(invocation, bot).await.map(Some)
    }

    /// Run the command and turn the outcome into the reply to send.
    ///
    /// Unknown commands and failed checks stay silent; other errors
    /// become a short `Error: ...` reply.
    pub async fn respond(&self, message: &Message, bot: &dyn Bot) -> Option<String> {
        match self.handle(message, bot).await {
            Ok(reply) => reply,
            Err(CommandError::NotFound(name)) => {
                tracing::debug!("Ignoring unknown command: {}", name);
                None
            }
            Err(CommandError::PermissionDenied) => None,
            Err(e) => {
                tracing::debug!("Command failed: {}", e);
                Some(format!("Error: {}", e))
            }
        }
    }

    pub fn get_help(&self, command: Option<&str>) -> String {
        if let Some(name) = command {
            if let Some(cmd) = self.registry.find(name) {
                let mut help = format!("{}{} - {}", self.prefix, cmd.name, cmd.description.as_deref().unwrap_or("No description"));
                if let Some(usage) = &cmd.usage {
                    help.push_str(&format!("\nUsage: {}", usage));
                }
                if !cmd.aliases.is_empty() {
                    help.push_str(&format!("\nAliases: {}", cmd.aliases.join(", ")));
                }
                return help;
            }
            return format!("Command {}{} not found", self.prefix, name);
        }

        // List all commands
        let mut help = "Available commands:\n".to_string();
        for cmd in self.registry.all() {
            help.push_str(&format!("  {}{} - {}\n", self.prefix, cmd.name, cmd.description.as_deref().unwrap_or("")));
        }
        help
    }
}
