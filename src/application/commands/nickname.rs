use async_trait::async_trait;

use crate::application::errors::CommandError;
use crate::domain::entities::{Check, Command, CommandHandler, Invocation};
use crate::domain::traits::Bot;

/// `!nickname <text>` - change the bot's nickname in this server.
/// Gated on [`Check::GuildOwner`] by the dispatcher.
pub struct NicknameCommand;

#[async_trait]
impl CommandHandler for NicknameCommand {
    async fn execute(&self, invocation: Invocation, bot: &dyn Bot) -> Result<String, CommandError> {
        let guild = invocation
            .message
            .guild
            .as_ref()
            .ok_or(CommandError::PermissionDenied)?;

        let nickname = invocation.rest.trim();
        if nickname.is_empty() {
            return Err(CommandError::InvalidArgs("usage: !nickname <text>".to_string()));
        }

        match bot.set_nickname(&guild.id, nickname).await {
            Ok(()) => {
                tracing::info!("Nickname in guild {} changed to {}", guild.id, nickname);
                Ok(format!("Nickname changed to: {}", nickname))
            }
            Err(e) => {
                tracing::warn!("Nickname change in guild {} failed: {}", guild.id, e);
                Ok(format!("Error changing nickname: {}", e))
            }
        }
    }
}

pub fn command() -> Command {
    Command::new("nickname")
        .with_description("Change the bot's nickname (server owner only)")
        .with_usage("!nickname <text>")
        .with_check(Check::GuildOwner)
        .with_handler(NicknameCommand)
}
