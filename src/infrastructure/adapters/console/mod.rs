//! Console adapter for development/testing

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;

use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::entities::{Guild, User};
use crate::domain::traits::{Bot, BotInfo};

pub const CONSOLE_CHAT_ID: &str = "console";
pub const CONSOLE_GUILD_ID: &str = "console";
/// The local user owns the console guild, so owner-only commands work
pub const CONSOLE_USER_ID: &str = "console-user";

/// Console bot adapter for local development
pub struct ConsoleAdapter {
    info: BotInfo,
    nickname: RwLock<Option<String>>,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            info: BotInfo {
                id: "console-bot".to_string(),
                name: name.clone(),
                username: name,
            },
            nickname: RwLock::new(None),
        }
    }

    pub async fn nickname(&self) -> Option<String> {
        self.nickname.read().await.clone()
    }

    fn guild_snapshot(nickname: Option<String>) -> Guild {
        Guild::new(CONSOLE_GUILD_ID, CONSOLE_USER_ID).with_bot_nickname(nickname)
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    async fn set_nickname(&self, guild_id: &str, nickname: &str) -> Result<(), BotError> {
        if guild_id != CONSOLE_GUILD_ID {
            return Err(BotError::PermissionDenied(format!("unknown guild {}", guild_id)));
        }
        *self.nickname.write().await = Some(nickname.to_string());
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

/// Read lines from stdin until EOF, feeding each through the dispatcher
pub async fn run_console_bot(dispatcher: &MessageDispatcher<ConsoleAdapter>) -> Result<(), BotError> {
    let bot = dispatcher.bot().clone();
    let info = bot.bot_info();
    tracing::info!("Starting console bot (dev mode) as {}", info.name);

    let mention = format!("@{}", info.name.to_lowercase());
    let user = User::new(CONSOLE_USER_ID).with_username("you");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(b"> ").await.map_err(|e| BotError::Internal(e.to_string()))?;
        stdout.flush().await.map_err(|e| BotError::Internal(e.to_string()))?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(BotError::Internal(format!("stdin: {}", e))),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let message = dispatcher
            .parser()
            .parse(CONSOLE_CHAT_ID, input, Some(user.clone()))
            .with_guild(ConsoleAdapter::guild_snapshot(bot.nickname().await))
            .with_mentions_bot(input.to_lowercase().contains(&mention))
            .with_platform("console");

        dispatcher.dispatch(message).await;
    }

    tracing::info!("Console closed");
    Ok(())
}
