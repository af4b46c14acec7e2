//! Discord adapter

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::http::Http;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::Ready;
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::prelude::{Client, Context, EventHandler, GatewayIntents};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::application::errors::BotError;
use crate::application::messaging::{MessageDispatcher, MessageParser};
use crate::domain::entities::{Guild, Message, User};
use crate::domain::traits::{Bot, BotInfo};

/// Gateway intents needed to read message text in servers and DMs
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Parse a snowflake id; Discord ids are never zero
fn parse_id(raw: &str) -> Result<u64, BotError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(BotError::Parse("id must be non-zero".to_string())),
        Ok(id) => Ok(id),
        Err(e) => Err(BotError::Parse(format!("invalid id {:?}: {}", raw, e))),
    }
}

/// Outbound Discord handle
pub struct DiscordAdapter {
    http: Arc<Http>,
    user_id: UserId,
    info: BotInfo,
}

impl DiscordAdapter {
    /// Create the HTTP client and fetch the bot's own account
    pub async fn connect(token: &str) -> Result<Self, BotError> {
        let http = Arc::new(Http::new(token));
        let me = http
            .get_current_user()
            .await
            .map_err(|e| BotError::Network(format!("Failed to fetch bot user: {}", e)))?;

        let info = BotInfo {
            id: me.id.to_string(),
            name: me.name.clone(),
            username: me.name.clone(),
        };

        Ok(Self { http, user_id: me.id, info })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl Bot for DiscordAdapter {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError> {
        let channel = ChannelId::new(parse_id(chat_id)?);
        debug!(channel_id = %channel, content_len = %text.len(), "Sending message to Discord");

        let message = channel
            .say(&self.http, text)
            .await
            .map_err(|e| BotError::Network(e.to_string()))?;

        Ok(message.id.to_string())
    }

    async fn set_nickname(&self, guild_id: &str, nickname: &str) -> Result<(), BotError> {
        let guild = GuildId::new(parse_id(guild_id)?);

        guild
            .edit_nickname(&self.http, Some(nickname))
            .await
            .map_err(|e| BotError::Platform(e.to_string()))
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

fn to_user(user: &serenity::model::user::User) -> User {
    let mut converted = User::new(user.id.to_string()).with_username(user.name.clone());
    if let Some(ref global) = user.global_name {
        converted = converted.with_display_name(global.clone());
    }
    converted
}

/// Convert a serenity message into the domain DTO
pub fn convert_message(
    parser: &MessageParser,
    msg: &SerenityMessage,
    guild: Option<Guild>,
    bot_id: UserId,
) -> Message {
    // Convert serenity's time::OffsetDateTime to chrono::DateTime<Utc>
    let timestamp = DateTime::<Utc>::from_timestamp(
        msg.timestamp.unix_timestamp(),
        msg.timestamp.nanosecond(),
    )
    .unwrap_or_else(Utc::now);

    let mut message = parser
        .parse(msg.channel_id.to_string(), msg.content.clone(), Some(to_user(&msg.author)))
        .with_id(msg.id.to_string())
        .with_mentions(msg.mentions.iter().map(to_user).collect())
        .with_mentions_bot(msg.mentions_user_id(bot_id))
        .with_timestamp(timestamp)
        .with_platform("discord");

    if let Some(guild) = guild {
        message = message.with_guild(guild);
    }
    message
}

/// Gateway event handler feeding the dispatcher
pub struct Handler {
    dispatcher: Arc<MessageDispatcher<DiscordAdapter>>,
}

impl Handler {
    pub fn new(dispatcher: Arc<MessageDispatcher<DiscordAdapter>>) -> Self {
        Self { dispatcher }
    }

    /// Owner and bot nickname for a guild, from cache with an HTTP fallback
    async fn guild_snapshot(&self, ctx: &Context, guild_id: GuildId, bot_id: UserId) -> Option<Guild> {
        let cached = ctx.cache.guild(guild_id).map(|g| {
            let nick = g.members.get(&bot_id).and_then(|m| m.nick.clone());
            (g.owner_id, nick)
        });

        let (owner_id, nick) = match cached {
            Some(found) => found,
            None => {
                let partial = match guild_id.to_partial_guild(ctx).await {
                    Ok(partial) => partial,
                    Err(e) => {
                        warn!(guild_id = %guild_id, error = %e, "Failed to fetch guild");
                        return None;
                    }
                };
                let nick = match ctx.http.get_member(guild_id, bot_id).await {
                    Ok(member) => member.nick,
                    Err(e) => {
                        debug!(guild_id = %guild_id, error = %e, "Bot member lookup failed");
                        None
                    }
                };
                (partial.owner_id, nick)
            }
        };

        Some(Guild::new(guild_id.to_string(), owner_id.to_string()).with_bot_nickname(nick))
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: SerenityMessage) {
        let bot_id = self.dispatcher.bot().user_id();
        if msg.author.id == bot_id {
            return;
        }

        let guild = match msg.guild_id {
            Some(guild_id) => self.guild_snapshot(&ctx, guild_id, bot_id).await,
            None => None,
        };

        let message = convert_message(self.dispatcher.parser(), &msg, guild, bot_id);
        self.dispatcher.dispatch(message).await;
    }
}

/// Connect to the gateway and run until the client stops
pub async fn run_discord_bot(
    token: &str,
    dispatcher: Arc<MessageDispatcher<DiscordAdapter>>,
) -> Result<(), BotError> {
    let info = dispatcher.bot().bot_info();
    info!("Starting Discord bot: {} ({})", info.name, info.id);

    let mut client = Client::builder(token, intents())
        .event_handler(Handler::new(dispatcher))
        .await
        .map_err(|e| BotError::Network(format!("Failed to create client: {}", e)))?;

    client.start().await.map_err(|e| {
        error!("Discord client stopped: {}", e);
        BotError::Network(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::to_brain_entry;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1234").unwrap(), 1234);
        assert!(matches!(parse_id("0"), Err(BotError::Parse(_))));
        assert!(matches!(parse_id("console"), Err(BotError::Parse(_))));
    }

    fn gateway_message() -> SerenityMessage {
        serde_json::from_value(serde_json::json!({
            "id": "10",
            "channel_id": "20",
            "author": {
                "id": "1",
                "username": "kirk",
                "discriminator": "0",
                "global_name": "Jim",
                "avatar": null,
                "bot": false
            },
            "content": "hey <@999> and <@!2>\nbye",
            "timestamp": "2024-03-09T07:05:01+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [
                { "id": "999", "username": "galebot", "discriminator": "0", "global_name": null, "avatar": null, "bot": true },
                { "id": "2", "username": "spock", "discriminator": "0", "global_name": null, "avatar": null, "bot": false }
            ],
            "mention_roles": [],
            "attachments": [],
            "embeds": [],
            "pinned": false,
            "type": 0
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_message() {
        let parser = MessageParser::new("!");
        let msg = gateway_message();

        let converted = convert_message(&parser, &msg, None, UserId::new(999));
        assert!(converted.mentions_bot);
        assert_eq!(converted.id, "10");
        assert_eq!(converted.chat_id, "20");
        assert_eq!(converted.sender_id(), Some("1"));
        assert_eq!(converted.sender.as_ref().map(|u| u.name()), Some("Jim".to_string()));
        assert_eq!(
            converted.mentions.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(),
            vec!["999", "2"]
        );
        assert_eq!(converted.timestamp.to_rfc3339(), "2024-03-09T07:05:01+00:00");
        assert_eq!(converted.platform, "discord");
        assert_eq!(
            to_brain_entry(&converted.text, &converted.mentions),
            "hey %USER% and %USER% bye"
        );

        let other = convert_message(&parser, &msg, Some(Guild::new("30", "1")), UserId::new(5));
        assert!(!other.mentions_bot);
        assert_eq!(other.guild.map(|g| g.id), Some("30".to_string()));
    }

    #[test]
    fn test_intents_include_message_content() {
        assert!(intents().contains(GatewayIntents::MESSAGE_CONTENT));
        assert!(intents().contains(GatewayIntents::GUILD_MESSAGES));
    }
}
