use super::User;
use chrono::{DateTime, Utc};

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    /// A prefixed command. `rest` is everything after the command name,
    /// with surrounding whitespace trimmed but inner spacing preserved.
    Command { name: String, args: Vec<String>, rest: String },
    Empty,
}

impl Content {
    pub fn is_command(&self) -> bool {
        matches!(self, Content::Command { .. })
    }
}

/// Snapshot of the server a message was posted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: String,
    pub owner_id: String,
    /// The bot's per-server nickname, if one is set
    pub bot_nickname: Option<String>,
}

impl Guild {
    pub fn new(id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            bot_nickname: None,
        }
    }

    pub fn with_bot_nickname(mut self, nickname: Option<String>) -> Self {
        self.bot_nickname = nickname;
        self
    }
}

/// Represents an incoming message, decoupled from any platform SDK types
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub guild: Option<Guild>,
    pub sender: Option<User>,
    /// Verbatim message text as received
    pub text: String,
    pub content: Content,
    pub mentions: Vec<User>,
    /// Whether the bot account itself was explicitly @-mentioned
    pub mentions_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>, content: Content) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            guild: None,
            sender: None,
            text: text.into(),
            content,
            mentions: Vec::new(),
            mentions_bot: false,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn from_text(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(chat_id, text.clone(), Content::Text(text))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    pub fn with_sender_opt(mut self, user: Option<User>) -> Self {
        if let Some(u) = user {
            self.sender = Some(u);
        }
        self
    }

    pub fn with_guild(mut self, guild: Guild) -> Self {
        self.guild = Some(guild);
        self
    }

    pub fn with_mentions(mut self, mentions: Vec<User>) -> Self {
        self.mentions = mentions;
        self
    }

    pub fn with_mentions_bot(mut self, mentioned: bool) -> Self {
        self.mentions_bot = mentioned;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.sender.as_ref().map(|u| u.id.as_str())
    }
}
