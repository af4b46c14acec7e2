//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, Message, User};

/// Parses incoming messages into structured Message objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, text: impl Into<String>, sender: Option<User>) -> Message {
        let text = text.into();
        let content = self.parse_content(&text);

        Message::new(chat_id, text, content).with_sender_opt(sender)
    }

    /// Classify raw text as a command or plain text
    pub fn parse_content(&self, text: &str) -> Content {
        if text.trim().is_empty() {
            return Content::Empty;
        }

        match text.strip_prefix(self.command_prefix.as_str()) {
            Some(cmd_text) => Self::parse_command(cmd_text)
                .unwrap_or_else(|| Content::Text(text.to_string())),
            None => Content::Text(text.to_string()),
        }
    }

    /// Parse the text following the prefix. A bare prefix is not a command.
    fn parse_command(cmd_text: &str) -> Option<Content> {
        // Name must follow the prefix directly, "! date" is plain text
        if cmd_text.starts_with(char::is_whitespace) {
            return None;
        }

        let name_end = cmd_text.find(char::is_whitespace).unwrap_or(cmd_text.len());
        let name = &cmd_text[..name_end];
        if name.is_empty() {
            return None;
        }

        let rest = cmd_text[name_end..].trim();
        let args = rest.split_whitespace().map(|s| s.to_string()).collect();

        Some(Content::Command {
            name: name.to_string(),
            args,
            rest: rest.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_rest() {
        let parser = MessageParser::new("!");
        let msg = parser.parse("chan", "!nickname  Captain   Gale ", None);

        assert_eq!(msg.text, "!nickname  Captain   Gale ");
        assert_eq!(
            msg.content,
            Content::Command {
                name: "nickname".to_string(),
                args: vec!["Captain".to_string(), "Gale".to_string()],
                rest: "Captain   Gale".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_command_without_args() {
        let parser = MessageParser::new("!");
        match parser.parse_content("!date") {
            Content::Command { name, args, rest } => {
                assert_eq!(name, "date");
                assert!(args.is_empty());
                assert!(rest.is_empty());
            }
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_and_bare_prefix() {
        let parser = MessageParser::new("!");
        assert_eq!(parser.parse_content("hello"), Content::Text("hello".to_string()));
        assert_eq!(parser.parse_content("!"), Content::Text("!".to_string()));
        assert_eq!(parser.parse_content("! date"), Content::Text("! date".to_string()));
        assert_eq!(parser.parse_content("   "), Content::Empty);
    }

    #[test]
    fn test_multi_char_prefix() {
        let parser = MessageParser::new("gb!");
        assert!(parser.parse_content("gb!date").is_command());
        assert!(!parser.parse_content("!date").is_command());
    }
}
