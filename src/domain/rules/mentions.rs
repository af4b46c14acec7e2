//! Mention scrubbing for brain entries

use crate::domain::entities::User;

/// Placeholder written in place of a user mention
pub const USER_PLACEHOLDER: &str = "%USER%";

/// Replace each mentioned user's markup (`<@id>` or `<@!id>`) with the
/// placeholder and fold line breaks so the result is one line.
pub fn to_brain_entry(text: &str, mentions: &[User]) -> String {
    let mut entry = text.to_string();

    for user in mentions {
        entry = entry
            .replace(&user.mention(), USER_PLACEHOLDER)
            .replace(&format!("<@!{}>", user.id), USER_PLACEHOLDER);
    }

    entry
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_each_mention() {
        let mentions = vec![User::new("111"), User::new("222")];
        let entry = to_brain_entry("<@111> meet <@!222>, not <@333>", &mentions);
        assert_eq!(entry, "%USER% meet %USER%, not <@333>");
    }

    #[test]
    fn test_repeated_mention_replaced_everywhere() {
        let entry = to_brain_entry("<@111> and <@111> again", &[User::new("111")]);
        assert_eq!(entry, "%USER% and %USER% again");
    }

    #[test]
    fn test_no_mentions_keeps_text() {
        assert_eq!(to_brain_entry("plain text", &[]), "plain text");
    }

    #[test]
    fn test_folds_line_breaks() {
        assert_eq!(to_brain_entry("first\nsecond\r\nthird", &[]), "first second third");
    }

    #[test]
    fn test_id_prefix_not_replaced() {
        let entry = to_brain_entry("<@1112>", &[User::new("111")]);
        assert_eq!(entry, "<@1112>");
    }
}
