use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote loaded from the quote file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuoteRecord {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}", self.text, self.author)
    }
}
