//! Atomic command-line words produced by the lexer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One command-line word after quote removal and cluster expansion.
///
/// A token carries nothing but its text. Whether it names an option is
/// derived from the text on demand.
///
/// # Examples
///
/// ```
/// use argmap_core::Token;
///
/// assert!(Token::from("--url").is_option());
/// assert!(!Token::from("www.github.com").is_option());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` when the token starts with `-`.
    pub fn is_option(&self) -> bool {
        self.0.starts_with('-')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
