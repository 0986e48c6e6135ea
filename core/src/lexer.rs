//! Quote-aware splitting of a command string into tokens.
//!
//! Splitting happens in two passes. The command is first broken into words
//! with POSIX shell quoting rules (single quotes, double quotes, backslash
//! escapes), then every word is syntax-checked and bundled short-option
//! clusters such as `-sSP8080` are expanded into `-s -S -P 8080`.
//!
//! # Examples
//!
//! ```
//! use argmap_core::split;
//!
//! let tokens = split("curl -sSP8080 www.github.com").unwrap();
//! let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(words, ["curl", "-s", "-S", "-P", "8080", "www.github.com"]);
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, SyntaxError};
use crate::token::Token;

static PATTERNS: LazyLock<SyntaxPatterns> = LazyLock::new(SyntaxPatterns::new);

struct SyntaxPatterns {
    // -s-S, -s--basic
    glued_short_options: Regex,
    // --ftp-port8084
    glued_long_option_argument: Regex,
}

impl SyntaxPatterns {
    fn new() -> Self {
        Self {
            glued_short_options: Regex::new(r"^-\w-").expect("static regex must compile"),
            glued_long_option_argument: Regex::new(r"^--\w+-\w+\d")
                .expect("static regex must compile"),
        }
    }
}

/// Splits a command string into tokens.
///
/// # Errors
///
/// Returns [`SyntaxError::UnbalancedQuotes`] when the quoting cannot be
/// resolved, and the first adjacency violation found by [`check_syntax`]
/// otherwise. Lexing stops at the first failure.
pub fn split(command: &str) -> Result<Vec<Token>> {
    let words = shlex::split(&escape_comment_markers(command))
        .ok_or_else(|| SyntaxError::UnbalancedQuotes(command.to_string()))?;

    let mut tokens = Vec::with_capacity(words.len());
    for word in &words {
        check_syntax(word)?;
        if is_short_option_cluster(word) {
            expand_short_option_cluster(word, &mut tokens);
        } else {
            tokens.push(Token::new(word.as_str()));
        }
    }

    debug!(words = words.len(), tokens = tokens.len(), "Split command");
    Ok(tokens)
}

/// Rejects the two adjacency patterns that make a word ambiguous.
///
/// This is a partial checker: anything outside the two patterns is accepted.
///
/// # Examples
///
/// ```
/// use argmap_core::{SyntaxError, check_syntax};
///
/// assert!(check_syntax("--ftp-port").is_ok());
/// assert_eq!(
///     check_syntax("-s-S"),
///     Err(SyntaxError::GluedShortOptions("-s-S".to_string()))
/// );
/// ```
pub fn check_syntax(word: &str) -> Result<()> {
    if PATTERNS.glued_short_options.is_match(word) {
        return Err(SyntaxError::GluedShortOptions(word.to_string()));
    }
    if PATTERNS.glued_long_option_argument.is_match(word) {
        return Err(SyntaxError::GluedLongOptionArgument(word.to_string()));
    }
    Ok(())
}

/// Escapes every unquoted `#` so it stays part of its word instead of
/// starting a comment.
fn escape_comment_markers(command: &str) -> Cow<'_, str> {
    if !command.contains('#') {
        return Cow::Borrowed(command);
    }

    let mut out = String::with_capacity(command.len() + 4);
    let mut quote: Option<char> = None;
    let mut chars = command.chars();
    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (None, '#') => out.push_str("\\#"),
            (None | Some('"'), '\\') => {
                out.push(ch);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            (None, '\'' | '"') => {
                quote = Some(ch);
                out.push(ch);
            }
            (Some(open), _) if ch == open => {
                quote = None;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// A single dash, a non-dash second character, and at least one more.
fn is_short_option_cluster(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some('-')
        && matches!(chars.next(), Some(second) if second != '-')
        && chars.next().is_some()
}

fn expand_short_option_cluster(word: &str, tokens: &mut Vec<Token>) {
    let rest_start = word
        .char_indices()
        .nth(2)
        .map_or(word.len(), |(idx, _)| idx);
    tokens.push(Token::new(&word[..rest_start]));

    let rest = &word[rest_start..];
    for (offset, ch) in rest.char_indices() {
        if ch.is_ascii_digit() {
            // Digits glued to the cluster are the last option's argument.
            tokens.push(Token::new(&rest[offset..]));
            break;
        }
        tokens.push(Token::new(format!("-{ch}")));
    }
}
