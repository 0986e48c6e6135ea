//! Read-only, position-addressed token sequence.
//!
//! Positions are plain indices. Navigation from a position to its
//! predecessor or successor is O(1), which is all the classifier's
//! lookahead needs.

use crate::error::{Result, SyntaxError};
use crate::token::Token;

/// Ordered tokens of one command, anchored on the utility at position 0.
///
/// # Examples
///
/// ```
/// use argmap_core::{ArgumentSequence, split};
///
/// let sequence = ArgumentSequence::new(split("curl -s host").unwrap()).unwrap();
/// assert_eq!(sequence.head(), "curl");
/// assert_eq!(sequence.next(0).map(|(_, t)| t.as_str()), Some("-s"));
/// assert!(sequence.prev(0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSequence {
    tokens: Vec<Token>,
}

impl ArgumentSequence {
    /// Builds a sequence from lexer output.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::EmptyCommand`] when `tokens` is empty, since
    /// there is no utility to anchor on.
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(SyntaxError::EmptyCommand);
        }
        Ok(Self { tokens })
    }

    /// The utility token.
    pub fn head(&self) -> &Token {
        &self.tokens[0]
    }

    pub fn get(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos)
    }

    /// The token before `pos`, with its position.
    pub fn prev(&self, pos: usize) -> Option<(usize, &Token)> {
        let prev = pos.checked_sub(1)?;
        self.tokens.get(prev).map(|token| (prev, token))
    }

    /// The token after `pos`, with its position.
    pub fn next(&self, pos: usize) -> Option<(usize, &Token)> {
        let next = pos + 1;
        self.tokens.get(next).map(|token| (next, token))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a ArgumentSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
