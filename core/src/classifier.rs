//! Classification of a token sequence into utility, options,
//! option-arguments, and operands.
//!
//! The walk is strictly left to right. The first token is the utility. A
//! token starting with `-` is an option and opens a new occurrence; it then
//! claims the following non-option tokens as option-arguments until its
//! [`Limit`](crate::Limit) runs out or another option appears. Anything else
//! is an operand. The token that stops a lookahead is classified on its own
//! in the next step of the walk.

use tracing::{debug, trace};

use crate::limits::LimitOverrides;
use crate::result::ResultMap;
use crate::sequence::ArgumentSequence;
use crate::token::Token;

/// The role a token plays in the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// The first token.
    Utility,
    /// A token starting with `-`.
    Option,
    /// A value claimed by the option at position `option`.
    OptionArgument { option: usize },
    /// Any other token.
    Operand,
}

/// A token together with its position and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    pub position: usize,
    pub token: &'a Token,
    pub kind: TokenKind,
}

/// Classifies every token of `sequence`, in order.
///
/// # Examples
///
/// ```
/// use argmap_core::{ArgumentSequence, LimitOverrides, TokenKind, classify, split};
///
/// let sequence = ArgumentSequence::new(split("curl -P 8080 host").unwrap()).unwrap();
/// let kinds: Vec<TokenKind> = classify(&sequence, &LimitOverrides::default())
///     .into_iter()
///     .map(|c| c.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Utility,
///         TokenKind::Option,
///         TokenKind::OptionArgument { option: 1 },
///         TokenKind::Operand,
///     ]
/// );
/// ```
pub fn classify<'a>(
    sequence: &'a ArgumentSequence,
    limits: &LimitOverrides,
) -> Vec<ClassifiedToken<'a>> {
    let mut classified = Vec::with_capacity(sequence.len());
    classified.push(ClassifiedToken {
        position: 0,
        token: sequence.head(),
        kind: TokenKind::Utility,
    });

    let mut current = sequence.next(0);
    while let Some((pos, token)) = current {
        if !token.is_option() {
            classified.push(ClassifiedToken {
                position: pos,
                token,
                kind: TokenKind::Operand,
            });
            current = sequence.next(pos);
            continue;
        }

        classified.push(ClassifiedToken {
            position: pos,
            token,
            kind: TokenKind::Option,
        });

        let mut budget = limits.limit_for(token.as_str());
        trace!(option = %token, limit = ?budget, "Consuming option-arguments");

        let mut lookahead = sequence.next(pos);
        while let Some((arg_pos, arg)) = lookahead {
            if arg.is_option() || budget.is_exhausted() {
                break;
            }
            classified.push(ClassifiedToken {
                position: arg_pos,
                token: arg,
                kind: TokenKind::OptionArgument { option: pos },
            });
            budget = budget.consume_one();
            lookahead = sequence.next(arg_pos);
        }
        current = lookahead;
    }

    classified
}

/// Builds the argument map for `sequence`.
///
/// Never fails: every well-formed token has a place in the map, and unknown
/// options simply use the default limit.
pub fn parse(sequence: &ArgumentSequence, limits: &LimitOverrides) -> ResultMap {
    let mut map = ResultMap::with_utility(sequence.head().as_str());
    let mut current_option: Option<&str> = None;

    for ClassifiedToken { token, kind, .. } in classify(sequence, limits) {
        match kind {
            TokenKind::Utility => {}
            TokenKind::Option => {
                map.open_occurrence(token.as_str());
                current_option = Some(token.as_str());
            }
            TokenKind::OptionArgument { .. } => {
                if let Some(option) = current_option {
                    map.push_option_argument(option, token.as_str());
                }
            }
            TokenKind::Operand => map.push_operand(token.as_str()),
        }
    }

    debug!(
        utility = %sequence.head(),
        tokens = sequence.len(),
        keys = map.len(),
        "Classified command"
    );
    map
}
