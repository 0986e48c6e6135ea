//! Conversion of shell-style command strings into argument maps.
//!
//! A command such as `curl -sSP8080 www.github.com --retry 5` is turned into
//! a [`ResultMap`] holding the utility, the operands, and one argument group
//! per option occurrence. The pipeline has three stages:
//!
//! - [`split`] — quote-aware word splitting, syntax checks, and expansion of
//!   bundled short options (`-sSP8080` → `-s -S -P 8080`).
//! - [`ArgumentSequence`] — the read-only token sequence the classifier
//!   walks.
//! - [`parse`] / [`classify`] — the left-to-right walk that assigns each
//!   token a role, bounded by per-option [`LimitOverrides`].
//!
//! [`parse_command`] runs all three. Maps can be rendered with
//! [`format_result`].
//!
//! # Example
//!
//! ```
//! use argmap_core::*;
//!
//! let limits = LimitOverrides::new().with_limit("-s", Limit::Bounded(2)).unwrap();
//! let map = parse_command("sips -s format jpeg infile --out outfile", &limits).unwrap();
//!
//! assert_eq!(map.simple_utility(), "sips");
//! assert_eq!(map.get("-s").unwrap()[0], ["format", "jpeg"]);
//! assert_eq!(map.simple_operands(), ["infile"]);
//! assert_eq!(map.simple_option_args(&["--out"]), ["outfile"]);
//!
//! assert!(matches!(
//!     parse_command("curl --ftp-port8084", &limits),
//!     Err(SyntaxError::GluedLongOptionArgument(_))
//! ));
//! ```

mod classifier;
mod error;
mod lexer;
mod limits;
mod output;
mod result;
mod sequence;
mod token;

pub use classifier::{ClassifiedToken, TokenKind, classify, parse};
pub use error::{LimitError, OutputError, Result, ResultMapError, SyntaxError};
pub use lexer::{check_syntax, split};
pub use limits::{DEFAULT_LIMIT, Limit, LimitOverrides};
pub use output::{OutputFormat, format_result};
pub use result::{ArgumentGroup, OPERANDS_KEY, ResultMap, UTILITY_KEY};
pub use sequence::ArgumentSequence;
pub use token::Token;

/// Parses a command string into its argument map.
///
/// Options without an entry in `limits` consume at most one
/// option-argument per occurrence.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when the command has unbalanced quoting, contains
/// one of the rejected adjacency patterns (`-s-S`, `--ftp-port8084`), or has
/// no words at all.
pub fn parse_command(command: &str, limits: &LimitOverrides) -> Result<ResultMap> {
    let tokens = split(command)?;
    let sequence = ArgumentSequence::new(tokens)?;
    Ok(parse(&sequence, limits))
}
