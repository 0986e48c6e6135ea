//! Error types for command parsing, limit configuration, and rendering.
//!
//! Parsing has a single failure family, [`SyntaxError`], raised before any
//! classification happens. Limit configuration is validated eagerly when it
//! is built or loaded, so a bad override never reaches the classifier.

use thiserror::Error;

/// Errors raised while turning a command string into tokens.
///
/// A syntax error aborts the whole parse; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A short option immediately followed by another explicit dash
    /// (e.g. `-s-S` or `-s--basic`).
    #[error("argument \"{0}\" is invalid syntax: options must be separated by whitespace")]
    GluedShortOptions(String),
    /// A long option glued to a numeric option-argument
    /// (e.g. `--ftp-port8084`).
    #[error(
        "argument \"{0}\" is invalid syntax: long option and option-argument must be separated by whitespace"
    )]
    GluedLongOptionArgument(String),
    /// An unterminated quote or trailing escape in the command.
    #[error("command \"{0}\" has unbalanced quoting")]
    UnbalancedQuotes(String),
    /// The command contains no words, so there is no utility.
    #[error("command is empty")]
    EmptyCommand,
}

/// Errors raised while building or loading limit overrides.
#[derive(Debug, Error)]
pub enum LimitError {
    /// A configured limit is below zero.
    #[error("limit for option {option} must not be negative (got {value})")]
    Negative { option: String, value: i64 },

    /// An override key that cannot name an option.
    #[error("limit override key {0:?} is not an option (must start with '-')")]
    InvalidOption(String),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised when deserialized data cannot be an argument map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultMapError {
    /// The first key is not `utility`.
    #[error("argument map must start with the \"utility\" key")]
    MissingUtility,
    /// The utility entry is not a single one-value group.
    #[error("\"utility\" must hold exactly one group with exactly one value")]
    InvalidUtility,
    /// An operand group does not hold exactly one value.
    #[error("every \"operands\" group must hold exactly one value")]
    InvalidOperand,
    /// A key that is neither `utility`, `operands`, nor an option.
    #[error("argument map key {0:?} is not an option")]
    InvalidKey(String),
}

/// Errors raised while rendering a result map.
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON serialization failure.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for parse results with [`SyntaxError`].
pub type Result<T> = std::result::Result<T, SyntaxError>;
