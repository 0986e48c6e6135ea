//! Per-option limits on how many option-arguments one occurrence consumes.
//!
//! Options without an override consume at most [`DEFAULT_LIMIT`] argument.
//! Overrides can be built in code or loaded from JSON/YAML documents shaped
//! like:
//!
//! ```yaml
//! "-s": 2          # at most two option-arguments
//! "--header": null # unbounded: consume until the next option
//! "--verbose": 0   # never consumes
//! ```
//!
//! Every override is validated when it is accepted, so a negative limit or a
//! key that cannot name an option is rejected before any parsing happens.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LimitError;

/// Limit applied to options with no override.
pub const DEFAULT_LIMIT: Limit = Limit::Bounded(1);

/// Maximum number of option-arguments for one occurrence of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Consume at most this many following non-option tokens.
    Bounded(usize),
    /// Consume every following non-option token.
    Unbounded,
}

impl Limit {
    /// Returns `true` once no further option-argument may be consumed.
    pub fn is_exhausted(self) -> bool {
        self == Limit::Bounded(0)
    }

    /// The remaining budget after consuming one option-argument.
    pub fn consume_one(self) -> Self {
        match self {
            Limit::Bounded(n) => Limit::Bounded(n.saturating_sub(1)),
            Limit::Unbounded => Limit::Unbounded,
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        DEFAULT_LIMIT
    }
}

/// Wire form of the overrides: `null` is unbounded, numbers are checked on
/// conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct RawLimits(IndexMap<String, Option<i64>>);

/// Limit overrides keyed by option spelling (`-s`, `--url`).
///
/// # Examples
///
/// ```
/// use argmap_core::{Limit, LimitOverrides};
///
/// let limits = LimitOverrides::from_json(r#"{"-s": 2, "--header": null}"#).unwrap();
/// assert_eq!(limits.limit_for("-s"), Limit::Bounded(2));
/// assert_eq!(limits.limit_for("--header"), Limit::Unbounded);
/// assert_eq!(limits.limit_for("--url"), Limit::Bounded(1));
///
/// assert!(LimitOverrides::from_json(r#"{"-s": -1}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits", into = "RawLimits")]
pub struct LimitOverrides {
    limits: IndexMap<String, Limit>,
}

impl LimitOverrides {
    /// Creates an empty set of overrides (every option uses [`DEFAULT_LIMIT`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limit for `option`, returning the previous override.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::InvalidOption`] if `option` does not start
    /// with `-`.
    pub fn insert(
        &mut self,
        option: impl Into<String>,
        limit: Limit,
    ) -> Result<Option<Limit>, LimitError> {
        let option = option.into();
        if !option.starts_with('-') {
            return Err(LimitError::InvalidOption(option));
        }
        Ok(self.limits.insert(option, limit))
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_limit(mut self, option: &str, limit: Limit) -> Result<Self, LimitError> {
        self.insert(option, limit)?;
        Ok(self)
    }

    /// Sets a limit from an integer as it appears in configuration, where
    /// `None` means unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::Negative`] for values below zero and
    /// [`LimitError::InvalidOption`] for keys not starting with `-`.
    pub fn insert_raw(
        &mut self,
        option: impl Into<String>,
        value: Option<i64>,
    ) -> Result<Option<Limit>, LimitError> {
        let option = option.into();
        let limit = match value {
            None => Limit::Unbounded,
            Some(value) => match usize::try_from(value) {
                Ok(n) => Limit::Bounded(n),
                Err(_) => return Err(LimitError::Negative { option, value }),
            },
        };
        self.insert(option, limit)
    }

    /// The effective limit for `option`, falling back to [`DEFAULT_LIMIT`].
    pub fn limit_for(&self, option: &str) -> Limit {
        self.get(option).unwrap_or(DEFAULT_LIMIT)
    }

    /// The configured override for `option`, if any.
    pub fn get(&self, option: &str) -> Option<Limit> {
        self.limits.get(option).copied()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Limit)> {
        self.limits.iter().map(|(option, limit)| (option.as_str(), *limit))
    }

    /// Applies every override in `other` on top of `self`.
    pub fn extend(&mut self, other: LimitOverrides) {
        self.limits.extend(other.limits);
    }

    /// Parses overrides from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::Json`] for malformed JSON and a validation
    /// error for invalid entries.
    pub fn from_json(input: &str) -> Result<Self, LimitError> {
        let raw: RawLimits = serde_json::from_str(input)?;
        Self::try_from(raw)
    }

    /// Parses overrides from a YAML mapping. Since YAML is a superset of
    /// JSON, JSON objects are accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::Yaml`] for malformed YAML and a validation
    /// error for invalid entries.
    pub fn from_yaml(input: &str) -> Result<Self, LimitError> {
        let raw: RawLimits = serde_yaml::from_str(input)?;
        Self::try_from(raw)
    }

    /// Loads overrides from a JSON or YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::Io`] if the file cannot be read, or a parse or
    /// validation error for its contents.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LimitError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let raw: RawLimits = serde_yaml::from_reader(reader)?;
        Self::try_from(raw)
    }

    /// Saves the overrides as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError::Io`] if the file cannot be written, or
    /// [`LimitError::Yaml`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LimitError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

impl TryFrom<RawLimits> for LimitOverrides {
    type Error = LimitError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        let mut overrides = LimitOverrides::new();
        for (option, value) in raw.0 {
            overrides.insert_raw(option, value)?;
        }
        Ok(overrides)
    }
}

impl From<LimitOverrides> for RawLimits {
    fn from(overrides: LimitOverrides) -> Self {
        RawLimits(
            overrides
                .limits
                .into_iter()
                .map(|(option, limit)| {
                    let value = match limit {
                        Limit::Bounded(n) => Some(i64::try_from(n).unwrap_or(i64::MAX)),
                        Limit::Unbounded => None,
                    };
                    (option, value)
                })
                .collect(),
        )
    }
}
