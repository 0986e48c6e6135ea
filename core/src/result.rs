//! The argument map produced by classification.
//!
//! A [`ResultMap`] keys argument groups by `"utility"`, `"operands"`, or an
//! option spelling, in first-occurrence order. Each key holds one
//! [`ArgumentGroup`] per occurrence, so repeated options are never merged.
//!
//! Besides raw access the map offers flattened views: the plain utility
//! name, operand strings, option names, and option-arguments.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ResultMapError;

/// Key holding the single utility group.
pub const UTILITY_KEY: &str = "utility";

/// Key holding one singleton group per operand.
pub const OPERANDS_KEY: &str = "operands";

/// The arguments collected for one occurrence of a key.
///
/// Utility and operand groups always hold exactly one value. Option groups
/// hold zero or more option-arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentGroup(Vec<String>);

impl ArgumentGroup {
    /// An empty group, as opened for a fresh option occurrence.
    pub fn new() -> Self {
        Self::default()
    }

    /// A group holding exactly one value.
    pub fn single(value: impl Into<String>) -> Self {
        Self(vec![value.into()])
    }

    pub(crate) fn push(&mut self, value: impl Into<String>) {
        self.0.push(value.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ArgumentGroup {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> PartialEq<[&str; N]> for ArgumentGroup {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Tuple-style rendering: `()`, `('a',)`, `('a', 'b')`.
impl fmt::Display for ArgumentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, value)?;
        }
        if self.0.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

pub(crate) fn write_quoted(f: &mut impl fmt::Write, value: &str) -> fmt::Result {
    f.write_char('\'')?;
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\'' => f.write_str("\\'")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('\'')
}

/// Insertion-ordered map from key to the groups of each occurrence.
///
/// # Examples
///
/// ```
/// use argmap_core::{LimitOverrides, parse_command};
///
/// let map = parse_command(
///     "curl -s -SP8080 www.github.com www.pypi.org --basic --retry 5",
///     &LimitOverrides::default(),
/// )
/// .unwrap();
///
/// assert_eq!(map.simple_utility(), "curl");
/// assert_eq!(map.simple_operands(), ["www.github.com", "www.pypi.org"]);
/// assert_eq!(map.simple_options(), ["-s", "-S", "-P", "--basic", "--retry"]);
/// assert_eq!(map.simple_option_args(&["-P", "--retry"]), ["8080", "5"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndexMap<String, Vec<ArgumentGroup>>")]
pub struct ResultMap {
    entries: IndexMap<String, Vec<ArgumentGroup>>,
}

impl ResultMap {
    /// Starts a map anchored on `utility`.
    pub(crate) fn with_utility(utility: &str) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(UTILITY_KEY.to_string(), vec![ArgumentGroup::single(utility)]);
        Self { entries }
    }

    /// Records an operand as a new singleton group.
    pub(crate) fn push_operand(&mut self, operand: &str) {
        self.entries
            .entry(OPERANDS_KEY.to_string())
            .or_default()
            .push(ArgumentGroup::single(operand));
    }

    /// Opens a fresh, empty group for a new occurrence of `option`.
    pub(crate) fn open_occurrence(&mut self, option: &str) {
        self.entries
            .entry(option.to_string())
            .or_default()
            .push(ArgumentGroup::new());
    }

    /// Appends an option-argument to the latest occurrence of `option`.
    pub(crate) fn push_option_argument(&mut self, option: &str, argument: &str) {
        let groups = self.entries.entry(option.to_string()).or_default();
        match groups.last_mut() {
            Some(group) => group.push(argument),
            None => groups.push(ArgumentGroup::single(argument)),
        }
    }

    /// The utility group list; always a single singleton group.
    pub fn utility(&self) -> &[ArgumentGroup] {
        self.groups(UTILITY_KEY)
    }

    /// The utility name.
    pub fn simple_utility(&self) -> &str {
        &self.utility()[0].as_slice()[0]
    }

    /// Operand groups, or an empty slice when there are none.
    pub fn operands(&self) -> &[ArgumentGroup] {
        self.groups(OPERANDS_KEY)
    }

    /// Operands as plain strings, in command order.
    pub fn simple_operands(&self) -> Vec<&str> {
        flatten(self.operands())
    }

    /// Option keys present in the map, in first-occurrence order.
    pub fn simple_options(&self) -> Vec<&str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|key| key.starts_with('-'))
            .collect()
    }

    /// Every option-argument of every option, in key order.
    pub fn all_simple_option_args(&self) -> Vec<&str> {
        self.simple_option_args(&self.simple_options())
    }

    /// Option-arguments of the given options, flattened. Options that are
    /// absent contribute nothing.
    pub fn simple_option_args(&self, options: &[&str]) -> Vec<&str> {
        options
            .iter()
            .flat_map(|option| self.groups(option))
            .flat_map(ArgumentGroup::iter)
            .map(String::as_str)
            .collect()
    }

    /// The groups of every given key, concatenated. Absent keys contribute
    /// nothing.
    pub fn vals(&self, keys: &[&str]) -> Vec<&ArgumentGroup> {
        keys.iter().flat_map(|key| self.groups(key)).collect()
    }

    /// The groups for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&[ArgumentGroup]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ArgumentGroup])> {
        self.entries
            .iter()
            .map(|(key, groups)| (key.as_str(), groups.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a parsed map, which holds at least the utility.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn groups(&self, key: &str) -> &[ArgumentGroup] {
        self.get(key).unwrap_or(&[])
    }
}

impl Serialize for ResultMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl TryFrom<IndexMap<String, Vec<ArgumentGroup>>> for ResultMap {
    type Error = ResultMapError;

    fn try_from(entries: IndexMap<String, Vec<ArgumentGroup>>) -> Result<Self, Self::Error> {
        match entries.get_index(0) {
            Some((key, groups)) if key == UTILITY_KEY => {
                if groups.len() != 1 || groups[0].len() != 1 {
                    return Err(ResultMapError::InvalidUtility);
                }
            }
            _ => return Err(ResultMapError::MissingUtility),
        }

        for (key, groups) in entries.iter().skip(1) {
            if key == OPERANDS_KEY {
                if groups.iter().any(|group| group.len() != 1) {
                    return Err(ResultMapError::InvalidOperand);
                }
            } else if !key.starts_with('-') {
                return Err(ResultMapError::InvalidKey(key.clone()));
            }
        }

        Ok(Self { entries })
    }
}

fn flatten(groups: &[ArgumentGroup]) -> Vec<&str> {
    groups
        .iter()
        .flat_map(ArgumentGroup::iter)
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultMap {
        let mut map = ResultMap::with_utility("curl");
        map.open_occurrence("--data");
        map.push_option_argument("--data", "num=5");
        map.push_operand("www.github.com");
        map.open_occurrence("-s");
        map.open_occurrence("--data");
        map.push_option_argument("--data", "id=6");
        map.push_operand("www.pypi.org");
        map
    }

    #[test]
    fn test_keys_follow_first_occurrence() {
        let map = sample();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["utility", "--data", "operands", "-s"]);
    }

    #[test]
    fn test_repeated_option_keeps_one_group_per_occurrence() {
        let map = sample();
        let data = map.get("--data").expect("--data present");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0], ["num=5"]);
        assert_eq!(data[1], ["id=6"]);
        assert!(map.get("-s").expect("-s present")[0].is_empty());
    }

    #[test]
    fn test_flattened_views() {
        let map = sample();
        assert_eq!(map.simple_utility(), "curl");
        assert_eq!(map.simple_operands(), ["www.github.com", "www.pypi.org"]);
        assert_eq!(map.simple_options(), ["--data", "-s"]);
        assert_eq!(map.all_simple_option_args(), ["num=5", "id=6"]);
    }

    #[test]
    fn test_lookups_of_absent_keys_are_empty() {
        let map = ResultMap::with_utility("ls");
        assert!(map.operands().is_empty());
        assert!(map.simple_operands().is_empty());
        assert!(map.vals(&["-x", "--nope"]).is_empty());
        assert!(map.simple_option_args(&["-x"]).is_empty());
        assert!(!map.contains_key(OPERANDS_KEY));
    }

    #[test]
    fn test_vals_concatenates_groups_in_key_order() {
        let map = sample();
        let groups = map.vals(&["-s", "--data", "--missing"]);
        assert_eq!(groups.len(), 3);
        assert!(groups[0].is_empty());
        assert_eq!(*groups[1], ["num=5"]);
        assert_eq!(*groups[2], ["id=6"]);
    }

    #[test]
    fn test_group_display_uses_tuple_notation() {
        assert_eq!(ArgumentGroup::new().to_string(), "()");
        assert_eq!(ArgumentGroup::single("8080").to_string(), "('8080',)");
        let pair: ArgumentGroup = ["format", "jpeg"].into_iter().collect();
        assert_eq!(pair.to_string(), "('format', 'jpeg')");
        assert_eq!(ArgumentGroup::single("it's").to_string(), r"('it\'s',)");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let map = sample();
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(
            json,
            r#"{"utility":[["curl"]],"--data":[["num=5"],["id=6"]],"operands":[["www.github.com"],["www.pypi.org"]],"-s":[[]]}"#
        );
        let back: ResultMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, map);
    }

    #[test]
    fn test_deserialize_rejects_maps_breaking_invariants() {
        let cases = [
            (r#"{"-s":[[]]}"#, "must start with"),
            (r#"{"-s":[[]],"utility":[["curl"]]}"#, "must start with"),
            (r#"{"utility":[["curl"],["wget"]]}"#, "\"utility\" must hold"),
            (r#"{"utility":[[]]}"#, "\"utility\" must hold"),
            (r#"{"utility":[["curl"]],"operands":[["a","b"]]}"#, "\"operands\" group"),
            (r#"{"utility":[["curl"]],"url":[["x"]]}"#, "is not an option"),
        ];
        for (json, message) in cases {
            let err = serde_json::from_str::<ResultMap>(json).expect_err(json);
            assert!(err.to_string().contains(message), "{json}: {err}");
        }
    }
}
