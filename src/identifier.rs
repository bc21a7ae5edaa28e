//! Content identifiers.
//!
//! Every block, item, entity and feature carries an identifier of the form
//! `<namespace>:<name>`. The name segment becomes the output file's base name,
//! so this is the one piece of string shape the crate checks.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A parsed `<namespace>:<name>` identifier.
///
/// Records store identifiers as plain strings so any value can be authored;
/// parsing happens when a file name has to be derived from one.
///
/// # Examples
///
/// ```
/// use bedrock_addon::Identifier;
///
/// let id = Identifier::parse("mymod:custom_stone").unwrap();
/// assert_eq!(id.namespace(), "mymod");
/// assert_eq!(id.name(), "custom_stone");
///
/// assert!(Identifier::parse("brokenid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    name: String,
}

impl Identifier {
    /// Parses an identifier, requiring exactly one `:` and two non-empty segments.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedIdentifier {
            identifier: raw.to_string(),
        };

        let mut parts = raw.split(':');
        let (Some(namespace), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        if namespace.trim().is_empty() || name.trim().is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// Creates an identifier from its two segments.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = format!("{}:{}", namespace.into(), name.into());
        Self::parse(&raw)
    }

    /// Returns the namespace segment (before the `:`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the name segment (after the `:`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the identifier belongs to the vanilla namespace.
    #[must_use]
    pub fn is_vanilla(&self) -> bool {
        self.namespace == "minecraft"
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

impl FromStr for Identifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_namespace_and_name() {
        let id = Identifier::parse("mymod:custom_stone").unwrap();
        assert_eq!(id.namespace(), "mymod");
        assert_eq!(id.name(), "custom_stone");
        assert!(!id.is_vanilla());
        assert_eq!(id.to_string(), "mymod:custom_stone");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = Identifier::parse("brokenid").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedIdentifier { ref identifier } if identifier == "brokenid"));
    }

    #[test]
    fn parse_rejects_extra_separator() {
        assert!(Identifier::parse("a:b:c").is_err());
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert!(Identifier::parse(":stone").is_err());
        assert!(Identifier::parse("mymod:").is_err());
        assert!(Identifier::parse("  :stone").is_err());
        assert!(Identifier::parse("").is_err());
    }

    #[test]
    fn name_may_contain_slashes() {
        let id: Identifier = "mymod:ores/copper".parse().unwrap();
        assert_eq!(id.name(), "ores/copper");
    }

    #[test]
    fn new_joins_segments() {
        let id = Identifier::new("minecraft", "stone").unwrap();
        assert!(id.is_vanilla());
        assert_eq!(String::from(id), "minecraft:stone");
        assert!(Identifier::new("bad:ns", "stone").is_err());
    }
}
