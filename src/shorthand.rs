//! Short-hand-or-full-object unions.
//!
//! Many content fields accept either a compact scalar (`true`, a texture
//! name, a single trigger) or a full configuration object. Each such field is
//! typed as an explicit two-case enum so both spellings survive a
//! parse/serialize cycle unchanged.

use serde::{Deserialize, Serialize};

/// Either a short-hand scalar `S` or a full object `F`.
///
/// # Examples
///
/// ```
/// use bedrock_addon::Shorthand;
///
/// let short: Shorthand<bool, serde_json::Value> = serde_json::from_str("true").unwrap();
/// assert!(short.is_short());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shorthand<S, F> {
    Short(S),
    Full(F),
}

/// A component that is either switched on/off or configured in detail.
pub type Toggle<T> = Shorthand<bool, T>;

/// A reference given either by name or by a detailed object.
pub type Named<T> = Shorthand<String, T>;

impl<S, F> Shorthand<S, F> {
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short(_))
    }

    pub const fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    pub const fn as_short(&self) -> Option<&S> {
        match self {
            Self::Short(s) => Some(s),
            Self::Full(_) => None,
        }
    }

    pub const fn as_full(&self) -> Option<&F> {
        match self {
            Self::Short(_) => None,
            Self::Full(f) => Some(f),
        }
    }

    /// Folds both cases into one value.
    pub fn fold<T>(self, short: impl FnOnce(S) -> T, full: impl FnOnce(F) -> T) -> T {
        match self {
            Self::Short(s) => short(s),
            Self::Full(f) => full(f),
        }
    }
}

impl<F> Shorthand<bool, F> {
    /// Returns false only for the explicit `false` short-hand.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Short(enabled) => *enabled,
            Self::Full(_) => true,
        }
    }
}

impl<F> From<bool> for Shorthand<bool, F> {
    fn from(v: bool) -> Self {
        Self::Short(v)
    }
}

impl<F> From<&str> for Shorthand<String, F> {
    fn from(v: &str) -> Self {
        Self::Short(v.to_string())
    }
}

impl<F> From<String> for Shorthand<String, F> {
    fn from(v: String) -> Self {
        Self::Short(v)
    }
}

/// A single value or a list of values.
///
/// The list case is tried first so a struct payload is never mistaken for a
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Many(items) => items.iter(),
            Self::One(item) => std::slice::from_ref(item).iter(),
        }
    }

    /// Flattens both cases into a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(v: Vec<T>) -> Self {
        Self::Many(v)
    }
}
