//! Filter expressions used by entity sensors, events and feature rules.

use serde::{Deserialize, Serialize};

/// A single test, e.g. `{"test": "has_biome_tag", "value": "overworld"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterTest {
    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,
}

impl FilterTest {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            subject: None,
            operator: None,
            domain: None,
            value: None,
        }
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<FilterValue>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A filter tree: a group of nested filters or one test.
///
/// Groups are listed first so `{"all_of": [...]}` is never read as a test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    AllOf { all_of: Vec<Filter> },
    AnyOf { any_of: Vec<Filter> },
    NoneOf { none_of: Vec<Filter> },
    Test(FilterTest),
}

impl Filter {
    pub fn all_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::AllOf {
            all_of: filters.into_iter().collect(),
        }
    }

    pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::AnyOf {
            any_of: filters.into_iter().collect(),
        }
    }

    pub fn none_of(filters: impl IntoIterator<Item = Filter>) -> Self {
        Self::NoneOf {
            none_of: filters.into_iter().collect(),
        }
    }

    /// Number of leaf tests in the tree.
    #[must_use]
    pub fn test_count(&self) -> usize {
        match self {
            Self::AllOf { all_of: f } | Self::AnyOf { any_of: f } | Self::NoneOf { none_of: f } => {
                f.iter().map(Self::test_count).sum()
            }
            Self::Test(_) => 1,
        }
    }
}

impl From<FilterTest> for Filter {
    fn from(test: FilterTest) -> Self {
        Self::Test(test)
    }
}
