//! Categorical (status, stage, category, folder) filter.

use super::Record;
use crate::constants::CATEGORY_ALL;

/// Exact-match filter on a record's single categorical field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Keep only records whose category equals this value (case-sensitive)
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; `""` and `"all"` mean no filter
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == CATEGORY_ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::All => true,
            Self::Only(value) => record.category() == Some(value.as_str()),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
