//! Sort key selection and comparators.
//!
//! Comparators never break ties; callers sort with the stable `slice::sort_by`
//! so records with equal keys keep their input order.

use super::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The sort options offered by list views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Input order
    #[default]
    None,
    ValueDesc,
    ValueAsc,
    DateDesc,
    DateAsc,
    /// Earliest date first, undated last
    ClosingSoon,
    /// Featured first, then by rating (highest first)
    Featured,
    /// Most recently created first
    Newest,
    PriceLow,
    PriceHigh,
    NameAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 11] = [
        SortKey::None,
        SortKey::ValueDesc,
        SortKey::ValueAsc,
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::ClosingSoon,
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::NameAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::ValueDesc => "value-desc",
            SortKey::ValueAsc => "value-asc",
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::ClosingSoon => "closing-soon",
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::NameAsc => "name-asc",
        }
    }

    /// Comparator for this key, meant for a stable sort
    pub fn comparator<R: Record>(self) -> fn(&R, &R) -> Ordering {
        match self {
            SortKey::None => |_, _| Ordering::Equal,
            SortKey::ValueDesc | SortKey::PriceHigh => |a, b| value_of(b).total_cmp(&value_of(a)),
            SortKey::ValueAsc | SortKey::PriceLow => |a, b| value_of(a).total_cmp(&value_of(b)),
            SortKey::DateDesc => |a, b| missing_last(a.sort_date(), b.sort_date(), false),
            SortKey::DateAsc | SortKey::ClosingSoon => |a, b| missing_last(a.sort_date(), b.sort_date(), true),
            SortKey::Featured => compare_featured::<R>,
            SortKey::Newest => |a, b| missing_last(a.created_at(), b.created_at(), false),
            SortKey::NameAsc => |a, b| a.label().to_lowercase().cmp(&b.label().to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown sort key '{}'", s))
    }
}

fn value_of<R: Record>(record: &R) -> f64 {
    record.sort_value().unwrap_or(0.0)
}

/// Compare optional timestamps, placing missing values after present ones
/// regardless of direction.
fn missing_last(a: Option<i64>, b: Option<i64>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if ascending => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_featured<R: Record>(a: &R, b: &R) -> Ordering {
    b.is_featured()
        .cmp(&a.is_featured())
        .then_with(|| b.rating().unwrap_or(0.0).total_cmp(&a.rating().unwrap_or(0.0)))
}
