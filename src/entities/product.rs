use crate::derive::{effective_value, Record};
use crate::source::AssignId;
use crate::utils::datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    pub category: String,
    /// List price
    pub price: f64,
    /// Percentage discount applied to `price`
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "datetime::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Price after discount
    pub fn effective_price(&self) -> f64 {
        effective_value(self.price, self.discount)
    }

    pub fn is_on_sale(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0)
    }

    /// Unknown stock counts as available
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |s| s > 0)
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.brand.as_deref(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn sort_value(&self) -> Option<f64> {
        Some(self.effective_price())
    }

    fn sort_date(&self) -> Option<i64> {
        self.created_at.as_ref().map(datetime::timestamp_millis)
    }

    fn created_at(&self) -> Option<i64> {
        self.created_at.as_ref().map(datetime::timestamp_millis)
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl AssignId for Product {
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Distinct product categories in first-seen order, for the filter selector
pub fn categories(products: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(&product.category);
        }
    }
    seen
}
