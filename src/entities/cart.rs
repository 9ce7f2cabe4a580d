//! Shopping cart lines and totals.

use super::product::Product;
use crate::derive::effective_value;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    /// Percentage discount applied to `unit_price`
    #[serde(default)]
    pub discount: Option<f64>,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            discount: product.discount,
            quantity,
        }
    }

    pub fn list_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn line_total(&self) -> f64 {
        effective_value(self.unit_price, self.discount) * f64::from(self.quantity)
    }
}

/// Totals shown in the cart drawer and checkout summary
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u32,
    /// Sum at list prices
    pub subtotal: f64,
    /// Sum of discounts
    pub savings: f64,
    /// Sum at effective prices
    pub total: f64,
}

impl CartSummary {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        let item_count = lines.iter().fold(0u32, |count, l| count.saturating_add(l.quantity));
        let subtotal: f64 = lines.iter().map(CartLine::list_total).sum();
        let total: f64 = lines.iter().map(CartLine::line_total).sum();

        Self {
            item_count,
            subtotal: round_cents(subtotal),
            savings: round_cents(subtotal - total),
            total: round_cents(total),
        }
    }
}

/// Cart contents, one line per product
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add `quantity` of a product, merging with an existing line
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Set a line's quantity; zero removes the line
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_lines(&self.lines)
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
