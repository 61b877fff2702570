//! Presentation-ready projections of view state.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use stockroom_core::ProductId;

use crate::product::Product;

/// Format an amount as dollars with two decimals, e.g. `$7.50`.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub price: String,
    pub province: String,
    pub ward: String,
    pub line_total: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            quantity: product.quantity(),
            price: format_money(product.price()),
            province: product.province().to_string(),
            ward: product.ward().to_string(),
            line_total: format_money(product.line_value()),
        }
    }
}

/// Total inventory value card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_value: Decimal,
}

impl InventorySummary {
    pub fn total_label(&self) -> String {
        format_money(self.total_value)
    }

    /// "1 product in inventory" / "3 products in inventory".
    pub fn count_label(&self) -> String {
        let noun = if self.product_count == 1 { "product" } else { "products" };
        format!("{} {noun} in inventory", self.product_count)
    }
}

/// Why the product table has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing has been added yet.
    NoProducts,
    /// Products exist but none match the search term.
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoProducts => "No products added yet. Add your first product above!",
            EmptyState::NoMatches => "No products match your search.",
        }
    }
}
