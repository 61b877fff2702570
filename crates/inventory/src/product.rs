use core::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Province/ward display names captured when a product is created.
///
/// This is a snapshot: it is never re-resolved against reference data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub province: String,
    pub ward: String,
}

impl ValueObject for Location {}

impl Location {
    pub fn new(province: impl Into<String>, ward: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            ward: ward.into(),
        }
    }
}

/// A submitted product row. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u64,
    price: Decimal,
    #[serde(flatten)]
    location: Location,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
        price: Decimal,
        location: Location,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
            location,
            created_at,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn province(&self) -> &str {
        &self.location.province
    }

    pub fn ward(&self) -> &str {
        &self.location.ward
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// quantity × price. Saturates instead of overflowing.
    pub fn line_value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Coerce form text into a non-negative whole quantity.
pub fn parse_quantity(raw: &str) -> DomainResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DomainError::invalid_number("quantity", raw))
}

/// Coerce form text into a non-negative decimal price.
pub fn parse_price(raw: &str) -> DomainResult<Decimal> {
    let price =
        Decimal::from_str(raw.trim()).map_err(|_| DomainError::invalid_number("price", raw))?;

    if price.is_zero() {
        // normalizes "-0"
        return Ok(Decimal::ZERO);
    }
    if price.is_sign_negative() {
        return Err(DomainError::invalid_number("price", raw));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn product(quantity: u64, price: &str) -> Product {
        Product::new(
            ProductId::new(1),
            "Widget",
            quantity,
            Decimal::from_str(price).unwrap(),
            Location::new("Hanoi", "Ba Dinh"),
            Utc::now(),
        )
    }

    #[test]
    fn line_value_multiplies_quantity_by_price() {
        assert_eq!(product(3, "2.50").line_value(), Decimal::from_str("7.50").unwrap());
        assert_eq!(product(0, "99.99").line_value(), Decimal::ZERO);
    }

    #[test]
    fn line_value_saturates_on_overflow() {
        let p = product(u64::MAX, "79228162514264337593543950335");
        assert_eq!(p.line_value(), Decimal::MAX);
    }

    #[test]
    fn parse_quantity_accepts_whole_numbers() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 0 ").unwrap(), 0);
    }

    #[test]
    fn parse_quantity_rejects_fractions_negatives_and_text() {
        for raw in ["3.5", "-1", "abc", ""] {
            let err = parse_quantity(raw).unwrap_err();
            assert_eq!(err, DomainError::invalid_number("quantity", raw));
        }
    }

    #[test]
    fn parse_price_accepts_decimals() {
        assert_eq!(parse_price("2.50").unwrap(), Decimal::from_f64(2.5).unwrap());
        assert_eq!(parse_price("10").unwrap(), Decimal::from(10));
        assert_eq!(parse_price("-0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_price_rejects_negatives_and_text() {
        for raw in ["-0.01", "NaN", "two"] {
            assert!(matches!(
                parse_price(raw),
                Err(DomainError::InvalidNumber { field: "price", .. })
            ));
        }
    }

    #[test]
    fn serializes_location_inline() {
        let json = serde_json::to_value(product(3, "2.50")).unwrap();
        assert_eq!(json["province"], "Hanoi");
        assert_eq!(json["ward"], "Ba Dinh");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn location_is_a_snapshot_value() {
        let p = product(1, "1");
        assert_eq!(p.location(), &Location::new("Hanoi", "Ba Dinh"));
        assert_eq!(p.province(), p.location().province);
    }
}
