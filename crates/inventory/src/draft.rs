//! Transient form state.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use stockroom_core::DomainError;

/// One input of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Quantity,
    Price,
    Province,
    Ward,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Quantity,
        DraftField::Price,
        DraftField::Province,
        DraftField::Ward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Quantity => "quantity",
            DraftField::Price => "price",
            DraftField::Province => "province",
            DraftField::Ward => "ward",
        }
    }
}

impl core::fmt::Display for DraftField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DraftField::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown field {s:?}")))
    }
}

/// The not-yet-submitted form.
///
/// Every field is held as raw text; `province` and `ward` hold reference
/// codes, not display names. Nothing is validated until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    name: String,
    quantity: String,
    price: String,
    province: String,
    ward: String,
}

impl Draft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn ward(&self) -> &str {
        &self.ward
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Quantity => &self.quantity,
            DraftField::Price => &self.price,
            DraftField::Province => &self.province,
            DraftField::Ward => &self.ward,
        }
    }

    /// Set one field. Changing the province always clears the ward, so a ward
    /// is never left pointing at a different province.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Quantity => self.quantity = value,
            DraftField::Price => self.price = value,
            DraftField::Province => {
                self.province = value;
                self.ward.clear();
            }
            DraftField::Ward => self.ward = value,
        }
    }

    /// Fields that are empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
