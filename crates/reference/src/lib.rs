//! Reference data module (read-only lookup tables).
//!
//! Provinces and wards are loaded once at startup and never mutated. The rest
//! of the workspace consumes them only through the [`ReferenceData`] trait.

pub mod error;
pub mod model;
pub mod provider;

pub use error::ReferenceError;
pub use model::{Province, Ward};
pub use provider::{ReferenceData, StaticReferenceData};
