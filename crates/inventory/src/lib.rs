//! Inventory view-model.
//!
//! This crate owns the mutable state of one inventory session (product list,
//! form draft, search term, theme) and the pure queries derived from it. It is
//! deterministic domain logic: no IO and no rendering.

pub mod command;
pub mod display;
pub mod draft;
pub mod product;
pub mod theme;
pub mod view;

pub use command::{CommandOutcome, InventoryCommand};
pub use display::{EmptyState, InventorySummary, ProductRow, format_money};
pub use draft::{Draft, DraftField};
pub use product::{Location, Product, parse_price, parse_quantity};
pub use theme::Theme;
pub use view::InventoryView;
