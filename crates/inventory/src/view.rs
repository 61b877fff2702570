//! The inventory view-model: one explicit state container per session.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult, ProductId, SessionId};
use stockroom_reference::{Province, ReferenceData, Ward};

use crate::command::{CommandOutcome, InventoryCommand};
use crate::display::{EmptyState, InventorySummary, ProductRow};
use crate::draft::{Draft, DraftField};
use crate::product::{Location, Product, parse_price, parse_quantity};
use crate::theme::Theme;

/// State of one inventory session.
///
/// Derived values (filtered list, totals, available wards) are recomputed on
/// every call rather than cached.
#[derive(Debug, Clone)]
pub struct InventoryView<R> {
    session_id: SessionId,
    reference: R,
    products: Vec<Product>,
    draft: Draft,
    search_term: String,
    theme: Theme,
    next_id: ProductId,
}

impl<R: ReferenceData> InventoryView<R> {
    pub fn new(reference: R) -> Self {
        Self {
            session_id: SessionId::new(),
            reference,
            products: Vec::new(),
            draft: Draft::default(),
            search_term: String::new(),
            theme: Theme::default(),
            next_id: ProductId::new(1),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(session = %self.session_id, %field, value = %value, "draft field updated");
        self.draft.set(field, value);
    }

    /// Submit the draft using the current wall-clock time.
    pub fn submit(&mut self) -> DomainResult<ProductId> {
        self.submit_at(Utc::now())
    }

    /// Validate the draft and append it as a new product.
    ///
    /// On any failure the product list and the draft are left untouched.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> DomainResult<ProductId> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let missing: Vec<&'static str> = missing.iter().map(DraftField::as_str).collect();
            tracing::warn!(session = %self.session_id, ?missing, "incomplete submission rejected");
            return Err(DomainError::incomplete(missing));
        }

        let quantity = parse_quantity(self.draft.quantity()).inspect_err(|e| {
            tracing::warn!(session = %self.session_id, error = %e, "submission rejected");
        })?;
        let price = parse_price(self.draft.price()).inspect_err(|e| {
            tracing::warn!(session = %self.session_id, error = %e, "submission rejected");
        })?;

        // Unknown codes degrade to an empty display name.
        let province = self
            .reference
            .province(self.draft.province())
            .map(|p| p.name_with_type.clone())
            .unwrap_or_default();
        let ward = self
            .reference
            .ward(self.draft.ward())
            .map(|w| w.name_with_type.clone())
            .unwrap_or_default();

        let id = self.next_id;
        self.next_id = id.next();

        let product = Product::new(
            id,
            self.draft.name(),
            quantity,
            price,
            Location::new(province, ward),
            now,
        );
        tracing::info!(
            session = %self.session_id,
            product_id = %id,
            name = product.name(),
            quantity,
            price = %price,
            "product added"
        );

        self.products.push(product);
        self.draft.clear();
        Ok(id)
    }

    /// Remove the product with `id`. Returns whether anything was removed;
    /// deleting an unknown id is a no-op.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id_typed() != id);
        let removed = self.products.len() != before;

        if removed {
            tracing::info!(session = %self.session_id, product_id = %id, "product deleted");
        } else {
            tracing::debug!(session = %self.session_id, product_id = %id, "delete ignored: no such product");
        }
        removed
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        tracing::debug!(session = %self.session_id, theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Products whose name contains the search term, ignoring case.
    /// An empty term yields every product in insertion order.
    pub fn filtered_products(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name_contains(&needle))
            .collect()
    }

    /// Σ quantity × price over all products, regardless of the search term.
    pub fn total_value(&self) -> Decimal {
        self.products
            .iter()
            .fold(Decimal::ZERO, |sum, p| sum.saturating_add(p.line_value()))
    }

    pub fn provinces(&self) -> Vec<&Province> {
        self.reference.provinces()
    }

    /// Wards selectable for the draft's current province.
    pub fn available_wards(&self) -> Vec<&Ward> {
        self.reference.wards_for_province(self.draft.province())
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            product_count: self.products.len(),
            total_value: self.total_value(),
        }
    }

    /// Table rows for the filtered products.
    pub fn rows(&self) -> Vec<ProductRow> {
        self.filtered_products()
            .into_iter()
            .map(ProductRow::from)
            .collect()
    }

    /// Why the table is empty, or `None` if it has rows.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.products.is_empty() {
            Some(EmptyState::NoProducts)
        } else if self.filtered_products().is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, command: InventoryCommand) -> DomainResult<CommandOutcome> {
        match command {
            InventoryCommand::SetDraftField { field, value } => {
                self.set_draft_field(field, value);
                Ok(CommandOutcome::DraftUpdated)
            }
            InventoryCommand::Submit => self.submit().map(CommandOutcome::ProductAdded),
            InventoryCommand::DeleteProduct { id } => {
                let removed = self.delete_product(id);
                Ok(CommandOutcome::ProductDeleted { id, removed })
            }
            InventoryCommand::SetSearchTerm { term } => {
                self.set_search_term(term);
                Ok(CommandOutcome::SearchUpdated)
            }
            InventoryCommand::ToggleTheme => Ok(CommandOutcome::ThemeChanged(self.toggle_theme())),
        }
    }
}
