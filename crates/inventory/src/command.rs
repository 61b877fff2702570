//! Serializable user actions, applied through [`InventoryView::dispatch`].
//!
//! [`InventoryView::dispatch`]: crate::InventoryView::dispatch

use serde::{Deserialize, Serialize};
use stockroom_core::ProductId;

use crate::draft::DraftField;
use crate::theme::Theme;

/// A single user action against an inventory view.
///
/// JSON shape: `{"type": "set_draft_field", "field": "name", "value": "Widget"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryCommand {
    SetDraftField { field: DraftField, value: String },
    Submit,
    DeleteProduct { id: ProductId },
    SetSearchTerm { term: String },
    ToggleTheme,
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    DraftUpdated,
    ProductAdded(ProductId),
    /// `removed` is false when no product had that id.
    ProductDeleted { id: ProductId, removed: bool },
    SearchUpdated,
    ThemeChanged(Theme),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_snake_case_tags() {
        let cmd: InventoryCommand = serde_json::from_str(
            r#"{"type": "set_draft_field", "field": "quantity", "value": "3"}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            InventoryCommand::SetDraftField {
                field: DraftField::Quantity,
                value: "3".to_string()
            }
        );

        let cmd: InventoryCommand = serde_json::from_str(r#"{"type": "submit"}"#).unwrap();
        assert_eq!(cmd, InventoryCommand::Submit);

        let cmd: InventoryCommand =
            serde_json::from_str(r#"{"type": "delete_product", "id": 4}"#).unwrap();
        assert_eq!(cmd, InventoryCommand::DeleteProduct { id: ProductId::new(4) });
    }

    #[test]
    fn unknown_field_is_rejected() {
        let res = serde_json::from_str::<InventoryCommand>(
            r#"{"type": "set_draft_field", "field": "colour", "value": "red"}"#,
        );
        assert!(res.is_err());
    }
}
