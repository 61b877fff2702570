//! Drives full sessions through the CLI library against the bundled datasets.

use std::path::PathBuf;

use stockroom_cli::{render, repl, script};
use stockroom_inventory::{InventoryView, Theme};
use stockroom_reference::{ReferenceData, StaticReferenceData};

fn bundled_reference() -> StaticReferenceData {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    StaticReferenceData::load_dir(dir).expect("bundled reference data should load")
}

fn run_repl(input: &str) -> (InventoryView<StaticReferenceData>, String) {
    let mut view = InventoryView::new(bundled_reference());
    let mut out = Vec::new();
    repl::run(&mut view, input.as_bytes(), &mut out).unwrap();
    (view, String::from_utf8(out).unwrap())
}

#[test]
fn bundled_datasets_are_consistent() {
    let data = bundled_reference();
    assert_eq!(data.province_count(), 3);
    assert_eq!(data.orphan_ward_count(), 0);
    for province in data.provinces() {
        assert!(!data.wards_for_province(&province.code).is_empty());
    }
}

#[test]
fn repl_adds_searches_and_deletes() {
    let input = "\
set name Widget
set quantity 3
set price 2.50
set province 01
set ward 00004
submit
set name Gadget
set quantity 2
set price 10
set province 79
set ward 26734
submit
search WID
delete 2
total
quit
";
    let (view, text) = run_repl(input);

    assert!(text.contains("added product #1"));
    assert!(text.contains("added product #2"));
    assert!(text.contains("Total Inventory Value: $27.50 (2 products in inventory)"));
    assert!(text.contains("deleted product #2"));
    assert!(text.contains("Total Inventory Value: $7.50 (1 product in inventory)"));

    assert_eq!(view.products().len(), 1);
    let widget = &view.products()[0];
    assert_eq!(widget.province(), "Thành phố Hà Nội");
    assert_eq!(widget.ward(), "Phường Ba Đình");
    assert_eq!(view.search_term(), "WID");
}

#[test]
fn repl_alerts_on_incomplete_submission_and_keeps_draft() {
    let input = "\
set name Widget
set province 01
set ward 00004
set province 48
submit
draft
";
    let (view, text) = run_repl(input);

    assert!(text.contains("alert: please fill in all fields (missing: quantity, price, ward)"));
    assert!(view.products().is_empty());
    assert_eq!(view.draft().name(), "Widget");
    assert_eq!(view.draft().province(), "48");
    assert_eq!(view.draft().ward(), "");
}

#[test]
fn repl_lists_wards_for_selected_province() {
    let (_, text) = run_repl("wards\nset province 79\nwards\n");
    assert!(text.contains("No wards available. Select a province first."));
    assert!(text.contains("26734  Phường Sài Gòn"));
    assert!(text.contains("26743  Phường Tân Định"));
    assert!(!text.contains("Phường Ba Đình"));
}

#[test]
fn repl_reports_bad_input_and_keeps_going() {
    let (view, text) = run_repl("set colour red\ndelete 9\ntheme\nlist\n");
    assert!(text.contains("error: validation failed: unknown field \"colour\""));
    assert!(text.contains("no product #9"));
    assert!(text.contains("[dark]"));
    assert!(text.contains("No products added yet."));
    assert_eq!(view.theme(), Theme::Dark);
}

#[test]
fn script_replays_into_table() {
    let commands = r#"{"type": "set_draft_field", "field": "name", "value": "Widget"}
{"type": "set_draft_field", "field": "quantity", "value": "3"}
{"type": "set_draft_field", "field": "price", "value": "2.50"}
{"type": "set_draft_field", "field": "province", "value": "01"}
{"type": "set_draft_field", "field": "ward", "value": "00070"}
{"type": "submit"}
{"type": "set_draft_field", "field": "quantity", "value": "lots"}
{"type": "set_draft_field", "field": "name", "value": "Gadget"}
{"type": "set_draft_field", "field": "price", "value": "1"}
{"type": "set_draft_field", "field": "province", "value": "48"}
{"type": "set_draft_field", "field": "ward", "value": "20194"}
{"type": "submit"}
"#;
    let mut view = InventoryView::new(bundled_reference());
    let mut out = Vec::new();
    let report = script::run(&mut view, commands.as_bytes(), &mut out).unwrap();
    assert_eq!(report.failed, 1);

    render::table(&mut out, &view).unwrap();
    render::summary(&mut out, &view).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("line 12: quantity must be a non-negative number, got \"lots\""));
    assert!(text.contains("Phường Hoàn Kiếm"));
    assert!(text.contains("Total Inventory Value: $7.50 (1 product in inventory)"));
}
