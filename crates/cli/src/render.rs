//! Plain-text rendering of view state.

use std::io::{self, Write};

use stockroom_inventory::{Draft, DraftField, InventoryView, ProductRow, Theme};
use stockroom_reference::{Province, ReferenceData, Ward};

const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Product Name",
    "Quantity",
    "Price",
    "Province",
    "Ward",
    "Total Value",
];

pub fn header<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    writeln!(
        out,
        "Inventory Management System [{theme}] (`theme` switches to {})",
        theme.toggle_label()
    )
}

/// Product table for the current search, or the empty-state message.
pub fn table<R: ReferenceData, W: Write>(out: &mut W, view: &InventoryView<R>) -> io::Result<()> {
    if let Some(empty) = view.empty_state() {
        return writeln!(out, "{}", empty.message());
    }

    let rows: Vec<[String; 7]> = view.rows().into_iter().map(cells).collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &TABLE_HEADERS.map(String::from), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

pub fn summary<R: ReferenceData, W: Write>(out: &mut W, view: &InventoryView<R>) -> io::Result<()> {
    let summary = view.summary();
    writeln!(
        out,
        "Total Inventory Value: {} ({})",
        summary.total_label(),
        summary.count_label()
    )
}

pub fn draft<W: Write>(out: &mut W, draft: &Draft) -> io::Result<()> {
    for field in DraftField::ALL {
        let value = draft.get(field);
        let shown = if value.is_empty() { "<empty>" } else { value };
        writeln!(out, "{:>8}: {shown}", field.as_str())?;
    }
    Ok(())
}

pub fn provinces<W: Write>(out: &mut W, provinces: &[&Province]) -> io::Result<()> {
    if provinces.is_empty() {
        return writeln!(out, "No provinces loaded.");
    }
    for province in provinces {
        writeln!(out, "{}  {}", province.code, province.name_with_type)?;
    }
    Ok(())
}

pub fn wards<W: Write>(out: &mut W, wards: &[&Ward]) -> io::Result<()> {
    if wards.is_empty() {
        return writeln!(out, "No wards available. Select a province first.");
    }
    for ward in wards {
        writeln!(out, "{}  {}", ward.code, ward.name_with_type)?;
    }
    Ok(())
}

fn cells(row: ProductRow) -> [String; 7] {
    [
        row.id.to_string(),
        row.name,
        row.quantity.to_string(),
        row.price,
        row.province,
        row.ward,
        row.line_total,
    ]
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}
