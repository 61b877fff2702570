//! Interactive line-oriented session.

use std::io::{self, BufRead, Write};

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_inventory::{CommandOutcome, DraftField, InventoryCommand, InventoryView};
use stockroom_reference::ReferenceData;

use crate::render;

const HELP: &str = "\
commands:
  set <field> <value>   edit the draft (fields: name, quantity, price, province, ward)
  submit                add the draft as a product
  delete <id>           remove a product
  search [term]         filter the table by name (no term clears the search)
  list                  show the product table
  total                 show the total inventory value
  draft                 show the draft
  provinces             list provinces (codes for `set province`)
  wards                 list wards of the draft's province (codes for `set ward`)
  theme                 toggle light/dark mode
  help                  show this message
  quit                  leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Inventory(InventoryCommand),
    List,
    Total,
    Draft,
    Provinces,
    Wards,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> DomainResult<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(DomainError::validation("usage: set <field> <value>"));
            }
            ReplCommand::Inventory(InventoryCommand::SetDraftField {
                field: field.parse::<DraftField>()?,
                value: value.to_string(),
            })
        }
        "submit" | "add" => ReplCommand::Inventory(InventoryCommand::Submit),
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err(DomainError::validation("usage: delete <id>"));
            }
            ReplCommand::Inventory(InventoryCommand::DeleteProduct {
                id: rest.parse::<ProductId>()?,
            })
        }
        "search" => ReplCommand::Inventory(InventoryCommand::SetSearchTerm {
            term: rest.to_string(),
        }),
        "theme" => ReplCommand::Inventory(InventoryCommand::ToggleTheme),
        "list" | "ls" => ReplCommand::List,
        "total" => ReplCommand::Total,
        "draft" => ReplCommand::Draft,
        "provinces" => ReplCommand::Provinces,
        "wards" => ReplCommand::Wards,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => {
            return Err(DomainError::validation(format!(
                "unknown command {other:?} (try `help`)"
            )));
        }
    };

    Ok(Some(command))
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R, I, W>(view: &mut InventoryView<R>, input: I, out: &mut W) -> io::Result<()>
where
    R: ReferenceData,
    I: BufRead,
    W: Write,
{
    render::header(out, view.theme())?;
    writeln!(out, "type `help` for commands")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(command)) => execute(view, command, out)?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    tracing::info!(
        session = %view.session_id(),
        products = view.products().len(),
        "session ended"
    );
    Ok(())
}

fn execute<R, W>(view: &mut InventoryView<R>, command: ReplCommand, out: &mut W) -> io::Result<()>
where
    R: ReferenceData,
    W: Write,
{
    match command {
        ReplCommand::Inventory(cmd) => match view.dispatch(cmd) {
            Ok(outcome) => report(view, outcome, out),
            // Incomplete submission is the form's blocking alert; the draft keeps its values.
            Err(e) if e.is_incomplete_submission() => writeln!(out, "alert: {e}"),
            Err(e) => writeln!(out, "error: {e}"),
        },
        ReplCommand::List => render::table(out, view),
        ReplCommand::Total => render::summary(out, view),
        ReplCommand::Draft => render::draft(out, view.draft()),
        ReplCommand::Provinces => render::provinces(out, &view.provinces()),
        ReplCommand::Wards => render::wards(out, &view.available_wards()),
        ReplCommand::Help => writeln!(out, "{HELP}"),
        ReplCommand::Quit => Ok(()),
    }
}

fn report<R, W>(view: &InventoryView<R>, outcome: CommandOutcome, out: &mut W) -> io::Result<()>
where
    R: ReferenceData,
    W: Write,
{
    match outcome {
        CommandOutcome::DraftUpdated => Ok(()),
        CommandOutcome::ProductAdded(id) => {
            writeln!(out, "added product #{id}")?;
            render::summary(out, view)
        }
        CommandOutcome::ProductDeleted { id, removed: true } => {
            writeln!(out, "deleted product #{id}")?;
            render::summary(out, view)
        }
        CommandOutcome::ProductDeleted { id, removed: false } => {
            writeln!(out, "no product #{id}")
        }
        CommandOutcome::SearchUpdated => render::table(out, view),
        CommandOutcome::ThemeChanged(theme) => render::header(out, theme),
    }
}
