use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use stockroom_cli::config::{Cli, Command};
use stockroom_cli::{render, repl, script};
use stockroom_inventory::InventoryView;
use stockroom_reference::{ReferenceData, StaticReferenceData};

fn main() -> Result<()> {
    let cli = Cli::parse();
    stockroom_observability::init(cli.log_format);

    let reference = load_reference(&cli.data_dir)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command() {
        Command::Repl => {
            let mut view = InventoryView::new(&reference).with_theme(cli.theme);
            let stdin = io::stdin();
            repl::run(&mut view, stdin.lock(), &mut out)?;
        }
        Command::Run { script: path, json } => {
            let mut view = InventoryView::new(&reference).with_theme(cli.theme);
            let input = read_script(&path)?;
            let report = script::run(&mut view, input.as_bytes(), &mut out)?;

            if json {
                serde_json::to_writer_pretty(&mut out, view.products())
                    .context("failed to write products as JSON")?;
                writeln!(out)?;
            } else {
                render::table(&mut out, &view)?;
                render::summary(&mut out, &view)?;
            }

            if report.failed > 0 {
                tracing::warn!(failed = report.failed, "some script commands were rejected");
            }
        }
        Command::Provinces => render::provinces(&mut out, &reference.provinces())?,
        Command::Wards { province } => {
            if reference.province(&province).is_none() {
                anyhow::bail!("unknown province code {province:?}");
            }
            render::wards(&mut out, &reference.wards_for_province(&province))?;
        }
    }

    Ok(())
}

fn load_reference(dir: &Path) -> Result<StaticReferenceData> {
    StaticReferenceData::load_dir(dir)
        .with_context(|| format!("failed to load reference data from {}", dir.display()))
}

fn read_script(path: &str) -> Result<String> {
    if path != "-" {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {path}"));
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read script from stdin")?;
    Ok(input)
}
