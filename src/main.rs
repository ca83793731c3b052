//! csvpad - Terminal editor for CSV and other delimited text

mod cli;
mod config;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use anyhow::{Context, bail};
use clap::Parser;
use cli::CliArgs;
use csvpad_core::Document;
use std::io::Write;
use std::path::Path;

fn export(doc: &Document, output: &Path, to_stdout: bool) -> anyhow::Result<()> {
    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", doc.export_text())?;
        return Ok(());
    }
    doc.save_to(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!("Exported to {}", output.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(args.output.is_some());

    let (settings, warnings) = config::load_settings(args.config.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
        tracing::warn!("{}", warning);
    }
    let settings = settings.with_overrides(&args);

    let mut doc = Document::with_options(settings.document_options())?;
    let mut status = String::new();
    if let Some(path) = &args.file {
        let summary = doc
            .load_file(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        status = summary.to_string();
    }

    if let Some(output) = &args.output {
        if doc.is_empty() {
            bail!("--output needs an input FILE");
        }
        return export(&doc, output, args.output_is_stdout());
    }

    run_interactive(doc, status)
}

#[cfg(feature = "tui")]
fn run_interactive(doc: Document, status: String) -> anyhow::Result<()> {
    tui::run(doc, status)
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_doc: Document, _status: String) -> anyhow::Result<()> {
    bail!("built without the terminal UI; use --output to export")
}
