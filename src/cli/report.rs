//! Report CLI commands
//!
//! Builds a report for a date range, displays it, and optionally exports it
//! to the exports directory.

use std::fs;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::{BoardPaths, PreferencesStore};
use crate::display;
use crate::error::{BoardError, BoardResult};
use crate::export::ExportFormat;
use crate::gateway::Gateway;
use crate::models::Report;
use crate::views::ReportsView;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Spending trend over a date range
    Trend {
        /// Range start (YYYY-MM-DD)
        from: NaiveDate,
        /// Range end (YYYY-MM-DD)
        to: NaiveDate,
        /// Export format: json, csv, html, markdown, pdf
        #[arg(short, long)]
        export: Option<ExportFormat>,
    },

    /// Expense/revenue listing over a date range
    Custom {
        /// Range start (YYYY-MM-DD)
        from: NaiveDate,
        /// Range end (YYYY-MM-DD)
        to: NaiveDate,
        /// Export format: json, csv, html, markdown, pdf
        #[arg(short, long)]
        export: Option<ExportFormat>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    gateway: &Gateway,
    store: &PreferencesStore,
    paths: &BoardPaths,
    cmd: ReportCommands,
) -> BoardResult<()> {
    let mut view = ReportsView::new();

    let export = match cmd {
        ReportCommands::Trend { from, to, export } => {
            validate_range(from, to)?;
            view.load_trend(gateway, store, from, to);
            export
        }
        ReportCommands::Custom { from, to, export } => {
            validate_range(from, to)?;
            view.load_custom(gateway, store, from, to);
            export
        }
    };

    if let Some(err) = &view.soft_error {
        eprintln!("warning: {}", err);
    }

    match view.report.as_ref() {
        Some(Report::Trend(r)) => println!("{}", display::format_trend_table(r, store)),
        Some(Report::Custom(r)) => println!("{}", display::format_custom_report(r, store)),
        None => {}
    }

    if let Some(format) = export {
        let artifact = view.export(format, gateway)?;
        if artifact.format != format {
            eprintln!(
                "warning: {} export unavailable, saved {} instead",
                format, artifact.format
            );
        }

        paths.ensure_directories()?;
        let target = paths.exports_dir().join(&artifact.filename);
        fs::write(&target, &artifact.content)?;
        println!("Saved {}", target.display());
    }

    Ok(())
}

fn validate_range(from: NaiveDate, to: NaiveDate) -> BoardResult<()> {
    if from > to {
        return Err(BoardError::Validation(format!(
            "range start {} is after range end {}",
            from, to
        )));
    }
    Ok(())
}
