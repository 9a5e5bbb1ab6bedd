//! Report export engine
//!
//! Converts an assembled report into a downloadable artifact in the user's
//! chosen format. JSON, CSV, HTML and Markdown render locally and are
//! deterministic for a given payload; PDF delegates to the backend and
//! downgrades to the JSON artifact when that call fails, so an export never
//! fails silently.

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};

use crate::error::BoardResult;
use crate::gateway::Gateway;
use crate::models::Report;

/// Target formats for report export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Html,
    Markdown,
    Pdf,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// A complete, ready-to-save export
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// File name following `{ReportName}_{ISODate}.{extension}`
    pub filename: String,
    /// The format actually produced (may differ from the requested one
    /// after a PDF downgrade)
    pub format: ExportFormat,
    /// File contents
    pub content: Vec<u8>,
}

/// Build the export file name for a report title and format
///
/// The date is the export date, not the report's period. Whitespace in the
/// title becomes underscores so the name survives every filesystem; an
/// empty title falls back to a `Report` stem.
pub fn export_filename(title: &str, format: ExportFormat, date: NaiveDate) -> String {
    let trimmed = title.trim();
    let stem: String = if trimmed.is_empty() {
        "Report".to_string()
    } else {
        trimmed
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect()
    };
    format!("{}_{}.{}", stem, date.format("%Y-%m-%d"), format.extension())
}

/// Render a report in a locally producible format
///
/// PDF is not renderable locally; use [`export`] for the full dispatch
/// including the backend call and its fallback.
pub fn render_local(report: &Report, format: ExportFormat) -> BoardResult<Vec<u8>> {
    let text = match format {
        ExportFormat::Json => json::render(report)?,
        ExportFormat::Csv => csv::render(report),
        ExportFormat::Html => html::render(report),
        ExportFormat::Markdown => markdown::render(report),
        ExportFormat::Pdf => {
            return Err(crate::error::BoardError::Export(
                "PDF is rendered by the backend".into(),
            ))
        }
    };
    Ok(text.into_bytes())
}

/// Produce the export artifact for a report
///
/// Every format either fully succeeds or, for PDF, downgrades to the JSON
/// artifact; the caller always receives a complete file.
pub fn export(report: &Report, format: ExportFormat, gateway: &Gateway) -> BoardResult<ExportArtifact> {
    let today = Utc::now().date_naive();
    export_on(report, format, gateway, today)
}

/// [`export`] with an explicit export date, for deterministic tests
pub fn export_on(
    report: &Report,
    format: ExportFormat,
    gateway: &Gateway,
    date: NaiveDate,
) -> BoardResult<ExportArtifact> {
    match format {
        ExportFormat::Pdf => match gateway.generate_pdf(report) {
            Ok(bytes) => Ok(ExportArtifact {
                filename: export_filename(report.title(), ExportFormat::Pdf, date),
                format: ExportFormat::Pdf,
                content: bytes,
            }),
            Err(err) => {
                tracing::warn!(%err, "PDF generation failed, downgrading to JSON");
                let content = render_local(report, ExportFormat::Json)?;
                Ok(ExportArtifact {
                    filename: export_filename(report.title(), ExportFormat::Json, date),
                    format: ExportFormat::Json,
                    content,
                })
            }
        },
        other => Ok(ExportArtifact {
            filename: export_filename(report.title(), other, date),
            format: other,
            content: render_local(report, other)?,
        }),
    }
}
