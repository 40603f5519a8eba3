//! Writing summaries to plain text or markdown files.

use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no summary to export")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Wrap a summary with a heading, generation date, and footer
pub fn to_markdown(summary: &str, generated_on: NaiveDate) -> String {
    format!(
        r#"# AI Summary

Generated on: {}

---

{}

---

*This summary was generated using AI technology.*
"#,
        generated_on.format("%Y-%m-%d"),
        summary
    )
}

/// `summary-YYYY-MM-DD.<ext>`
pub fn default_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!("summary-{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Write the summary to `path` in the given format
pub fn write_export(
    path: &Path,
    summary: &str,
    format: ExportFormat,
    generated_on: NaiveDate,
) -> Result<(), ExportError> {
    if summary.trim().is_empty() {
        return Err(ExportError::Empty);
    }

    let content = match format {
        ExportFormat::Text => summary.to_string(),
        ExportFormat::Markdown => to_markdown(summary, generated_on),
    };

    std::fs::write(path, content).map_err(|source| ExportError::WriteError {
        path: path.display().to_string(),
        source,
    })
}
