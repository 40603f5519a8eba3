use chrono::NaiveDate;
use notesum::export::{default_filename, to_markdown, write_export, ExportError, ExportFormat};
use tempfile::tempdir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

#[test]
fn test_markdown_wraps_summary() {
    let markdown = to_markdown("**Launch**\n\nShip Friday.", date());

    assert!(markdown.starts_with("# AI Summary\n\nGenerated on: 2024-03-09\n"));
    assert!(markdown.contains("---\n\n**Launch**\n\nShip Friday.\n\n---"));
    assert!(markdown.trim_end().ends_with("*This summary was generated using AI technology.*"));
}

#[test]
fn test_default_filenames_carry_date_and_extension() {
    assert_eq!(default_filename(ExportFormat::Text, date()), "summary-2024-03-09.txt");
    assert_eq!(default_filename(ExportFormat::Markdown, date()), "summary-2024-03-09.md");
}

#[test]
fn test_write_export_plain_and_markdown() {
    let dir = tempdir().unwrap();
    let txt = dir.path().join("out.txt");
    let md = dir.path().join("out.md");

    write_export(&txt, "- item", ExportFormat::Text, date()).unwrap();
    write_export(&md, "- item", ExportFormat::Markdown, date()).unwrap();

    assert_eq!(std::fs::read_to_string(&txt).unwrap(), "- item");
    assert!(std::fs::read_to_string(&md).unwrap().contains("# AI Summary"));
}

#[test]
fn test_write_export_rejects_empty_summary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let err = write_export(&path, "  \n", ExportFormat::Text, date()).unwrap_err();
    assert!(matches!(err, ExportError::Empty));
    assert!(!path.exists());
}
