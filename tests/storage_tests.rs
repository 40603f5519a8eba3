use notesum::{Settings, SummaryStyle};
use tempfile::tempdir;

#[test]
fn test_style_defaults_to_professional() {
    let dir = tempdir().unwrap();
    let settings = Settings::open(dir.path().join("settings")).unwrap();

    assert_eq!(settings.summary_style().unwrap(), SummaryStyle::Professional);
}

#[test]
fn test_style_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings");

    {
        let settings = Settings::open(&path).unwrap();
        settings.set_summary_style(SummaryStyle::Bullet).unwrap();
    }

    let settings = Settings::open(&path).unwrap();
    assert_eq!(settings.summary_style().unwrap(), SummaryStyle::Bullet);
}

#[test]
fn test_generic_values_round_trip_and_remove() {
    let dir = tempdir().unwrap();
    let settings = Settings::open(dir.path().join("settings")).unwrap();

    settings.set("dark_mode", &true).unwrap();
    assert_eq!(settings.get::<bool>("dark_mode").unwrap(), Some(true));

    assert!(settings.remove("dark_mode").unwrap());
    assert!(!settings.remove("dark_mode").unwrap());
    assert_eq!(settings.get::<bool>("dark_mode").unwrap(), None);
}
