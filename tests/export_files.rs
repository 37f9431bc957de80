// tests/export_files.rs
//
// End-to-end export to a temp dir: naming, BOM on disk, empty-view failure.

use std::fs;
use std::path::PathBuf;

use rankview::csv::BOM;
use rankview::file::{export_filename, sanitize_domain, write_export};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("rankview_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn filename_is_domain_underscore_iso_date() {
    let name = export_filename("shop.example.com").unwrap();
    assert!(name.starts_with("shop.example.com_"));
    assert!(name.ends_with(".csv"));

    // The middle part is a YYYY-MM-DD stamp.
    let date = name
        .strip_prefix("shop.example.com_")
        .unwrap()
        .strip_suffix(".csv")
        .unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(date.as_bytes()[4], b'-');
    assert_eq!(date.as_bytes()[7], b'-');
}

#[test]
fn domain_is_sanitized_for_the_filesystem() {
    assert_eq!(sanitize_domain("shop.example.com"), "shop.example.com");
    assert_eq!(sanitize_domain("my site/№1"), "my_site_1");
    assert_eq!(sanitize_domain("///"), "export");
}

#[test]
fn export_creates_dir_and_writes_bom_file() {
    let dir = tmp_dir("write");

    let path = write_export(
        &dir,
        "a.com",
        &v(&["Keyword", "Position"]),
        &[v(&["best coffee", "3"])],
    )
    .unwrap();

    assert!(path.starts_with(&dir));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(BOM));
    assert!(content.contains("\"best coffee\",\"3\""));
}

#[test]
fn empty_view_is_a_failure_and_writes_nothing() {
    let dir = tmp_dir("empty");

    let res = write_export(&dir, "a.com", &v(&["Keyword"]), &[]);
    assert!(res.is_err());
    // Not even the directory gets created.
    assert!(!dir.exists());
}
