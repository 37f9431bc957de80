// tests/store_docs.rs
//
// The JSON document façade: save/load round-trips for every document,
// first-run defaults, and the combined-document symmetry.

use std::fs;
use std::path::PathBuf;

use rankview::record::KeywordRecord;
use rankview::store::{AllDocuments, DatasetKind, DomainEntry, Store, TagColors};

fn tmp_store(name: &str) -> (Store, PathBuf) {
    let mut p = std::env::temp_dir();
    p.push(format!("rankview_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    (Store::at(&p), p)
}

#[test]
fn first_run_loads_defaults_without_a_store_dir() {
    let (store, dir) = tmp_store("first_run");
    // No directory at all, not even an empty one.
    assert!(!dir.exists());

    assert_eq!(store.load_domains().unwrap(), Vec::<DomainEntry>::new());
    assert_eq!(store.load_tag_colors().unwrap(), TagColors::new());
    assert_eq!(store.load_saved_colors().unwrap(), Vec::<String>::new());
    assert_eq!(
        store
            .load_dataset::<KeywordRecord>(DatasetKind::Keywords)
            .unwrap(),
        Vec::new()
    );
    assert_eq!(store.load_all().unwrap(), AllDocuments::default());
    // Reads never create the directory.
    assert!(!dir.exists());
}

#[test]
fn domains_round_trip() {
    let (store, dir) = tmp_store("domains");

    let domains = vec![
        DomainEntry {
            name: "example.com".into(),
            tags: vec!["client".into(), "priority".into()],
        },
        DomainEntry {
            name: "rival.net".into(),
            tags: Vec::new(),
        },
    ];

    let path = store.save_domains(&domains).unwrap();
    assert_eq!(path, dir.join("domains.json"));
    assert_eq!(store.load_domains().unwrap(), domains);
}

#[test]
fn save_replaces_the_document_wholesale() {
    let (store, _dir) = tmp_store("replace");

    let mut colors = TagColors::new();
    colors.insert(s("client"), s("#ff0000"));
    colors.insert(s("priority"), s("#00ff00"));
    store.save_tag_colors(&colors).unwrap();

    // A second save with fewer entries leaves nothing of the first.
    let mut fewer = TagColors::new();
    fewer.insert(s("client"), s("#0000ff"));
    store.save_tag_colors(&fewer).unwrap();

    assert_eq!(store.load_tag_colors().unwrap(), fewer);
}

#[test]
fn saved_colors_keep_their_order() {
    let (store, _dir) = tmp_store("saved_colors");

    let colors = vec![s("#112233"), s("#445566"), s("#778899")];
    store.save_saved_colors(&colors).unwrap();
    assert_eq!(store.load_saved_colors().unwrap(), colors);
}

#[test]
fn all_documents_save_and_load_symmetrically() {
    let (store, _dir) = tmp_store("all");

    let mut tag_colors = TagColors::new();
    tag_colors.insert(s("client"), s("#abcdef"));
    let all = AllDocuments {
        domains: vec![DomainEntry {
            name: "example.com".into(),
            tags: vec![s("client")],
        }],
        tag_colors,
        saved_colors: vec![s("#123456")],
    };

    store.save_all(&all).unwrap();
    assert_eq!(store.load_all().unwrap(), all);

    // The combined document is the three individual ones, not a fourth file.
    assert_eq!(store.load_domains().unwrap(), all.domains);
    assert_eq!(store.load_tag_colors().unwrap(), all.tag_colors);
    assert_eq!(store.load_saved_colors().unwrap(), all.saved_colors);
}

#[test]
fn dataset_round_trips_including_missing_fields() {
    let (store, dir) = tmp_store("dataset");

    let rows = vec![
        KeywordRecord {
            word: s("best coffee"),
            ws: Some(1200),
            wsk: Some(300),
            pos: Some(4),
            url: Some(s("https://example.com/coffee")),
        },
        KeywordRecord {
            word: s("decaf"),
            ..KeywordRecord::default()
        },
    ];

    let path = store.save_dataset(DatasetKind::Keywords, &rows).unwrap();
    assert_eq!(path, dir.join("keywords.json"));

    let reloaded: Vec<KeywordRecord> = store.load_dataset(DatasetKind::Keywords).unwrap();
    assert_eq!(reloaded, rows);
}

#[test]
fn malformed_document_is_an_error_not_a_default() {
    let (store, dir) = tmp_store("malformed");

    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("domains.json"), "{ not json").unwrap();

    assert!(store.load_domains().is_err());
}

fn s(v: &str) -> String {
    v.to_string()
}
