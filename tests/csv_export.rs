// tests/csv_export.rs

use rankview::csv::{parse_rows, to_clipboard_string, to_export_string, BOM};

fn v(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn export_starts_with_bom_and_quotes_every_field() {
    let headers = v(&["Keyword", "Position"]);
    let rows = vec![v(&["best coffee", "3"])];
    let out = to_export_string(&headers, &rows);

    assert!(out.starts_with(BOM));
    let body = out.strip_prefix(BOM).unwrap();
    assert_eq!(body, "\"Keyword\",\"Position\"\n\"best coffee\",\"3\"\n");
}

#[test]
fn clipboard_variant_has_no_bom() {
    let out = to_clipboard_string(&v(&["A"]), &[v(&["1"])]);
    assert!(!out.starts_with(BOM));
    assert_eq!(out, "\"A\"\n\"1\"\n");
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = vec![v(&["say \"cheese\"", "x,y"])];
    let out = to_export_string(&v(&["a", "b"]), &rows);
    assert!(out.contains("\"say \"\"cheese\"\"\""));
    assert!(out.contains("\"x,y\""));
}

#[test]
fn roundtrip_recovers_rows_exactly() {
    let headers = v(&["word", "url"]);
    let rows = vec![
        v(&["plain", "https://a.com/x"]),
        v(&["has \"quotes\"", "a,b,c"]),
        v(&["multi\nline", "-"]),
        v(&["", "empty first"]),
    ];

    let out = to_export_string(&headers, &rows);
    let parsed = parse_rows(&out);

    // Header line + one line per data row.
    assert_eq!(parsed.len(), 1 + rows.len());
    assert_eq!(parsed[0], headers);
    for (orig, back) in rows.iter().zip(&parsed[1..]) {
        assert_eq!(orig, back);
    }
}

#[test]
fn parser_tolerates_crlf_and_missing_trailing_newline() {
    let parsed = parse_rows("\"a\",\"b\"\r\n\"c\",\"d\"");
    assert_eq!(parsed, vec![v(&["a", "b"]), v(&["c", "d"])]);
}
