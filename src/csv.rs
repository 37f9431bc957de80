// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// UTF-8 byte-order mark. Prepended to exports so spreadsheet tools read
/// the file as UTF-8 instead of a legacy code page.
pub const BOM: &str = "\u{feff}";

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant, BOM stripped). std-only.
/// Verifies the writer's output in the round-trip tests; datasets
/// themselves are imported as JSON.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

/// Write one row: every field double-quoted, inner quotes doubled,
/// comma-joined, '\n' terminated. Quoting unconditionally keeps the output
/// stable regardless of cell content.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        let escaped = cell.replace('"', "\"\"");
        write!(w, "\"{}\"", escaped)?;
    }
    write!(w, "\n")
}

/// Full export content: BOM, quoted header line, then the rows.
pub fn to_export_string(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write!(&mut buf, "{}", BOM);
    let _ = write_row(&mut buf, headers);
    for r in rows {
        let _ = write_row(&mut buf, r);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// Clipboard variant: same shape, no BOM.
pub fn to_clipboard_string(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, headers);
    for r in rows {
        let _ = write_row(&mut buf, r);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
