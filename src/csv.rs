// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Read delimited text into rows of fields.
///
/// Quoted fields may hold the separator, line breaks and doubled quotes.
/// `\r\n` and `\n` both end a row; blank lines produce no row. An
/// unterminated quote runs to the end of the input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut cur = RowBuf::default();
    let mut quoted = false;
    let mut it = text.chars().peekable();

    while let Some(ch) = it.next() {
        if quoted {
            match ch {
                '"' if it.peek() == Some(&'"') => {
                    it.next();
                    cur.field.push('"');
                }
                '"' => quoted = false,
                _ => cur.field.push(ch),
            }
            continue;
        }
        match ch {
            '"' => quoted = true,
            '\r' | '\n' => {
                if ch == '\r' && it.peek() == Some(&'\n') {
                    it.next();
                }
                cur.end_row(&mut rows);
            }
            c if c == sep => cur.end_field(),
            _ => cur.field.push(ch),
        }
    }
    cur.end_row(&mut rows);
    rows
}

#[derive(Default)]
struct RowBuf {
    field: String,
    fields: Vec<String>,
}

impl RowBuf {
    fn end_field(&mut self) {
        self.fields.push(take(&mut self.field));
    }

    fn end_row(&mut self, rows: &mut Vec<Vec<String>>) {
        if self.fields.is_empty() && self.field.is_empty() {
            return;
        }
        self.end_field();
        rows.push(take(&mut self.fields));
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one row, quoting only the fields that need it.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().map(AsRef::as_ref).enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        match needs_quotes(cell, sep) {
            true => write!(w, "\"{}\"", cell.replace('"', "\"\""))?,
            false => w.write_all(cell.as_bytes())?,
        }
    }
    writeln!(w)
}

/// Headers (if any) followed by rows, as one string.
pub fn rows_to_string<S: AsRef<str>>(headers: Option<&[S]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_crlf_and_blank_lines() {
        let text = "S.No,District,Positive cases\r\n1,\"East, Godavari\",57\r\n\r\n2,\"Say \"\"hi\"\"\",3";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![
            vec!["S.No", "District", "Positive cases"],
            vec!["1", "East, Godavari", "57"],
            vec!["2", "Say \"hi\"", "3"],
        ]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["1", "East, Godavari", "57"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,\"East, Godavari\",57\n");
    }

    #[test]
    fn rows_to_string_writes_header_first() {
        let rows = vec![vec![s!("a"), s!("b")]];
        let out = rows_to_string(Some(&["X", "Y"][..]), &rows, ',');
        assert_eq!(out, "X,Y\na,b\n");
    }
}
