//! HTML table extraction.
//!
//! Published Google Docs wrap every table cell's text in nested
//! `<p><span>` markup, so cells are flattened by concatenating all
//! descendant text and trimming the result.

use crate::{Error, Result};
use log::debug;
use scraper::{Html, Selector};

/// A flattened HTML table: one header row plus zero or more data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the first row of the table.
    pub headers: Vec<String>,
    /// Each data row as one trimmed string per cell.
    pub rows: Vec<Vec<String>>,
}

/// Extract the first `<table>` in `html` as a [`Table`].
///
/// The first row of the table (whether marked up with `<th>` or `<td>`)
/// becomes the header row. A document without a table, or a table without
/// any rows, is a parse error.
pub fn extract_first_table(html: &str) -> Result<Table> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();
    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td, th").unwrap();

    let table = document
        .select(&table_sel)
        .next()
        .ok_or_else(|| Error::ParseError("no table found in document".into()))?;

    let mut rows: Vec<Vec<String>> = table
        .select(&row_sel)
        .map(|row| {
            row.select(&cell_sel)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .collect();

    if rows.is_empty() {
        return Err(Error::ParseError("table has no rows".into()));
    }

    let headers = rows.remove(0);
    debug!(
        "extracted table with {} columns and {} data rows",
        headers.len(),
        rows.len()
    );

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_headers_and_rows() {
        let html = "<html><body><table>\
            <tr><th>x-coordinate</th><th>Character</th><th>y-coordinate</th></tr>\
            <tr><td>0</td><td>A</td><td>0</td></tr>\
            <tr><td>1</td><td>B</td><td>0</td></tr>\
            </table></body></html>";

        let table = extract_first_table(html).expect("extract");
        assert_eq!(
            table.headers,
            vec!["x-coordinate", "Character", "y-coordinate"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["0", "A", "0"]);
    }

    #[test]
    fn test_flattens_nested_cell_markup() {
        // Published Google Docs wrap cell text in <p><span> and pad it with
        // whitespace
        let html = "<table>\
            <tr><td><p><span>x-coordinate</span></p></td><td><p><span>Character</span></p></td></tr>\
            <tr><td><p><span> 7 </span></p></td><td><p><span>&#9608;</span></p></td></tr>\
            </table>";

        let table = extract_first_table(html).expect("extract");
        assert_eq!(table.headers, vec!["x-coordinate", "Character"]);
        assert_eq!(table.rows, vec![vec!["7".to_string(), "\u{2588}".to_string()]]);
    }

    #[test]
    fn test_first_table_wins() {
        let html = "<table><tr><td>first</td></tr></table>\
            <table><tr><td>second</td></tr></table>";

        let table = extract_first_table(html).expect("extract");
        assert_eq!(table.headers, vec!["first"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_no_table_is_parse_error() {
        let err = extract_first_table("<html><body><p>nothing here</p></body></html>")
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_empty_table_is_parse_error() {
        let err = extract_first_table("<table></table>").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
