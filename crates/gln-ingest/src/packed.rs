//! Packed-feed explosion.
//!
//! The Plantion mutation feed packs every record into a single
//! semicolon-joined blob, and its header spans the first *two* blob rows
//! (the sender's export splits the column list across them). This module
//! rebuilds a proper table from that shape: concatenated two-row header,
//! then one record per remaining row, padded or truncated to the header
//! width.

use std::path::Path;

use crate::delimited::DelimitedTable;
use crate::error::{IngestError, Result};

fn split_blob(line: &str) -> Vec<String> {
    line.trim_end_matches(';')
        .split(';')
        .map(|part| part.trim().trim_matches('\u{feff}').to_string())
        .collect()
}

/// Explode packed lines into a table.
///
/// The first two non-empty lines form the header; everything after is data.
pub fn explode_packed_lines<'a>(lines: impl Iterator<Item = &'a str>) -> DelimitedTable {
    let mut lines = lines.filter(|line| !line.trim().is_empty());
    let Some(first) = lines.next() else {
        return DelimitedTable::default();
    };
    let Some(second) = lines.next() else {
        return DelimitedTable {
            headers: split_blob(first),
            rows: Vec::new(),
        };
    };
    let mut headers = split_blob(first);
    headers.extend(split_blob(second));
    let width = headers.len();

    let mut rows = Vec::new();
    for line in lines {
        let mut cells = split_blob(line);
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        // Short records pad with empties, long ones drop the extras.
        cells.resize(width, String::new());
        rows.push(cells);
    }
    DelimitedTable { headers, rows }
}

/// Read a packed feed file from disk.
pub fn read_packed_table(path: &Path) -> Result<DelimitedTable> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(explode_packed_lines(text.lines()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_header_rows_concatenate() {
        let text = "GLN_code_requester;company_name;\ncity_name;expiry_date;\n\
                    8713780000000;Bloemen BV;Ede;\n8713780000017;Plant BV;Lunteren;2024-01-01;\n";
        let table = explode_packed_lines(text.lines());
        assert_eq!(
            table.headers,
            vec![
                "GLN_code_requester",
                "company_name",
                "city_name",
                "expiry_date"
            ]
        );
        assert_eq!(table.rows.len(), 2);
        // Short record padded to the header width.
        assert_eq!(table.rows[0][3], "");
        assert_eq!(table.rows[1][3], "2024-01-01");
    }

    #[test]
    fn long_records_truncate() {
        let text = "a;b;\nc;\n1;2;3;4;5;\n";
        let table = explode_packed_lines(text.lines());
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.rows[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = explode_packed_lines("".lines());
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }
}
