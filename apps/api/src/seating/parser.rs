use csv::{ReaderBuilder, StringRecord, Trim};

use crate::seating::models::{Record, Table};

/// Picks the separator from the first line: tab when present, otherwise comma.
pub fn detect_separator(text: &str) -> u8 {
    match text.lines().next() {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    }
}

/// Parses pasted spreadsheet text (TSV or CSV) into a table.
///
/// Each line is read on its own, so quotes never span rows and an unclosed
/// quote only affects the row it appears in. Without a header row, columns are
/// named `Column1..ColumnN` after the width of the first row and that row is
/// kept as data. Rows whose cells are all blank are dropped; short rows are
/// padded with empty values.
pub fn parse_table(text: &str, has_header_row: bool) -> Result<Table, csv::Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Table::default());
    }

    let separator = detect_separator(text);
    let mut rows = Vec::new();
    for line in text.lines() {
        if let Some(row) = parse_line(line, separator)? {
            rows.push(row);
        }
    }

    let mut rows = rows.into_iter();
    let first = match rows.next() {
        Some(row) => row,
        None => return Ok(Table::default()),
    };

    let (headers, mut records) = if has_header_row {
        (first.iter().map(str::to_string).collect::<Vec<_>>(), Vec::new())
    } else {
        let headers: Vec<String> = (1..=first.len()).map(|i| format!("Column{i}")).collect();
        let mut records = Vec::new();
        push_row(&headers, &first, &mut records);
        (headers, records)
    };

    for row in rows {
        push_row(&headers, &row, &mut records);
    }

    Ok(Table { headers, records })
}

/// Reads a single line as one record; `None` for a line with no content.
fn parse_line(line: &str, separator: u8) -> Result<Option<StringRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    reader.records().next().transpose()
}

fn push_row(headers: &[String], row: &StringRecord, records: &mut Vec<Record>) {
    if row.iter().all(|cell| cell.is_empty()) {
        return;
    }
    let record = Record::from_pairs(
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.as_str(), row.get(i).unwrap_or(""))),
    );
    records.push(record);
}
