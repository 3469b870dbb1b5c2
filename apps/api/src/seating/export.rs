use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::seating::models::{Record, SeatingOptions};

pub const SEAT_COLUMN: &str = "Seat #";
pub const CSV_SEAT_COLUMN: &str = "Seat_Number";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated file download.
    Csv,
    /// Tab-separated text for pasting into a spreadsheet.
    Tsv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Tsv => "text/tab-separated-values; charset=utf-8",
        }
    }
}

/// Seat-numbered view of an arrangement, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Data columns shown after the seat number: every original header, or just
/// organization and name when other columns are not preserved.
pub fn display_columns(headers: &[String], options: &SeatingOptions) -> Vec<String> {
    if options.preserve_other_columns {
        headers.to_vec()
    } else {
        vec![
            options.organization_column.clone(),
            options.name_column.clone(),
        ]
    }
}

pub fn display_table(records: &[Record], headers: &[String], options: &SeatingOptions) -> SeatingTable {
    let data_columns = display_columns(headers, options);

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            std::iter::once((index + 1).to_string())
                .chain(
                    data_columns
                        .iter()
                        .map(|column| record.value_or_empty(column).to_string()),
                )
                .collect()
        })
        .collect();

    let columns = std::iter::once(SEAT_COLUMN.to_string())
        .chain(data_columns)
        .collect();

    SeatingTable { columns, rows }
}

/// Header names in CSV downloads use `_` in place of commas and whitespace.
pub fn sanitize_csv_header(header: &str) -> String {
    header
        .chars()
        .map(|c| if c == ',' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Renders an arrangement in the requested format.
pub fn export(
    records: &[Record],
    headers: &[String],
    options: &SeatingOptions,
    format: ExportFormat,
) -> Result<String> {
    let table = display_table(records, headers, options);
    match format {
        ExportFormat::Tsv => write_delimited(&table.columns, &table.rows, b'\t', QuoteStyle::Never),
        ExportFormat::Csv => {
            let columns: Vec<String> = std::iter::once(CSV_SEAT_COLUMN.to_string())
                .chain(table.columns.iter().skip(1).map(|h| sanitize_csv_header(h)))
                .collect();
            write_delimited(&columns, &table.rows, b',', QuoteStyle::Necessary)
        }
    }
}

pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "seating_arrangement_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

fn write_delimited(
    columns: &[String],
    rows: &[Vec<String>],
    delimiter: u8,
    quote_style: QuoteStyle,
) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(columns)
        .context("Failed to write export header")?;
    for row in rows {
        writer
            .write_record(row)
            .context("Failed to write export row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush export buffer: {e}"))?;
    String::from_utf8(bytes).context("Export produced invalid UTF-8")
}
