//! Supplier stock download and parsing
//!
//! The supplier publishes a ZIP archive holding a single `.xls` sheet. The
//! archive and the sheet are both handled in memory, nothing touches disk.

use crate::error::{Result, SyncError};
use crate::http::check_status;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::{Cursor, Read};

/// Sheet file name inside the supplier archive
pub const WORKSHEET_NAME: &str = "ostatki.xls";

/// Zero-based row holding the column titles; the rows above are a letterhead
pub const HEADER_ROW: usize = 17;

const CODE_COLUMN: &str = "Код";
const QUANTITY_COLUMN: &str = "Количество";
const PRICE_COLUMN: &str = "Цена";

/// One row of the supplier stock sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Article code, matches the marketplace offer id
    pub code: String,
    /// Raw quantity text, e.g. `">10"`, `"1"` or `"4"`
    pub quantity: String,
    /// Price text as printed, e.g. `"5'990.00 руб."`
    pub price: String,
}

impl InventoryRecord {
    pub fn new(code: &str, quantity: &str, price: &str) -> Self {
        Self {
            code: code.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }
}

/// Remote stock archive
pub struct InventorySource {
    url: String,
    client: reqwest::Client,
}

impl InventorySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Download the archive and parse its sheet into records
    pub async fn fetch(&self) -> Result<Vec<InventoryRecord>> {
        log::info!("Downloading stock archive from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let response = check_status(response).await?;
        let archive = response.bytes().await?;
        log::debug!("Downloaded {} bytes", archive.len());

        let sheet = extract_worksheet(&archive)?;
        let records = parse_worksheet(sheet)?;
        log::info!("Parsed {} stock records", records.len());
        Ok(records)
    }
}

/// Pull the stock sheet out of the ZIP archive
pub fn extract_worksheet(archive: &[u8]) -> Result<Vec<u8>> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))?;
    let mut entry = zip.by_name(WORKSHEET_NAME)?;
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Parse the first worksheet of an in-memory spreadsheet
pub fn parse_worksheet(bytes: Vec<u8>) -> Result<Vec<InventoryRecord>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };

    // The range starts at the first non-empty cell, not at A1.
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    let skip = HEADER_ROW.saturating_sub(first_row);

    let mut rows = range
        .rows()
        .skip(skip)
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    let header = match rows.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };
    records_from_rows(&header, rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|title| title.trim() == name)
        .ok_or_else(|| SyncError::MissingColumn(name.to_string()))
}

/// Map sheet rows to records by column title
pub fn records_from_rows<I>(header: &[String], rows: I) -> Result<Vec<InventoryRecord>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let code = column_index(header, CODE_COLUMN)?;
    let quantity = column_index(header, QUANTITY_COLUMN)?;
    let price = column_index(header, PRICE_COLUMN)?;

    let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

    Ok(rows
        .into_iter()
        .map(|row| InventoryRecord {
            code: cell(&row, code),
            quantity: cell(&row, quantity),
            price: cell(&row, price),
        })
        .collect())
}
