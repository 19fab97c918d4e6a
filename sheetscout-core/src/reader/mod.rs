//! Excel/ODS file reader using calamine

use crate::error::InspectError;
use calamine::{Data, ExcelDateTime, Range, Reader, Sheets, open_workbook_auto};
use chrono::{SubsecRound, Timelike};
use std::collections::{HashMap, HashSet};
use std::path::Path;

pub mod workbook;

pub use calamine::Error as ReadError;
pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path, loading every sheet into memory
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook, InspectError> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| InspectError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = excel.sheet_names();
    tracing::info!(path = %path.display(), sheets = sheet_names.len(), "Opened workbook");

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let range = excel
            .worksheet_range(sheet_name)
            .map_err(|source| InspectError::SheetRead {
                sheet: sheet_name.clone(),
                source,
            })?;

        let sheet = parse_sheet(sheet_name, &range);
        tracing::debug!(
            sheet = %sheet.name,
            rows = sheet.row_count(),
            cols = sheet.column_count(),
            "Loaded sheet"
        );
        sheets.push(sheet);
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Split a used range into a header row and data rows
pub fn parse_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let mut sheet = Sheet::new(name);
    if range.is_empty() {
        return sheet;
    }

    let mut rows = range.rows();
    let raw_headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(idx, data)| header_label(data, idx))
            .collect(),
        None => return sheet,
    };
    let width = raw_headers.len();

    sheet.headers = dedupe_headers(raw_headers);
    sheet.rows = rows
        .map(|row| {
            let mut values: Vec<CellValue> = row.iter().map(parse_cell_value).collect();
            values.resize(width, CellValue::Empty);
            values
        })
        .collect();

    sheet
}

fn header_label(data: &Data, idx: usize) -> String {
    match parse_cell_value(data) {
        CellValue::Empty => format!("Unnamed: {}", idx),
        value => value.to_string(),
    }
}

/// Make header labels unique: the k-th repeat of `X` becomes `X.k`
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for label in raw {
        if seen.insert(label.clone()) {
            headers.push(label);
            continue;
        }

        let counter = repeats.entry(label.clone()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{}.{}", label, counter);
            if seen.insert(candidate.clone()) {
                headers.push(candidate);
                break;
            }
        }
    }

    headers
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => parse_datetime(dt),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Dates as ISO text (`2025-05-05` or `2025-05-05 10:21:27`), durations as `h:mm:ss`
fn parse_datetime(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            let secs = duration.num_seconds();
            let sign = if secs < 0 { "-" } else { "" };
            let secs = secs.abs();
            return CellValue::Text(format!(
                "{}{}:{:02}:{:02}",
                sign,
                secs / 3600,
                secs % 3600 / 60,
                secs % 60
            ));
        }
    } else if let Some(naive) = dt.as_datetime() {
        // Serial values carry float noise below the second
        let naive = naive.round_subsecs(0);
        let text = if naive.time().num_seconds_from_midnight() == 0 {
            naive.format("%Y-%m-%d").to_string()
        } else {
            naive.format("%Y-%m-%d %H:%M:%S").to_string()
        };
        return CellValue::Text(text);
    }
    CellValue::Number(dt.as_f64())
}
