//! Workbook data structures

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Represents a complete workbook loaded into memory
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get all sheet names, in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet: one header row followed by data rows.
///
/// Every row in `rows` has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows (the header row is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The first `n` data rows, or all of them if the sheet is shorter
    pub fn head(&self, n: usize) -> &[Vec<CellValue>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Error(e) => write!(f, "#{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_is_bounded_by_row_count() {
        let mut sheet = Sheet::new("Data");
        sheet.headers = vec!["A".to_string()];
        sheet.rows = (0..3).map(|i| vec![CellValue::Number(i as f64)]).collect();

        assert_eq!(sheet.head(5).len(), 3);
        assert_eq!(sheet.head(2).len(), 2);
        assert_eq!(sheet.head(0).len(), 0);
        assert_eq!(sheet.head(2)[1][0], CellValue::Number(1.0));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Number(1.0).to_string(), "1");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Text("K1072".to_string()).to_string(), "K1072");
        assert_eq!(CellValue::Boolean(true).to_string(), "true");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Error("Div0".to_string()).to_string(), "#Div0");
    }

    #[test]
    fn test_sheet_names_in_order() {
        let workbook = Workbook {
            path: PathBuf::from("train.xls"),
            sheets: vec![Sheet::new("Info"), Sheet::new("Faults")],
        };
        assert_eq!(workbook.sheet_names(), vec!["Info", "Faults"]);
    }
}
