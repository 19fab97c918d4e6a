//! Workbook inspection: shape, header list, preview and column roles per sheet

use crate::classifier::{ColumnRoles, classify_columns};
use crate::config::ScoutConfig;
use crate::error::InspectError;
use crate::reader::{self, CellValue, Sheet, Workbook};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Knobs for a single inspection run
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub config: ScoutConfig,
    /// Overrides the configured preview size when set
    pub preview_rows: Option<usize>,
}

impl InspectOptions {
    pub fn new(config: ScoutConfig) -> Self {
        Self {
            config,
            preview_rows: None,
        }
    }

    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    pub fn effective_preview_rows(&self) -> usize {
        self.preview_rows.unwrap_or_else(|| self.config.preview_rows())
    }
}

/// Report for a whole workbook
#[derive(Debug, Clone, Serialize)]
pub struct WorkbookReport {
    pub path: PathBuf,
    pub sheet_names: Vec<String>,
    pub sheets: Vec<SheetReport>,
}

impl WorkbookReport {
    pub fn sheet_count(&self) -> usize {
        self.sheet_names.len()
    }
}

/// Report for a single sheet
#[derive(Debug, Clone, Serialize)]
pub struct SheetReport {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub headers: Vec<String>,
    pub preview: Vec<Vec<CellValue>>,
    pub roles: ColumnRoles,
}

/// Inspect the spreadsheet at `path`.
///
/// A missing file is reported as [`InspectError::NotFound`] before any
/// attempt to open it.
pub fn inspect_path<P: AsRef<Path>>(
    path: P,
    options: &InspectOptions,
) -> Result<WorkbookReport, InspectError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Spreadsheet does not exist");
        return Err(InspectError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let workbook = reader::read_workbook(path).inspect_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Could not read spreadsheet");
    })?;

    Ok(inspect_workbook(&workbook, options))
}

/// Build the report for an already loaded workbook.
///
/// A preview size of zero yields empty previews; shape and roles are still reported.
pub fn inspect_workbook(workbook: &Workbook, options: &InspectOptions) -> WorkbookReport {
    let preview_rows = options.effective_preview_rows();

    WorkbookReport {
        path: workbook.path.clone(),
        sheet_names: workbook.sheet_names().into_iter().map(String::from).collect(),
        sheets: workbook
            .sheets
            .iter()
            .map(|sheet| inspect_sheet(sheet, &options.config, preview_rows))
            .collect(),
    }
}

fn inspect_sheet(sheet: &Sheet, config: &ScoutConfig, preview_rows: usize) -> SheetReport {
    let vocabulary = config.vocabulary_for(&sheet.name);
    let roles = classify_columns(&sheet.headers, &vocabulary);

    tracing::debug!(
        sheet = %sheet.name,
        vehicle = roles.vehicle.len(),
        sequence = roles.sequence.len(),
        "Classified columns"
    );

    SheetReport {
        name: sheet.name.clone(),
        row_count: sheet.row_count(),
        column_count: sheet.column_count(),
        headers: sheet.headers.clone(),
        preview: sheet.head(preview_rows).to_vec(),
        roles,
    }
}
