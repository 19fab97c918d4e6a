//! sheetscout-core: spreadsheet structure inspection
//!
//! Opens a workbook, reports the shape and header list of every sheet with a
//! short preview, and flags columns that look like vehicle numbers or car
//! sequence numbers based on keyword matching over header text.

pub mod classifier;
pub mod config;
pub mod error;
pub mod inspect;
pub mod preview;
pub mod reader;

pub use classifier::{ColumnRoles, Vocabulary, classify_columns};
pub use config::ScoutConfig;
pub use error::{FailureKind, InspectError};
pub use inspect::{InspectOptions, SheetReport, WorkbookReport, inspect_path, inspect_workbook};
