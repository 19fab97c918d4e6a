//! Output formatters for inspection reports

use anyhow::Result;
use colored::*;
use sheetscout_core::preview::render_table;
use sheetscout_core::{InspectError, SheetReport, WorkbookReport};
use std::fmt::Write;

const RULE_WIDTH: usize = 50;
const SUB_RULE_WIDTH: usize = 30;

/// Human-readable report with sheet blocks separated by rules
pub fn format_human(report: &WorkbookReport) -> String {
    let mut out = String::new();
    push_banner(&mut out, report.path.display().to_string());

    let _ = writeln!(out, "{} {}", "Worksheets:".bold(), report.sheet_count());
    let _ = writeln!(out, "{} {:?}", "Worksheet names:".bold(), report.sheet_names);
    out.push('\n');

    for (index, sheet) in report.sheets.iter().enumerate() {
        push_sheet(&mut out, index, sheet);
    }

    out
}

fn push_banner(out: &mut String, path: String) {
    let _ = writeln!(out, "{}", format!("Analyzing file: {}", path).bold());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
}

fn push_sheet(out: &mut String, index: usize, sheet: &SheetReport) {
    let _ = writeln!(
        out,
        "{} {}",
        format!("Worksheet {}:", index + 1).bold(),
        sheet.name.cyan().bold()
    );
    let _ = writeln!(out, "{}", "-".repeat(SUB_RULE_WIDTH));
    let _ = writeln!(out, "Rows: {}", sheet.row_count);
    let _ = writeln!(out, "Columns: {}", sheet.column_count);
    let _ = writeln!(out, "Headers: {:?}", sheet.headers);
    out.push('\n');

    let _ = writeln!(out, "{}", format!("First {} rows:", sheet.preview.len()).bold());
    let _ = writeln!(out, "{}", render_table(&sheet.headers, &sheet.preview));
    out.push('\n');

    // Empty candidate lists are left out
    if !sheet.roles.is_empty() {
        push_roles(out, sheet);
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out.push('\n');
}

fn push_roles(out: &mut String, sheet: &SheetReport) {
    if !sheet.roles.vehicle.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Possible vehicle number columns:".green().bold(),
            format!("{:?}", sheet.roles.vehicle).yellow()
        );
    }
    if !sheet.roles.sequence.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Possible car sequence columns:".green().bold(),
            format!("{:?}", sheet.roles.sequence).yellow()
        );
    }
}

/// Human-readable failure line.
///
/// A missing file yields only the not-found message; read failures keep the
/// banner so the failing path is visible.
pub fn format_human_error(path: &str, error: &InspectError) -> String {
    let mut out = String::new();
    match error {
        InspectError::NotFound { .. } => {
            let _ = writeln!(out, "{}", error.to_string().red());
        }
        _ => {
            push_banner(&mut out, path.to_string());
            let _ = writeln!(
                out,
                "{} {}",
                "Failed to read workbook:".red().bold(),
                failure_cause(error)
            );
        }
    }
    out
}

/// The underlying reader error, without the path the banner already shows
fn failure_cause(error: &InspectError) -> String {
    match error {
        InspectError::NotFound { .. } => error.to_string(),
        InspectError::Open { source, .. } => source.to_string(),
        InspectError::SheetRead { sheet, source } => format!("sheet '{}': {}", sheet, source),
    }
}

pub fn format_json(report: &WorkbookReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn format_json_error(error: &InspectError) -> Result<String> {
    let output = serde_json::json!({
        "error": {
            "kind": error.kind().as_str(),
            "message": error.to_string(),
        }
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
