//! Plain text table rendering for sheet previews

use crate::reader::CellValue;
use unicode_width::UnicodeWidthStr;

/// Render headers and rows as a right-aligned table with a row index column.
///
/// ```text
///    VehicleNo  SeqNo  Notes
/// 0     K10721      1
/// 1     K10722      2   late
/// ```
pub fn render_table(headers: &[String], rows: &[Vec<CellValue>]) -> String {
    if headers.is_empty() {
        return "Empty sheet".to_string();
    }

    let index_labels: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|l| display_width(l)).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|c| display_width(c))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_line("", index_width, headers, &widths));
    for (label, row) in index_labels.iter().zip(&cells) {
        lines.push(render_line(label, index_width, row, &widths));
    }

    lines.join("\n")
}

fn render_line(label: &str, index_width: usize, values: &[String], widths: &[usize]) -> String {
    let mut line = pad_left(label, index_width);
    for (col, width) in widths.iter().enumerate() {
        let value = values.get(col).map(String::as_str).unwrap_or("");
        line.push_str("  ");
        line.push_str(&pad_left(value, *width));
    }
    line.trim_end().to_string()
}

fn pad_left(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(value));
    format!("{}{}", " ".repeat(padding), value)
}

/// Terminal column width, counting East Asian wide characters and emoji as two
pub fn display_width(s: &str) -> usize {
    s.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_aligned_table() {
        let rows = vec![
            vec![CellValue::Text("K1".to_string()), CellValue::Number(1.0)],
            vec![CellValue::Text("K10".to_string()), CellValue::Number(12.0)],
        ];
        let table = render_table(&headers(&["Car", "Seq"]), &rows);

        assert_eq!(table, "   Car  Seq\n0   K1    1\n1  K10   12");
    }

    #[test]
    fn test_render_header_only() {
        let table = render_table(&headers(&["A", "B"]), &[]);
        assert_eq!(table, "  A  B");
    }

    #[test]
    fn test_render_empty_sheet() {
        assert_eq!(render_table(&[], &[]), "Empty sheet");
    }

    #[test]
    fn test_empty_cells_render_blank() {
        let rows = vec![vec![CellValue::Empty, CellValue::Text("x".to_string())]];
        let table = render_table(&headers(&["A", "B"]), &rows);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "0     x");
    }

    #[test]
    fn test_wide_characters() {
        assert_eq!(display_width("车号"), 4);
        assert_eq!(display_width("K1072"), 5);
        assert_eq!(display_width("车号A"), 5);

        let rows = vec![vec![CellValue::Text("K1".to_string())]];
        let table = render_table(&headers(&["车号"]), &rows);
        assert_eq!(table, "   车号\n0    K1");
    }

    #[test]
    fn test_emoji_and_fullwidth_cells() {
        assert_eq!(display_width("🚆"), 2);
        assert_eq!(display_width("Ｋ１"), 4);

        let rows = vec![
            vec![CellValue::Text("🚆".to_string())],
            vec![CellValue::Text("K10".to_string())],
        ];
        let table = render_table(&headers(&["Car"]), &rows);
        assert_eq!(table, "   Car\n0   🚆\n1  K10");
    }
}
