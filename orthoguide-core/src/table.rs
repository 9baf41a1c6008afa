//! Results table view-model
//!
//! `TableView::render` turns records plus a column spec into plain strings:
//! one header per column, one row per record, one cell per column. It never
//! sorts, filters or pages, and it only borrows its inputs.

use serde::Serialize;

use crate::columns::ColumnSpec;
use crate::record::ResultRecord;

/// Rendered table: header labels and rows of cell text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Render records against a column spec
    pub fn render(records: &[ResultRecord], columns: &ColumnSpec) -> Self {
        let headers = columns.labels().map(str::to_string).collect();
        let rows = records
            .iter()
            .map(|record| columns.fields().map(|f| record.cell_text(f)).collect())
            .collect();

        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-column display width (max of header and cells, in chars)
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Aligned plain-text table with a dashed rule under the header
    pub fn to_plain_text(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        push_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for row in &self.rows {
            push_line(&mut out, row, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ResultRecord> {
        vec![
            ResultRecord::new()
                .with("preferred_name", "CDK6")
                .with("clade_name", "Metamonada")
                .with("root", 37.0)
                .with("cog_id", "KOG0594"),
            ResultRecord::new()
                .with("preferred_name", "NRP1")
                .with("clade_name", "Ambulacraria")
                .with("root", 23.0)
                .with("cog_id", "NOG06579"),
        ]
    }

    #[test]
    fn test_render_headers_and_cells() {
        let view = TableView::render(&sample(), &ColumnSpec::rooting());

        assert_eq!(view.headers, vec!["Gene", "Root Clade", "Root ID", "COG ID"]);
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.rows[0], vec!["CDK6", "Metamonada", "37", "KOG0594"]);
        assert_eq!(view.rows[1], vec!["NRP1", "Ambulacraria", "23", "NOG06579"]);
    }

    #[test]
    fn test_render_empty_records_keeps_headers() {
        let columns = ColumnSpec::rooting();
        let view = TableView::render(&[], &columns);

        assert_eq!(view.headers.len(), columns.len());
        assert!(view.is_empty());
    }

    #[test]
    fn test_missing_field_renders_empty_cell() {
        let records = vec![ResultRecord::new().with("preferred_name", "XYZ")];
        let view = TableView::render(&records, &ColumnSpec::rooting());
        assert_eq!(view.rows[0], vec!["XYZ", "", "", ""]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let records = sample();
        let columns = ColumnSpec::rooting();
        assert_eq!(
            TableView::render(&records, &columns),
            TableView::render(&records, &columns)
        );
    }

    #[test]
    fn test_plain_text_alignment() {
        let view = TableView::render(&sample()[..1], &ColumnSpec::rooting());
        let text = view.to_plain_text();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Gene  Root Clade  Root ID  COG ID");
        assert_eq!(lines[1], "----  ----------  -------  -------");
        assert_eq!(lines[2], "CDK6  Metamonada  37       KOG0594");
    }
}
