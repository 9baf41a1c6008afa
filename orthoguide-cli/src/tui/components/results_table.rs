//! Results table widget

use orthoguide_core::{ColumnSpec, ResultRecord, TableView};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

use super::{border_style, ACCENT, HIGHLIGHT};

/// Rows from the last analysis plus the column layout
pub struct ResultsTable {
    columns: ColumnSpec,
    records: Vec<ResultRecord>,
    selected: Option<usize>,
}

impl ResultsTable {
    pub fn new(columns: ColumnSpec) -> Self {
        Self {
            columns,
            records: Vec::new(),
            selected: None,
        }
    }

    /// Replace the rows and reset the selection
    pub fn set_records(&mut self, records: Vec<ResultRecord>) {
        self.selected = if records.is_empty() { None } else { Some(0) };
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn view(&self) -> TableView {
        TableView::render(&self.records, &self.columns)
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.records.len() {
                self.selected = Some(i + 1);
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(self.records.len() - 1);
        }
    }

    /// Render header + rows; an empty table still shows its header
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let view = self.view();

        let widths: Vec<Constraint> = view
            .column_widths()
            .into_iter()
            .map(|w| Constraint::Min(w as u16))
            .collect();

        let header = Row::new(view.headers.clone())
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows: Vec<Row> = view.rows.iter().map(|r| Row::new(r.clone())).collect();

        let title = format!(" Results ({}) ", view.row_count());
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .column_spacing(2)
            .row_highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));

        let mut state = TableState::default().with_selected(self.selected);
        f.render_stateful_widget(table, area, &mut state);
    }
}
