//! Row descriptors for the directory table.
//!
//! The table is described as plain data so the ordering and cell layout can
//! be checked without a DOM. The UI crate maps each [`RowView`] to a `tr`
//! and each [`CellView`] to a `th` or `td`.

use crate::models::User;

/// Column labels, in display order.
pub const COLUMNS: [&str; 6] = ["ID", "Name", "Username", "Email", "Phone", "Website"];

/// Class of the `thead` element.
pub const HEAD_CLASS: &str = "bg-gray-100";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Rendered as `th`.
    Header,
    /// Rendered as `td`.
    Data,
}

impl CellKind {
    pub fn class(&self) -> &'static str {
        match self {
            CellKind::Header => "border px-4 py-2 font-bold bg-gray-100",
            CellKind::Data => "border px-4 py-2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub kind: CellKind,
    pub text: String,
}

impl CellView {
    fn new(kind: CellKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    /// Record id, used as the element key.
    pub key: i64,
    pub cells: [CellView; 6],
}

/// The column header row. Every label is a data-styled cell, as in the
/// record rows.
pub fn header_row() -> [CellView; 6] {
    COLUMNS.map(|label| CellView::new(CellKind::Data, label))
}

/// One row for a record: header-styled id cell, then the five text fields.
pub fn render_row(user: &User) -> RowView {
    RowView {
        key: user.id,
        cells: [
            CellView::new(CellKind::Header, user.id.to_string()),
            CellView::new(CellKind::Data, user.name.as_str()),
            CellView::new(CellKind::Data, user.username.as_str()),
            CellView::new(CellKind::Data, user.email.as_str()),
            CellView::new(CellKind::Data, user.phone.as_str()),
            CellView::new(CellKind::Data, user.website.as_str()),
        ],
    }
}

/// Rows for the whole displayed list, in order.
pub fn render_rows(users: &[User]) -> Vec<RowView> {
    users.iter().map(render_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user;

    #[test]
    fn test_header_row_labels() {
        let header = header_row();
        let labels: Vec<&str> = header.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(labels, COLUMNS.to_vec());
    }

    #[test]
    fn test_row_cells_in_column_order() {
        let record = user(7, "Grace");
        let row = render_row(&record);

        assert_eq!(row.key, 7);
        assert_eq!(row.cells[0], CellView::new(CellKind::Header, "7"));
        assert_eq!(row.cells[1].text, "Grace");
        assert_eq!(row.cells[2].text, record.username);
        assert_eq!(row.cells[3].text, record.email);
        assert_eq!(row.cells[4].text, record.phone);
        assert_eq!(row.cells[5].text, record.website);
        assert!(row.cells[1..].iter().all(|c| c.kind == CellKind::Data));
    }

    #[test]
    fn test_one_row_per_record() {
        let users = vec![user(2, "b"), user(10, "a"), user(1, "c"), user(33, "d")];
        let rows = render_rows(&users);

        assert_eq!(rows.len(), users.len());
        for (row, record) in rows.iter().zip(&users) {
            assert_eq!(row.cells.len(), 6);
            assert_eq!(row.cells[0].text, record.id.to_string());
            assert_eq!(row.key, record.id);
        }
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        assert!(render_rows(&[]).is_empty());
    }

    #[test]
    fn test_cell_classes() {
        assert_eq!(CellKind::Data.class(), "border px-4 py-2");
        assert!(CellKind::Header.class().contains("font-bold"));
    }
}
