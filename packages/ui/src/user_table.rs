use dioxus::prelude::*;
use store::render::{header_row, HEAD_CLASS};
use store::{CellKind, CellView, RowView};

/// The user table, shown once records have loaded. The header row is
/// static; only the body follows `rows`.
#[component]
pub fn UserTable(rows: Vec<RowView>) -> Element {
    let header = header_row();

    rsx! {
        table {
            id: "table",
            class: "user-table",
            thead {
                class: HEAD_CLASS,
                tr {
                    for cell in header.iter() {
                        {render_cell(cell)}
                    }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr {
                        key: "{row.key}",
                        for cell in row.cells.iter() {
                            {render_cell(cell)}
                        }
                    }
                }
            }
        }
    }
}

fn render_cell(cell: &CellView) -> Element {
    match cell.kind {
        CellKind::Header => rsx! {
            th { class: cell.kind.class(), "{cell.text}" }
        },
        CellKind::Data => rsx! {
            td { class: cell.kind.class(), "{cell.text}" }
        },
    }
}
