//! CSV serialization of an [`ActivityTable`].
//!
//! Cells are written verbatim inside double quotes; embedded quote and
//! comma characters are not escaped. That is sufficient for the address,
//! status, and counter fields message activity returns, and a known
//! limitation for arbitrary subject text.

use crate::error::ActivityError;
use crate::table::ActivityTable;

/// Serializes the table's visible cells to CSV text.
///
/// The visible header is the first line; body rows follow in reading order.
/// Cells are double-quoted and comma-separated, rows newline-terminated.
/// End-of-row is decided by the table's header width, never recomputed from
/// a row's own length: a row whose retained cell count differs from the
/// header fails with [`ActivityError::CellCountMismatch`] instead of
/// shifting every line after it. An empty table serializes to the empty
/// string.
pub fn to_csv(table: &ActivityTable) -> Result<String, ActivityError> {
    if table.width() == 0 {
        return Ok(String::new());
    }

    let width = table.width();
    let mut out = String::new();
    push_line(&mut out, table.visible_header());

    for (idx, row) in table.rows().iter().enumerate() {
        if row.len() != width {
            return Err(ActivityError::CellCountMismatch {
                row: idx,
                expected: width,
                actual: row.len(),
            });
        }
    }
    for row in table.visible_rows() {
        push_line(&mut out, row);
    }

    Ok(out)
}

fn push_line(out: &mut String, cells: Vec<&str>) {
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(cell);
        out.push('"');
    }
    out.push('\n');
}
