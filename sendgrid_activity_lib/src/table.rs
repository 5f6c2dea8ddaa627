//! In-memory rectangular view of fetched message records, the basis for both
//! display and CSV export.

use sendgrid_activity_api::types::Record;
use serde_json::Value;

/// Provider field holding the internal message identifier. The column is
/// kept in the table for lookups but never rendered or exported.
pub const MSG_ID_FIELD: &str = "msg_id";

/// One table column: its field name and whether it is shown to the user.
pub struct Column {
    pub name: String,
    pub visible: bool,
}

/// Header plus body rows built from one fetch's records.
///
/// The header is derived from the field names of the first record, in
/// provider order. Every row holds exactly one cell per column; fields a
/// later record happens to lack come through as empty cells. Replaced
/// wholesale on each fetch, never edited in place.
pub struct ActivityTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl ActivityTable {
    /// Materializes a table from fetched records.
    ///
    /// An empty record sequence yields a table with no columns and no rows;
    /// no header derivation is attempted.
    pub fn from_records(records: &[Record]) -> Self {
        let Some(first) = records.first() else {
            return Self {
                columns: Vec::new(),
                rows: Vec::new(),
            };
        };

        let columns: Vec<Column> = first
            .keys()
            .map(|name| Column {
                name: name.clone(),
                visible: name != MSG_ID_FIELD,
            })
            .collect();

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| match record.get(&column.name) {
                        Some(value) => cell_text(value),
                        None => {
                            tracing::debug!("record is missing field {:?}", column.name);
                            String::new()
                        }
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub(crate) fn from_parts(columns: Vec<Column>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Full header width, hidden columns included.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Names of the visible columns, in header order.
    pub fn visible_header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.visible)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Visible cells of every body row, in reading order.
    pub fn visible_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            row.iter()
                .zip(&self.columns)
                .filter(|(_, column)| column.visible)
                .map(|(cell, _)| cell.as_str())
                .collect()
        })
    }

    /// Looks up a cell by message identifier and field name. Hidden columns
    /// are addressable here even though they never render.
    pub fn cell(&self, msg_id: &str, field: &str) -> Option<&str> {
        let id_idx = self.column_index(MSG_ID_FIELD)?;
        let field_idx = self.column_index(field)?;
        self.rows
            .iter()
            .find(|row| row.get(id_idx).map(String::as_str) == Some(msg_id))
            .and_then(|row| row.get(field_idx))
            .map(String::as_str)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// Renders a record scalar as display text. Strings come through verbatim,
/// null as an empty cell, everything else in its JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sendgrid_activity_api::types::MessagesResponse;

    fn fixture_records() -> Vec<Record> {
        let json = include_str!("../../sendgrid_activity_api/tests/fixtures/messages.json");
        let resp: MessagesResponse = serde_json::from_str(json).unwrap();
        resp.messages
    }

    #[test]
    fn table_dimensions_match_records() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.width(), 8);
        for row in table.rows() {
            assert_eq!(row.len(), table.width());
        }
    }

    #[test]
    fn msg_id_column_is_retained_but_hidden() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);

        let msg_id = table
            .columns()
            .iter()
            .find(|c| c.name == MSG_ID_FIELD)
            .unwrap();
        assert!(!msg_id.visible);

        let header = table.visible_header();
        assert_eq!(header.len(), table.width() - 1);
        assert!(!header.contains(&MSG_ID_FIELD));
    }

    #[test]
    fn visible_rows_skip_the_hidden_column() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);
        for row in table.visible_rows() {
            assert_eq!(row.len(), table.width() - 1);
            assert!(!row.iter().any(|cell| cell.starts_with("mEonbbVjQ")));
        }
    }

    #[test]
    fn cells_are_addressable_by_identifier_and_field() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);
        let id = "kBNachtQSGiP0WqZRdYxAw.filterdrecv-5645d9cf95-4kfm9-1-5F84FD02-3.1";

        assert_eq!(table.cell(id, "to_email"), Some("grace@hopper.io"));
        assert_eq!(table.cell(id, "status"), Some("not_delivered"));
        // The hidden identifier column itself stays addressable.
        assert_eq!(table.cell(id, MSG_ID_FIELD), Some(id));
        assert_eq!(table.cell(id, "no_such_field"), None);
        assert_eq!(table.cell("no-such-id", "to_email"), None);
    }

    #[test]
    fn empty_record_sequence_builds_an_empty_table() {
        let table = ActivityTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.width(), 0);
        assert!(table.visible_header().is_empty());
        assert_eq!(table.cell("x", "y"), None);
    }

    #[test]
    fn header_comes_from_the_first_record() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[0], "from_email");
        assert_eq!(names[1], "msg_id");
        assert_eq!(names[7], "last_event_time");
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let records = fixture_records();
        let mut sparse = records.clone();
        sparse[2].remove("subject");
        let table = ActivityTable::from_records(&sparse);

        assert_eq!(table.rows()[2].len(), table.width());
        let id = "xWpoQQDmRMuJrzGSXnPTcg.filterdrecv-5645d9cf95-v9xkc-1-5F84FE11-7.0";
        assert_eq!(table.cell(id, "subject"), Some(""));
    }

    #[test]
    fn scalar_cells_render_without_json_quoting() {
        let records = fixture_records();
        let table = ActivityTable::from_records(&records);
        let id = "mEonbbVjQOCzRLFvPYTZjQ.filterdrecv-5645d9cf95-4kfm9-1-5F84FC7D-9.0";

        // Strings verbatim, numbers in decimal form.
        assert_eq!(table.cell(id, "subject"), Some("Your order has shipped"));
        assert_eq!(table.cell(id, "opens_count"), Some("2"));
    }

    #[test]
    fn two_field_records_keep_identifier_for_lookup_only() {
        let records: Vec<Record> = (1..=3)
            .map(|i| {
                let mut r = Record::new();
                r.insert("msg_id".into(), Value::String(format!("m-{}", i)));
                r.insert(
                    "to_email".into(),
                    Value::String(format!("user{}@example.com", i)),
                );
                r
            })
            .collect();
        let table = ActivityTable::from_records(&records);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.width(), 2);
        assert_eq!(table.visible_header(), vec!["to_email"]);
        assert_eq!(table.cell("m-2", "to_email"), Some("user2@example.com"));
        assert_eq!(table.cell("m-2", MSG_ID_FIELD), Some("m-2"));
    }

    #[test]
    fn null_values_render_as_empty_cells() {
        let mut record = Record::new();
        record.insert("msg_id".into(), Value::String("m-1".into()));
        record.insert("to_email".into(), Value::Null);
        let table = ActivityTable::from_records(&[record]);
        assert_eq!(table.cell("m-1", "to_email"), Some(""));
    }
}
