use std::path::PathBuf;

use anyhow::Result;
use sendgrid_activity_lib::{csv, ActivityTable};
use tabled::builder::Builder;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

// -- Table output --

fn render_table(table: &ActivityTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.visible_header());
    for row in table.visible_rows() {
        builder.push_record(row);
    }
    builder.build().to_string()
}

pub fn print_messages_table(table: &ActivityTable) {
    if table.is_empty() {
        eprintln!("No messages matched the filters.");
        return;
    }
    println!("{}", render_table(table));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- CSV output --

pub fn print_messages_csv(table: &ActivityTable) -> Result<()> {
    print!("{}", csv::to_csv(table)?);
    Ok(())
}

/// Writes the table's CSV text to `<base_name>.csv`, returning the path.
pub fn export_csv(table: &ActivityTable, base_name: &str) -> Result<PathBuf> {
    let text = csv::to_csv(table)?;
    let path = PathBuf::from(csv_file_name(base_name));
    std::fs::write(&path, text)?;
    Ok(path)
}

fn csv_file_name(base_name: &str) -> String {
    format!("{}.csv", base_name)
}
