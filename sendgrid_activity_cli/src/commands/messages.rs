//! The `messages` subcommand: queries message activity with the form-style
//! filter flags and optionally exports the result as a CSV file.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use sendgrid_activity_lib::{ActivityTable, Client, MessageQuery};

use crate::output::{self, OutputFormat};

/// Arguments for the `messages` subcommand.
///
/// Each filter flag maps onto one Email Activity query field. A flag that is
/// omitted, or passed an empty value, stays out of the filter set entirely.
#[derive(Args)]
pub struct MessagesArgs {
    /// Filter by recipient address
    #[arg(long)]
    pub to_email: Option<String>,

    /// Filter by sender address
    #[arg(long)]
    pub from_email: Option<String>,

    /// Filter by subject line
    #[arg(long)]
    pub subject: Option<String>,

    /// Filter by delivery status: delivered, not_delivered, processing
    #[arg(long)]
    pub status: Option<String>,

    /// Maximum messages to return (default 100)
    #[arg(long)]
    pub limit: Option<String>,

    /// Write the fetched rows to <NAME>.csv after rendering
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,
}

/// Executes the messages subcommand: builds the filter query, performs one
/// fetch behind a spinner, renders the result, and optionally exports CSV.
pub async fn run(args: &MessagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching message activity...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = client.get_messages(&query).await;
    // Clear the spinner before surfacing any fetch error.
    spinner.finish_and_clear();
    let resp = result?;

    let table = ActivityTable::from_records(&resp.messages);
    eprintln!("{} messages", table.row_count());

    match format {
        OutputFormat::Table => output::print_messages_table(&table),
        OutputFormat::Json => output::print_json(&resp.messages),
        OutputFormat::Csv => output::print_messages_csv(&table)?,
    }

    if let Some(name) = &args.export {
        let path = output::export_csv(&table, name)?;
        eprintln!("Wrote {} rows to {}", table.row_count(), path.display());
    }

    Ok(())
}

fn build_query(args: &MessagesArgs) -> MessageQuery {
    let mut query = MessageQuery::default();
    if let Some(raw) = &args.limit {
        query = query.with_limit(MessageQuery::resolve_limit(raw));
    }
    if let Some(v) = set_value(&args.to_email) {
        query = query.with_to_email(v);
    }
    if let Some(v) = set_value(&args.from_email) {
        query = query.with_from_email(v);
    }
    if let Some(v) = set_value(&args.subject) {
        query = query.with_subject(v);
    }
    if let Some(v) = set_value(&args.status) {
        query = query.with_status(v);
    }
    query
}

/// Treats empty and whitespace-only flag values as "not set".
fn set_value(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sendgrid_activity_lib::DEFAULT_LIMIT;

    fn args() -> MessagesArgs {
        MessagesArgs {
            to_email: None,
            from_email: None,
            subject: None,
            status: None,
            limit: None,
            export: None,
        }
    }

    #[test]
    fn empty_flags_build_a_limit_only_query() {
        let query = build_query(&args());
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert!(query.to_email.is_none());
        assert!(query.from_email.is_none());
        assert!(query.subject.is_none());
        assert!(query.status.is_none());
    }

    #[test]
    fn blank_flag_values_are_treated_as_unset() {
        let mut a = args();
        a.to_email = Some("  ".to_string());
        a.status = Some(String::new());
        a.limit = Some(String::new());
        let query = build_query(&a);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert!(query.to_email.is_none());
        assert!(query.status.is_none());
    }

    #[test]
    fn set_flags_are_trimmed_into_the_query() {
        let mut a = args();
        a.to_email = Some(" a@b.com ".to_string());
        a.limit = Some("25".to_string());
        let query = build_query(&a);
        assert_eq!(query.limit, 25);
        assert_eq!(query.to_email.as_deref(), Some("a@b.com"));
    }
}
