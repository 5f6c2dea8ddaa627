mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sendgrid_activity_lib::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "sgactivity")]
#[command(about = "Query SendGrid email activity and export it as CSV")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query message activity
    Messages(commands::messages::MessagesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sendgrid_activity_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let api_key = std::env::var("SENDGRID_API_KEY")
        .context("SENDGRID_API_KEY is not set; export it or put it in a .env file")?;
    let client = Client::new(&api_key);

    match &cli.command {
        Commands::Messages(args) => commands::messages::run(args, &client, &format).await?,
    }

    Ok(())
}
