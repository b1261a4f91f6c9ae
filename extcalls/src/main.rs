//! # extcalls-cli
//!
//! Command-line front end for the `extcalls` helpers. Every subcommand except
//! `sum` performs one request against the configured endpoint and prints the
//! resulting JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use extcalls::{sum, ClientConfig, Number, RemoteDataClient, DEFAULT_ENDPOINT};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Call the remote data endpoint from the command line.")]
struct Cli {
    /// URL of the remote data endpoint.
    #[arg(short, long, global = true, env = "EXTCALLS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Adds two numbers locally. No request is made.
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    #[command(flatten)]
    Remote(RemoteCommand),
}

/// Subcommands that perform a request against the endpoint.
#[derive(Subcommand, Debug)]
enum RemoteCommand {
    /// GETs the endpoint. Prints `null` when the status is not 200.
    Fetch,

    /// Adds two numbers and POSTs `{"result": <sum>}`.
    SumAndPost {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    /// POSTs the current time as `{"datetime": <epoch seconds>}`.
    PostDatetime,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,extcalls=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sum { a, b } => print_json(&sum(a, b)),
        Commands::Remote(command) => call_remote(&cli.endpoint, command).await,
    }
}

/// Handles the subcommands that talk to the endpoint.
async fn call_remote(endpoint: &str, command: RemoteCommand) -> Result<()> {
    let config = ClientConfig::with_endpoint(endpoint)?;
    let client = RemoteDataClient::new(config).context("Failed to build HTTP client")?;

    match command {
        RemoteCommand::Fetch => print_json(&client.fetch().await?),
        RemoteCommand::SumAndPost { a, b } => print_json(&client.sum_and_post(a, b).await?),
        RemoteCommand::PostDatetime => print_json(&client.post_current_datetime().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
