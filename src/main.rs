// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use regru_dns::{
    config::ProviderConfig,
    constants::{ENV_API_ENDPOINT, ENV_CERT_FILE, ENV_KEY_FILE},
    dns_errors::RegruError,
    record_resource::{
        create_record, delete_record, read_record, RecordDescriptor, ResourceState,
    },
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Manage DNS records at Reg.ru.
///
/// Credentials are read from `REGRU_API_USERNAME` and `REGRU_API_PASSWORD`.
#[derive(Debug, Parser)]
#[command(name = "regru-dns", version, about)]
struct Cli {
    /// API endpoint
    #[arg(long, env = ENV_API_ENDPOINT)]
    endpoint: Option<String>,

    /// Client certificate for mutual TLS (requires --key-file)
    #[arg(long, env = ENV_CERT_FILE)]
    cert_file: Option<PathBuf>,

    /// Client private key for mutual TLS (requires --cert-file)
    #[arg(long, env = ENV_KEY_FILE)]
    key_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a record and print its identity
    Create(RecordArgs),
    /// Report the record state (not checked against the registrar)
    Read(RecordArgs),
    /// Delete a record
    Delete(RecordArgs),
}

#[derive(Debug, Args)]
struct RecordArgs {
    /// Record type: A, AAAA, CNAME, MX or TXT
    #[arg(long = "type")]
    record_type: String,

    /// Subdomain label, e.g. www or @
    #[arg(long)]
    name: String,

    /// Record content; MX uses "priority mailserver"
    #[arg(long)]
    record: String,

    /// Zone (domain) the record belongs to
    #[arg(long)]
    zone: String,
}

impl From<RecordArgs> for RecordDescriptor {
    fn from(args: RecordArgs) -> Self {
        RecordDescriptor::new(args.record_type, args.name, args.record, args.zone)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("regru-dns")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<ExitCode> {
    // Initialize logging with custom format
    // Format: timestamp file:line LEVEL message
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug regru-dns create ...
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json regru-dns create ...
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    debug!("Logging initialized with file and line number tracking");

    Ok(report(run(cli).await))
}

/// Log and print a failed operation; the process exit code follows the outcome.
fn report(result: Result<(), RegruError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(reason = e.status_reason(), error = %e, "Operation failed");
            eprintln!("Error: {e}");
            eprintln!("Reason: {}", e.status_reason());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RegruError> {
    let mut config = ProviderConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config.api_endpoint = endpoint;
    }
    config.cert_file = cli.cert_file.or(config.cert_file);
    config.key_file = cli.key_file.or(config.key_file);

    match cli.command {
        Command::Create(args) => {
            let client = config.build_client()?;
            let record = RecordDescriptor::from(args);
            let id = create_record(&client, &record).await?;
            println!("{id}");
        }
        Command::Read(args) => {
            let record = RecordDescriptor::from(args);
            let state = read_record(&record, &ResourceState::Present(record.identity()))?;
            info!(state = ?state, "Read returns the held state unchanged");
            if let ResourceState::Present(id) = state {
                println!("{id}");
            }
        }
        Command::Delete(args) => {
            let client = config.build_client()?;
            let record = RecordDescriptor::from(args);
            delete_record(&client, &record).await?;
        }
    }

    Ok(())
}
