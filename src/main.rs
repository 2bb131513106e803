//! Flat-file Todo Server
//!
//! A small HTTP API for managing a todo list, persisted as a single
//! pretty-printed JSON array on disk.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use todo_server::cli::Cli;
use todo_server::config::Config;
use todo_server::server::{ApiServer, start_server};
use todo_server::store::TodoStore;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;

    // Override config from CLI arguments
    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.into();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(static_dir) = &cli.static_dir {
        config.static_dir = Some(static_dir.into());
    }

    let store = TodoStore::open(&config.data_file)?;
    info!("Using data file {}", store.path().display());

    let static_dir = config.resolved_static_dir();
    let (shutdown_tx, _addr) = start_server(ApiServer::new(store), config.port, static_dir).await?;

    // Run until interrupted, then drain in-flight requests
    tokio::signal::ctrl_c().await?;
    let _ = shutdown_tx.send(());

    Ok(())
}
