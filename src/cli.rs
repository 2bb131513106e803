//! CLI definitions for todo-server.
//!
//! This module defines the CLI structure using clap's derive macros.

use clap::Parser;

/// Flat-file todo list HTTP API server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the JSON data file (overrides config)
    #[arg(short, long)]
    pub data_file: Option<String>,

    /// Port to bind the HTTP server on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory of static client files to serve at / (overrides config)
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2")]
    pub log: String,
}
