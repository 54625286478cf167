//! Command-line interface definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::web::{DEFAULT_BIND, DEFAULT_PORT};

/// pdfsmith - PDF generation web service
#[derive(Parser, Debug)]
#[command(name = "pdfsmith")]
#[command(version)]
#[command(about = "Serve PDF generation and download endpoints over HTTP")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Show version, configuration, and environment details
    Info,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = DEFAULT_BIND)]
    pub bind: String,

    /// File served by the download endpoint
    #[arg(long, value_name = "FILE")]
    pub pdf_path: Option<PathBuf>,

    /// URL returned by the generate endpoint
    #[arg(long, value_name = "URL")]
    pub pdf_url: Option<String>,

    /// Maximum request body size in bytes
    #[arg(long, value_name = "BYTES")]
    pub body_limit: Option<usize>,

    /// Use a specific config file instead of the default locations
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
