//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Convert Markdown into print-document content blocks
#[derive(Debug, Parser)]
#[command(name = "printmark", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a markdown file to a content-model JSON document
    Convert(ConvertArgs),

    /// Show version and environment information
    Info,
}

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input markdown file, or '-' for stdin
    pub input: PathBuf,

    /// Output JSON path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (default: ./printmark.toml, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Document title; also drives the suggested export filename
    #[arg(long)]
    pub title: Option<String>,

    /// Document author
    #[arg(long)]
    pub author: Option<String>,

    /// Document subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Comma-separated keywords
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Compact single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Increase verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

// ============================================================
// Tests
// ============================================================
