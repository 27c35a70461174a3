//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Download electronic textbooks and academic ebooks.
///
/// Searches Library Genesis, Open Library and Project Gutenberg, and
/// downloads from whichever source matches the requested URL.
#[derive(Parser, Debug)]
#[command(name = "textbook-downloader")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for textbooks
    Search(SearchArgs),
    /// Download a textbook
    Download(DownloadArgs),
    /// List available sources
    Sources,
    /// Show detailed information about sources
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Specific source to search (searches all if not specified)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    /// URL of the textbook
    pub url: String,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Source name (auto-detects from the URL hostname if not specified)
    #[arg(short, long)]
    pub source: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Print source descriptors as JSON
    #[arg(long)]
    pub json: bool,
}
