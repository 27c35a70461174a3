//! CLI entry point for the textbook downloader.

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use textbook_downloader::build_default_source_registry;
use tracing::debug;

mod cli;
mod commands;
mod output;
mod terminal;

use cli::{Cli, Command};

/// Process exit outcome derived from a command's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessExit {
    Success,
    Failure,
}

impl From<ProcessExit> for ExitCode {
    fn from(exit: ProcessExit) -> Self {
        match exit {
            ProcessExit::Success => ExitCode::SUCCESS,
            ProcessExit::Failure => ExitCode::from(1),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    let no_color = terminal::no_color_env_requested() || terminal::is_dumb_terminal();
    terminal::init_tracing(
        terminal::resolve_default_log_level(cli.quiet, cli.verbose),
        no_color,
    );
    debug!(?cli, "CLI arguments parsed");

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ProcessExit::Failure.into());
    };

    let registry = build_default_source_registry();
    debug!(?registry, "Source registry ready");

    let exit = match command {
        Command::Search(args) => commands::run_search_command(&registry, args).await?,
        Command::Download(args) => commands::run_download_command(&registry, args).await?,
        Command::Sources => commands::run_sources_command(&registry),
        Command::Info(args) => commands::run_info_command(&registry, args)?,
    };

    Ok(exit.into())
}

