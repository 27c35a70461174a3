//! Download command handler.

use anyhow::Result;
use textbook_downloader::SourceRegistry;
use tracing::debug;

use crate::ProcessExit;
use crate::cli::DownloadArgs;
use crate::output;

/// Runs `download`, mapping any failure to [`ProcessExit::Failure`].
///
/// Source errors are reported on stdout next to the failure marker rather
/// than propagated, so the process exits 1 instead of printing an error chain.
pub async fn run_download_command(
    registry: &SourceRegistry,
    args: &DownloadArgs,
) -> Result<ProcessExit> {
    let output_display = args.output.display().to_string();
    let source = args.source.as_deref().filter(|name| !name.is_empty());
    output::print_lines(&output::download_header_lines(
        &args.url,
        &output_display,
        source,
    ));

    match registry.download(&args.url, &args.output, source).await {
        Ok(true) => {
            println!("{}", output::download_success_line(&output_display));
            Ok(ProcessExit::Success)
        }
        Ok(false) => {
            println!("{}", output::download_failure_line());
            Ok(ProcessExit::Failure)
        }
        Err(error) => {
            debug!(error = ?error, "Download failed");
            println!("Error: {error}");
            println!("{}", output::download_failure_line());
            Ok(ProcessExit::Failure)
        }
    }
}
