//! Search command handler: query one or all sources and print the hits.

use anyhow::Result;
use textbook_downloader::SourceRegistry;

use crate::ProcessExit;
use crate::cli::SearchArgs;
use crate::output;

/// Runs `search`. Always succeeds, including when nothing is found.
pub async fn run_search_command(
    registry: &SourceRegistry,
    args: &SearchArgs,
) -> Result<ProcessExit> {
    let source = args.source.as_deref().filter(|name| !name.is_empty());
    let results = registry.search(&args.query, source).await;

    if args.json {
        println!("{}", output::to_json(&results)?);
        return Ok(ProcessExit::Success);
    }

    output::print_lines(&output::search_header_lines(&args.query, source));
    if let Some(name) = source
        && registry.find_by_name(name).is_none()
    {
        println!(
            "Unknown source '{name}'. Available sources: {}",
            registry.list_sources().join(", ")
        );
    }
    output::print_lines(&output::search_result_lines(&results));

    Ok(ProcessExit::Success)
}
