//! Info command handler: print each source's name and base URL.

use anyhow::Result;
use textbook_downloader::SourceRegistry;

use crate::ProcessExit;
use crate::cli::InfoArgs;
use crate::output;

pub fn run_info_command(registry: &SourceRegistry, args: &InfoArgs) -> Result<ProcessExit> {
    let info = registry.source_info();
    if args.json {
        println!("{}", output::to_json(&info)?);
    } else {
        output::print_lines(&output::source_info_lines(&info));
    }
    Ok(ProcessExit::Success)
}
