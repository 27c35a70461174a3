//! Sources command handler: list registered source names.

use textbook_downloader::SourceRegistry;

use crate::ProcessExit;
use crate::output;

pub fn run_sources_command(registry: &SourceRegistry) -> ProcessExit {
    output::print_lines(&output::source_list_lines(&registry.list_sources()));
    ProcessExit::Success
}
