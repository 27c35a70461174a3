//! CLI command handlers.

mod download;
mod info;
mod search;
mod sources;

pub use download::run_download_command;
pub use info::run_info_command;
pub use search::run_search_command;
pub use sources::run_sources_command;
