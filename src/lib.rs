//! Textbook Downloader Core Library
//!
//! Search and download electronic textbooks and academic ebooks across a set
//! of catalog sources. Requests are dispatched to a source either by explicit
//! name or by matching the hostname of the requested URL.
//!
//! # Architecture
//!
//! - [`source`] - The [`Source`] trait, the built-in providers, and the
//!   [`SourceRegistry`] dispatcher

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod source;

// Re-export commonly used types
pub use source::{
    GutenbergSource, LibraryGenesisSource, OpenLibrarySource, SearchResult, Source, SourceError,
    SourceInfo, SourceRegistry, build_default_source_registry,
};
