//! Shared utilities for negprint-cli
//!
//! Argument definitions, value parsing, and the flag-to-config builder are
//! kept out of `main.rs` so they can be tested without spawning the binary.

pub mod args;
pub mod builders;
pub mod parsers;

pub use args::Cli;
pub use builders::build_config;
pub use parsers::parse_paper_size;
