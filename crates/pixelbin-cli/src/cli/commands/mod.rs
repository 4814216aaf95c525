//! CLI command handlers, one per file.

mod build;
mod completions;
mod config;
mod parse;

pub use build::run_build;
pub use completions::run_completions;
pub use config::run_config;
pub use parse::run_parse;
