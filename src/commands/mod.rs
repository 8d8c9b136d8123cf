//! CLI command handlers.

mod export;

pub use export::run_export_command;
