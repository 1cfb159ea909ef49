//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_memory::{core,input,term,types}`
//! namespace and holds the runner's configuration.

pub mod config;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use config::AppConfig;
