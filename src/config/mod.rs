//! Configuration model for vsclean.
//!
//! There is no configuration file. A run is configured by command-line flags
//! plus one environment variable per IDE (`VSCODE_SERVER_DIR`,
//! `CURSOR_SERVER_DIR`) that relocates the server root. The result is an
//! immutable [`Config`] handed by reference to the cleanup core.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{IdeKind, RootSource, RunFlags};
