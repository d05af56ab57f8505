//! Version recognition and retention.
//!
//! A scan turns directory children into [`VersionEntry`] values using a
//! context-specific recognizer; [`resolve`] then keeps the newest entry of
//! each group and marks the rest for removal.

mod entry;
mod identify;
mod retention;

pub use entry::{SERVER_GROUP, VersionEntry, scan_extension_versions, scan_server_versions};
pub use retention::{RetentionDecision, resolve};
