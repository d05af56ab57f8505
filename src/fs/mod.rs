//! Filesystem utilities for vsclean.
//!
//! Every removal goes through two steps: `guard::authorize` decides whether a
//! path may be touched at all, then `remove::remove_path` deletes it without
//! following symlinks.

pub mod guard;
mod remove;

pub use guard::{DenialReason, authorize, is_protected};
pub use remove::remove_path;
