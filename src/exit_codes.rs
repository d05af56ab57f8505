//! Exit code constants for the vsclean CLI.
//!
//! - 0: Success (including dry runs and runs with denied tasks)
//! - 1: User or configuration error (nothing was deleted)
//! - 2: One or more deletions failed after every task was attempted

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unresolvable or protected server root.
pub const USER_ERROR: i32 = 1;

/// Deletion failure: at least one removal failed during a real run.
pub const DELETION_FAILURE: i32 = 2;
