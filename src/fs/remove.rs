//! Filesystem removal that never follows symlinks.

use std::fs;
use std::io;
use std::path::Path;

/// Remove a file, symlink, or directory tree at `path`.
///
/// The entry is inspected with `symlink_metadata`, so a symlink is removed as
/// a link and its target is left alone. A missing path is reported as
/// `NotFound`; callers decide whether that is a failure.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}
