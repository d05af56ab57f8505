//! Scanning a directory's immediate children into version entries.

use super::identify::{Classification, classify_extension, classify_server};
use crate::error::{CleanError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Group key shared by every server binary version.
pub const SERVER_GROUP: &str = "server";

/// A version-bearing directory found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Server directory name, or the extension version string.
    pub identity: String,
    /// `"server"` for binaries, the extension base name otherwise.
    pub group_key: String,
    /// The directory's own file name.
    pub name: String,
    /// Absolute path to the directory.
    pub path: PathBuf,
    /// Last modification time; `UNIX_EPOCH` when it could not be read.
    pub modified_at: SystemTime,
}

/// Entries recognized by a scan plus anything worth reporting.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Recognized entries, sorted by name.
    pub entries: Vec<VersionEntry>,
    /// Non-fatal problems (unreadable timestamps).
    pub warnings: Vec<String>,
    /// Child directory names that no recognizer accepted.
    pub skipped: Vec<String>,
}

/// Scan the binaries directory for server versions.
pub fn scan_server_versions(dir: &Path) -> Result<ScanOutcome> {
    scan_children(dir, |name| match classify_server(name) {
        Classification::ServerVersion { identity } => Some((SERVER_GROUP.to_string(), identity)),
        _ => None,
    })
}

/// Scan the extensions directory for versioned extensions.
pub fn scan_extension_versions(dir: &Path) -> Result<ScanOutcome> {
    scan_children(dir, |name| match classify_extension(name) {
        Classification::ExtensionVersion { base, version } => Some((base, version)),
        _ => None,
    })
}

/// Walk the immediate child directories of `dir`.
///
/// `recognize` maps a name to `(group_key, identity)` or rejects it.
fn scan_children<F>(dir: &Path, recognize: F) -> Result<ScanOutcome>
where
    F: Fn(&str) -> Option<(String, String)>,
{
    let entries = fs::read_dir(dir).map_err(|e| {
        CleanError::ScanError(format!("failed to list '{}': {}", dir.display(), e))
    })?;

    let mut outcome = ScanOutcome::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                record_unreadable_entry(&mut outcome, dir, &e);
                continue;
            }
        };
        let path = entry.path();

        // Skip non-directories
        if !path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(path = %path.display(), "skipping non UTF-8 directory name");
            continue;
        };

        let Some((group_key, identity)) = recognize(&name) else {
            debug!(%name, "not a version directory, skipping");
            outcome.skipped.push(name);
            continue;
        };

        let modified_at = match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(time) => time,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable modification time, treating as oldest"
                );
                outcome.warnings.push(format!(
                    "could not read modification time of '{}': {}; treated as oldest",
                    path.display(),
                    e
                ));
                SystemTime::UNIX_EPOCH
            }
        };

        outcome.entries.push(VersionEntry {
            identity,
            group_key,
            name,
            path,
            modified_at,
        });
    }

    outcome.entries.sort_by(|a, b| a.name.cmp(&b.name));
    outcome.skipped.sort();

    Ok(outcome)
}

fn record_unreadable_entry(outcome: &mut ScanOutcome, dir: &Path, error: &io::Error) {
    warn!(dir = %dir.display(), %error, "unreadable directory entry");
    outcome.warnings.push(format!(
        "could not read an entry of '{}': {}",
        dir.display(),
        error
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_server_versions_only_takes_hash_directories() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path();
        for name in ["abc1234", "def5678-linux-x64", "stable", "cli", "notes"] {
            fs::create_dir_all(bin.join(name)).unwrap();
        }
        // Files never count, even with a hash-like name.
        fs::write(bin.join("0123456"), "file").unwrap();

        let outcome = scan_server_versions(bin).unwrap();

        let names: Vec<_> = outcome.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["abc1234", "def5678-linux-x64"]);
        assert!(outcome.entries.iter().all(|e| e.group_key == SERVER_GROUP));
        assert_eq!(outcome.entries[1].identity, "def5678-linux-x64");
        assert_eq!(outcome.skipped, vec!["cli", "notes", "stable"]);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_scan_extension_versions_groups_by_base() {
        let temp = TempDir::new().unwrap();
        let ext = temp.path();
        for name in ["foo.bar-1.0.0", "foo.bar-1.2.0", "baz.qux-0.1.0-beta.2", "readme"] {
            fs::create_dir_all(ext.join(name)).unwrap();
        }
        fs::write(ext.join("extensions.json"), "[]").unwrap();

        let outcome = scan_extension_versions(ext).unwrap();

        assert_eq!(outcome.entries.len(), 3);
        let baz = &outcome.entries[0];
        assert_eq!(baz.group_key, "baz.qux");
        assert_eq!(baz.identity, "0.1.0-beta.2");
        assert_eq!(baz.path, ext.join("baz.qux-0.1.0-beta.2"));
        assert_eq!(outcome.entries[1].group_key, "foo.bar");
        assert_eq!(outcome.entries[2].identity, "1.2.0");
        assert_eq!(outcome.skipped, vec!["readme"]);
    }

    #[test]
    fn test_scan_missing_directory_is_scan_error() {
        let temp = TempDir::new().unwrap();
        let result = scan_server_versions(&temp.path().join("missing"));
        assert!(matches!(result, Err(CleanError::ScanError(_))));
    }

    #[test]
    fn test_unreadable_entry_becomes_warning() {
        let mut outcome = ScanOutcome::default();
        let error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");

        record_unreadable_entry(&mut outcome, Path::new("/srv/bin"), &error);

        assert!(outcome.entries.is_empty());
        assert_eq!(
            outcome.warnings,
            vec!["could not read an entry of '/srv/bin': denied".to_string()]
        );
    }
}
