//! Path safety checks applied to every deletion.
//!
//! `authorize` is called once per task, immediately before the task is
//! executed or previewed. Nothing is cached between calls: a path that turns
//! bad mid-run (a parent replaced by a symlink, say) is still rejected on its
//! own without stopping the remaining tasks.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Directories that are never valid deletion targets or server roots.
pub const PROTECTED_SYSTEM_DIRS: &[&str] = &[
    "/", "/bin", "/boot", "/dev", "/etc", "/home", "/lib", "/lib64", "/opt", "/proc", "/root",
    "/sbin", "/sys", "/tmp", "/usr", "/var", "/Users", "/System", "/Library",
];

/// Why a deletion target was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "path", rename_all = "snake_case")]
pub enum DenialReason {
    /// The target path was empty.
    #[error("refusing to remove an empty path")]
    EmptyPath,

    /// The target is the filesystem root, the home directory, a system
    /// directory, or the server root itself.
    #[error("refusing to remove protected path: {}", .0.display())]
    ProtectedRoot(PathBuf),

    /// The target does not live under the server root.
    #[error("refusing to remove path outside the server root: {}", .0.display())]
    OutsideServerRoot(PathBuf),
}

/// Decide whether `path` may be removed.
///
/// Rules are checked in order and the first match wins:
/// 1. empty path
/// 2. `/`, the home directory, a protected system directory, or the server root
/// 3. not a lexical descendant of `server_root` (or its existing parent
///    resolves outside the root through a symlink)
pub fn authorize(path: &Path, server_root: &Path, home_dir: &Path) -> Result<(), DenialReason> {
    if path.as_os_str().is_empty() {
        return Err(DenialReason::EmptyPath);
    }

    let normalized = normalize_lexically(path);
    let root = normalize_lexically(server_root);

    if is_protected(&normalized, home_dir) || normalized == root {
        return Err(DenialReason::ProtectedRoot(normalized));
    }

    if !normalized.is_absolute() || !normalized.starts_with(&root) {
        return Err(DenialReason::OutsideServerRoot(normalized));
    }

    // A symlinked parent directory can point anywhere; compare where it really lands.
    if let Some(parent) = normalized.parent()
        && let Ok(real_parent) = parent.canonicalize()
    {
        let real_root = root.canonicalize().unwrap_or_else(|_| root.clone());
        if !real_parent.starts_with(&real_root) {
            return Err(DenialReason::OutsideServerRoot(normalized));
        }
    }

    Ok(())
}

/// Whether `path` is `/`, the home directory, or a well-known system directory.
pub fn is_protected(path: &Path, home_dir: &Path) -> bool {
    let normalized = normalize_lexically(path);
    if !home_dir.as_os_str().is_empty() && normalized == normalize_lexically(home_dir) {
        return true;
    }
    PROTECTED_SYSTEM_DIRS
        .iter()
        .any(|dir| normalized == Path::new(dir))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, matching how the kernel resolves it.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root() -> PathBuf {
        PathBuf::from("/home/dev/.vscode-server")
    }

    fn home() -> PathBuf {
        PathBuf::from("/home/dev")
    }

    #[test]
    fn test_denies_empty_path() {
        assert_eq!(
            authorize(Path::new(""), &root(), &home()),
            Err(DenialReason::EmptyPath)
        );
    }

    #[test]
    fn test_denies_filesystem_root_and_home_regardless_of_server_root() {
        for server_root in [root(), PathBuf::from("/"), home()] {
            assert!(matches!(
                authorize(Path::new("/"), &server_root, &home()),
                Err(DenialReason::ProtectedRoot(_))
            ));
            assert!(matches!(
                authorize(&home(), &server_root, &home()),
                Err(DenialReason::ProtectedRoot(_))
            ));
        }
    }

    #[test]
    fn test_denies_home_reached_through_traversal() {
        let sneaky = root().join("bin/../..");
        assert!(matches!(
            authorize(&sneaky, &root(), &home()),
            Err(DenialReason::ProtectedRoot(_))
        ));
    }

    #[test]
    fn test_denies_server_root_itself() {
        assert!(matches!(
            authorize(&root(), &root(), &home()),
            Err(DenialReason::ProtectedRoot(_))
        ));
    }

    #[test]
    fn test_denies_paths_outside_server_root() {
        assert!(matches!(
            authorize(Path::new("/home/dev/projects"), &root(), &home()),
            Err(DenialReason::OutsideServerRoot(_))
        ));
        assert!(matches!(
            authorize(&root().join("bin/../../other"), &root(), &home()),
            Err(DenialReason::OutsideServerRoot(_))
        ));
        // Sharing a string prefix is not containment.
        assert!(matches!(
            authorize(
                Path::new("/home/dev/.vscode-server-insiders/bin"),
                &root(),
                &home()
            ),
            Err(DenialReason::OutsideServerRoot(_))
        ));
    }

    #[test]
    fn test_denies_relative_paths() {
        assert!(matches!(
            authorize(Path::new("bin/abc1234"), &root(), &home()),
            Err(DenialReason::OutsideServerRoot(_))
        ));
    }

    #[test]
    fn test_denies_existing_path_outside_root() {
        let temp = TempDir::new().unwrap();
        let server_root = temp.path().join("server");
        let outside = temp.path().join("outside");
        std::fs::create_dir_all(&server_root).unwrap();
        std::fs::create_dir_all(&outside).unwrap();

        assert!(matches!(
            authorize(&outside, &server_root, &home()),
            Err(DenialReason::OutsideServerRoot(_))
        ));
    }

    #[test]
    fn test_authorizes_descendants() {
        assert_eq!(
            authorize(&root().join("bin/abc1234"), &root(), &home()),
            Ok(())
        );
        assert_eq!(
            authorize(&root().join("./data/logs"), &root(), &home()),
            Ok(())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_denies_target_behind_symlinked_parent() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().canonicalize().unwrap();
        let server_root = base.join("server");
        let elsewhere = base.join("elsewhere");
        std::fs::create_dir_all(&server_root).unwrap();
        std::fs::create_dir_all(elsewhere.join("abc1234")).unwrap();
        std::os::unix::fs::symlink(&elsewhere, server_root.join("bin")).unwrap();

        assert!(matches!(
            authorize(&server_root.join("bin/abc1234"), &server_root, &home()),
            Err(DenialReason::OutsideServerRoot(_))
        ));
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(
            normalize_lexically(Path::new("/a/./b/../c")),
            PathBuf::from("/a/c")
        );
        assert_eq!(normalize_lexically(Path::new("/../..")), PathBuf::from("/"));
        assert_eq!(normalize_lexically(Path::new("../x")), PathBuf::from("../x"));
    }

    #[test]
    fn test_is_protected() {
        assert!(is_protected(Path::new("/usr"), &home()));
        assert!(is_protected(Path::new("/usr/"), &home()));
        assert!(is_protected(Path::new("/home/dev/"), &home()));
        assert!(!is_protected(&root(), &home()));
    }
}
