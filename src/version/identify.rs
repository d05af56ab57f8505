//! Name classification for version-bearing directories.
//!
//! Which recognizer applies is decided by where the name was found: the
//! server recognizer only runs inside the binaries directory and the
//! extension recognizer only inside `extensions/`. A name like
//! `tool-abc1234` is therefore never asked to be both.

use regex::Regex;
use std::sync::LazyLock;

/// Names inside the binaries directory that are never server versions.
pub const RESERVED_SERVER_NAMES: &[&str] =
    &["multiplex-server", "cli", "stable", "insiders", "latest"];

static SERVER_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{7,40}(?:-[A-Za-z0-9._-]+)?$").expect("server version regex is valid")
});

// Greedy base: the split lands on the last hyphen that starts a d.d.d version.
static EXTENSION_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+)-(\d+\.\d+\.\d+.*)$").expect("extension version regex is valid")
});

/// What a directory name turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Not a version directory; left alone.
    Unrecognized,
    /// A server build named by a commit-hash-like token.
    ServerVersion {
        /// The full directory name.
        identity: String,
    },
    /// An installed extension, `{base}-{version}`.
    ExtensionVersion {
        /// Extension id, e.g. `ms-python.python`.
        base: String,
        /// Version suffix including any pre-release or platform tail.
        version: String,
    },
}

/// Classify a child of the binaries directory.
pub fn classify_server(name: &str) -> Classification {
    if RESERVED_SERVER_NAMES.contains(&name) {
        return Classification::Unrecognized;
    }
    if SERVER_VERSION_RE.is_match(name) {
        Classification::ServerVersion {
            identity: name.to_string(),
        }
    } else {
        Classification::Unrecognized
    }
}

/// Classify a child of the extensions directory.
pub fn classify_extension(name: &str) -> Classification {
    match EXTENSION_VERSION_RE.captures(name) {
        Some(caps) => Classification::ExtensionVersion {
            base: caps[1].to_string(),
            version: caps[2].to_string(),
        },
        None => Classification::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(identity: &str) -> Classification {
        Classification::ServerVersion {
            identity: identity.to_string(),
        }
    }

    fn extension(base: &str, version: &str) -> Classification {
        Classification::ExtensionVersion {
            base: base.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_short_and_full_hashes_are_server_versions() {
        assert_eq!(classify_server("abc1234"), server("abc1234"));
        let full = "e170252f762678dec6ca2cc69aba1570769a5d39";
        assert_eq!(classify_server(full), server(full));
    }

    #[test]
    fn test_hash_with_suffix_is_server_version() {
        assert_eq!(classify_server("abc1234-linux-x64"), server("abc1234-linux-x64"));
        assert_eq!(classify_server("abc1234-1.2_rc.3"), server("abc1234-1.2_rc.3"));
    }

    #[test]
    fn test_reserved_names_are_not_server_versions() {
        for name in RESERVED_SERVER_NAMES {
            assert_eq!(classify_server(name), Classification::Unrecognized, "{name}");
        }
    }

    #[test]
    fn test_non_hash_names_are_not_server_versions() {
        // Too short, too long, uppercase, non-hex, bad suffix.
        assert_eq!(classify_server("abc123"), Classification::Unrecognized);
        assert_eq!(classify_server(&"a".repeat(41)), Classification::Unrecognized);
        assert_eq!(classify_server("ABC1234"), Classification::Unrecognized);
        assert_eq!(classify_server("xyz1234"), Classification::Unrecognized);
        assert_eq!(classify_server("abc1234-"), Classification::Unrecognized);
        assert_eq!(classify_server("abc1234-a/b"), Classification::Unrecognized);
        assert_eq!(classify_server("Stable-abc1234"), Classification::Unrecognized);
    }

    #[test]
    fn test_extension_split_keeps_dotted_base() {
        assert_eq!(
            classify_extension("publisher.ext-1.2.3"),
            extension("publisher.ext", "1.2.3")
        );
    }

    #[test]
    fn test_extension_split_keeps_prerelease_tail() {
        assert_eq!(
            classify_extension("publisher.ext-1.2.3-beta.1"),
            extension("publisher.ext", "1.2.3-beta.1")
        );
        assert_eq!(
            classify_extension("ms-python.python-2024.2.1-linux-x64"),
            extension("ms-python.python", "2024.2.1-linux-x64")
        );
    }

    #[test]
    fn test_extension_split_keeps_hyphenated_base() {
        assert_eq!(
            classify_extension("ms-vscode-remote.remote-ssh-0.107.1"),
            extension("ms-vscode-remote.remote-ssh", "0.107.1")
        );
    }

    #[test]
    fn test_non_versioned_extension_entries() {
        assert_eq!(classify_extension("extensions.json"), Classification::Unrecognized);
        assert_eq!(classify_extension(".obsolete"), Classification::Unrecognized);
        assert_eq!(classify_extension("foo-1.2"), Classification::Unrecognized);
        assert_eq!(classify_extension("-1.2.3"), Classification::Unrecognized);
    }

    #[test]
    fn test_recognizers_do_not_cross_contexts() {
        // A hash-looking extension version is still an extension in extensions/.
        assert_eq!(
            classify_extension("tool.x-1.0.0-abc1234"),
            extension("tool.x", "1.0.0-abc1234")
        );
        // And an extension-looking name is never a server version.
        assert_eq!(classify_server("foo.bar-1.0.0"), Classification::Unrecognized);
    }
}
