use crate::config::{Config, IdeKind, RunFlags};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub(crate) const HASH_OLD: &str = "1111111111111111111111111111111111111111";
pub(crate) const HASH_MID: &str = "2222222222222222222222222222222222222222";
pub(crate) const HASH_NEW: &str = "3333333333333333333333333333333333333333";

/// A fake home directory holding a server root at `~/.vscode-server`.
pub(crate) struct ServerFixture {
    _temp: TempDir,
    home: PathBuf,
    root: PathBuf,
}

impl ServerFixture {
    pub(crate) fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let home = temp.path().canonicalize().unwrap().join("home");
        let root = home.join(".vscode-server");
        fs::create_dir_all(&root).unwrap();
        Self {
            _temp: temp,
            home,
            root,
        }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Create a populated directory whose mtime is `secs` after the epoch.
    pub(crate) fn version_dir(&self, rel: &str, secs: u64) -> PathBuf {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("payload.bin"), rel).unwrap();
        set_mtime(&dir, secs);
        dir
    }

    pub(crate) fn dir(&self, rel: &str) -> PathBuf {
        let dir = self.path(rel);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("content"), rel).unwrap();
        dir
    }

    pub(crate) fn file(&self, rel: &str) -> PathBuf {
        let file = self.path(rel);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, rel).unwrap();
        file
    }

    pub(crate) fn config(&self, ide: IdeKind, flags: RunFlags) -> Config {
        Config::resolve(
            ide,
            Some(self.root.clone()),
            |_: &str| -> Option<OsString> { None },
            &self.home,
            flags,
        )
        .unwrap()
    }

    /// Every path under the root, sorted, relative to the root.
    pub(crate) fn snapshot(&self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        collect(&self.root, &self.root, &mut out);
        out.sort();
        out
    }
}

pub(crate) fn set_mtime(path: &Path, secs: u64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    fs::File::open(path).unwrap().set_modified(time).unwrap();
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        out.push(path.strip_prefix(base).unwrap().to_path_buf());
        if entry.file_type().unwrap().is_dir() {
            collect(base, &path, out);
        }
    }
}
