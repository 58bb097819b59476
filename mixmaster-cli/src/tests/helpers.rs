//! Test helpers for writing catalog and request files.

use camino::{Utf8Path, Utf8PathBuf};
use mixmaster_core::BUNDLED_CATALOG;
use tempfile::TempDir;

/// Temporary directory holding a copy of the bundled catalog.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("cocktails.json"), BUNDLED_CATALOG.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join("cocktails.json")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `text` to `name` inside the workspace and return its path.
    pub(super) fn write(&self, name: &str, text: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, text.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}
