use crate::store::interface::{StoreEntry, TemplateStore};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Template store backed by a directory on the local filesystem.
pub struct LocalTemplateStore<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalTemplateStore<P> {
    /// Creates a new store rooted at `root`, the directory containing `templates/`.
    pub fn new(root: P) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.as_ref()
    }
}

impl<P: AsRef<Path>> TemplateStore for LocalTemplateStore<P> {
    fn read_file(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(self.root().join(path))
    }

    fn walk(&self, dir: &Path) -> std::io::Result<Vec<StoreEntry>> {
        let root = self.root();
        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(root.join(dir)).sort_by_file_name() {
            let dir_entry = dir_entry?;
            let relative = dir_entry.path().strip_prefix(root).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
            })?;
            entries.push(StoreEntry {
                path: PathBuf::from(relative),
                is_dir: dir_entry.file_type().is_dir(),
            });
        }
        Ok(entries)
    }
}
