use std::path::{Path, PathBuf};

/// A single entry yielded by [`TemplateStore::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    /// Path relative to the store root.
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Read-only, hierarchical source of template assets.
///
/// Paths are relative to the store root, e.g. `templates/js/preset.json`.
pub trait TemplateStore {
    /// Reads the file at `path` as UTF-8 text.
    fn read_file(&self, path: &Path) -> std::io::Result<String>;

    /// Lists `dir` and everything below it.
    ///
    /// # Returns
    /// * `Vec<StoreEntry>` - The walked directory itself first, then its
    ///   contents, parents always before their children, siblings sorted by
    ///   file name
    fn walk(&self, dir: &Path) -> std::io::Result<Vec<StoreEntry>>;
}
