use log::debug;
use sst_init::error::Result;
use sst_init::registry::VersionResolver;
use sst_init::store::LocalTemplateStore;
use sst_init::Project;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Registry stand-in answering every lookup with a fixed version.
pub struct StubRegistry {
    version: String,
    pub lookups: RefCell<Vec<String>>,
}

impl StubRegistry {
    pub fn new(version: &str) -> Self {
        Self { version: version.to_string(), lookups: RefCell::new(Vec::new()) }
    }
}

impl VersionResolver for StubRegistry {
    fn latest_version(&self, package: &str) -> Result<String> {
        self.lookups.borrow_mut().push(package.to_string());
        Ok(self.version.clone())
    }
}

/// Directory holding the `templates/` fixtures.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// A fresh project directory named `My-App`, so the derived app name is `my-app`.
pub fn project_dir() -> (TempDir, PathBuf) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let root = tmp_dir.path().join("My-App");
    fs::create_dir(&root).unwrap();
    (tmp_dir, root)
}

/// Runs `template` from the fixtures against `project_root`.
pub fn create(template: &str, project_root: &Path, registry: &StubRegistry) -> Result<()> {
    let store = LocalTemplateStore::new(fixtures_root());
    let project = Project::new(project_root, &store, registry);
    project.create(template, "aws")
}

/// Every file below `root` with its content, keyed by relative path.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(entry.path()).unwrap())
        })
        .collect()
}

/// Asserts that two directories are identical, printing the differing files otherwise.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        let actual_files = snapshot(actual);
        let expected_files = snapshot(expected);
        for (path, content) in &actual_files {
            match expected_files.get(path) {
                None => println!("only in actual: {}", path.display()),
                Some(expected) if expected != content => {
                    let (actual, expected) =
                        (String::from_utf8_lossy(content), String::from_utf8_lossy(expected));
                    println!("--- {} (actual)\n{actual}", path.display());
                    println!("--- {} (expected)\n{expected}", path.display());
                }
                Some(_) => {}
            }
        }
        for path in expected_files.keys().filter(|p| !actual_files.contains_key(*p)) {
            println!("only in expected: {}", path.display());
        }
        debug!("compared {} with {}", actual.display(), expected.display());
    }
    assert!(!different, "Directories differ. See above for details.");
}
