use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|e| Error::filesystem(dest_path, e))
}

/// Writes `content` to `dest_path`, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|e| Error::filesystem(dest_path, e))
}

/// Derives the project name from the base name of `project_root`, lowercased.
///
/// Relative roots such as `.` are resolved against the current directory first.
pub fn project_name<P: AsRef<Path>>(project_root: P) -> Result<String> {
    let project_root = project_root.as_ref();
    let resolved = match project_root.canonicalize() {
        Ok(path) => path,
        Err(_) => std::path::absolute(project_root)
            .map_err(|e| Error::filesystem(project_root, e))?,
    };
    let name = resolved.file_name().and_then(|name| name.to_str()).ok_or_else(|| {
        Error::Other(anyhow::anyhow!(
            "Cannot derive a project name from '{}'",
            project_root.display()
        ))
    })?;
    Ok(name.to_lowercase())
}
