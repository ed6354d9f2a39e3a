use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path
    /// contains invalid Unicode characters.
    ///
    /// # Returns
    /// * `Ok(&str)` - A string slice representing the path
    /// * `Err(Error)` - If the path contains invalid Unicode characters
    ///
    /// # Examples
    /// ```
    /// use sst_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("templates/js/files");
    /// assert_eq!(path.to_str_checked().unwrap(), "templates/js/files");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Converts a path to a `/`-separated string, so template names and log
    /// lines look the same on every platform.
    ///
    /// # Examples
    /// ```
    /// use sst_init::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("files").join("package.json");
    /// assert_eq!(path.to_slash_string().unwrap(), "files/package.json");
    /// ```
    fn to_slash_string(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_slash_string(&self) -> Result<String> {
        Ok(self.to_str_checked()?.replace('\\', "/"))
    }
}
