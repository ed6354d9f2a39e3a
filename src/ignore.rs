use crate::constants::{DEFAULT_IGNORE_HEADER, DEFAULT_IGNORE_PATH};
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::Path;

/// A header comment plus the path it introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSection {
    pub header: String,
    pub path: String,
}

impl IgnoreSection {
    pub fn new(header: impl Into<String>, path: impl Into<String>) -> Self {
        Self { header: header.into(), path: path.into() }
    }
}

/// Ignore sections registered during a run, default section first.
#[derive(Debug, Clone)]
pub struct IgnoreSections {
    sections: Vec<IgnoreSection>,
}

impl Default for IgnoreSections {
    fn default() -> Self {
        Self { sections: vec![IgnoreSection::new(DEFAULT_IGNORE_HEADER, DEFAULT_IGNORE_PATH)] }
    }
}

impl IgnoreSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: IgnoreSection) {
        self.sections.push(section);
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnoreSection> {
        self.sections.iter()
    }

    /// Appends every section whose path is not already in `ignore_file`.
    ///
    /// The file is created if absent. Existing content is never rewritten.
    pub fn merge_into<P: AsRef<Path>>(&self, ignore_file: P) -> Result<()> {
        let ignore_file = ignore_file.as_ref();
        let fs_error = |e: std::io::Error| Error::filesystem(ignore_file, e);

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(ignore_file)
            .map_err(fs_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(fs_error)?;
        let mut content = String::from_utf8_lossy(&bytes).into_owned();

        for section in &self.sections {
            if content.contains(&section.path) {
                debug!("'{}' is already ignored", section.path);
                continue;
            }
            let addition = render_section(&content, section);
            file.write_all(addition.as_bytes()).map_err(fs_error)?;
            content.push_str(&addition);
            info!("Added '{}' to {}", section.path, ignore_file.display());
        }
        Ok(())
    }
}

/// Text appended after `content` for `section`: the current last line is
/// terminated, and a blank line separates the section from earlier content.
fn render_section(content: &str, section: &IgnoreSection) -> String {
    let mut out = String::new();
    if !content.is_empty() {
        if !content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&section.header);
    out.push('\n');
    out.push_str(&section.path);
    out.push('\n');
    out
}
