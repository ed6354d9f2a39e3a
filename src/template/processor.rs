use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;
use crate::store::{StoreEntry, TemplateStore};

use super::operation::TemplateOperation;

/// Turns entries of a template's `files/` tree into operations on the project.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    store: &'a dyn TemplateStore,

    /// Other
    files_root: &'a Path,
    output_root: &'a Path,
    context: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        store: &'a dyn TemplateStore,
        files_root: &'a Path,
        output_root: &'a Path,
        context: &'a serde_json::Value,
    ) -> Self {
        Self { engine, store, files_root, output_root, context }
    }

    /// Maps a store path below `files_root` to its destination in the project.
    fn get_target_path(&self, source: &Path) -> Result<PathBuf> {
        let relative = source.strip_prefix(self.files_root).map_err(|e| {
            Error::Other(anyhow::anyhow!(
                "'{}' is outside of '{}': {e}",
                source.display(),
                self.files_root.display()
            ))
        })?;
        Ok(self.output_root.join(relative))
    }

    /// Processes a store entry and determines the operation to perform.
    ///
    /// Returns `None` for the walked root itself.
    pub fn process(&self, entry: &StoreEntry) -> Result<Option<TemplateOperation>> {
        if entry.path == self.files_root {
            return Ok(None);
        }
        let target = self.get_target_path(&entry.path)?;
        let target_exists = target.exists();

        if entry.is_dir {
            return Ok(Some(TemplateOperation::CreateDirectory { target, target_exists }));
        }
        if target_exists {
            return Ok(Some(TemplateOperation::Skip { source: entry.path.clone(), target }));
        }

        let template = self
            .store
            .read_file(&entry.path)
            .map_err(|e| Error::filesystem(&entry.path, e))?;
        let template_name = entry.path.to_slash_string()?;
        let content = self.engine.render(&template, self.context, Some(&template_name))?;

        Ok(Some(TemplateOperation::Write { source: entry.path.clone(), target, content }))
    }
}
