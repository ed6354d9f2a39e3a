//! Project creation: runs a template's preset against a project directory.

use crate::constants::{IGNORE_FILE, MARKER_FILE};
use crate::error::{Error, Result};
use crate::ioutils::project_name;
use crate::preset::Preset;
use crate::registry::VersionResolver;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use crate::steps::{self, RunState, StepContext};
use crate::store::TemplateStore;
use log::info;
use std::path::{Path, PathBuf};

/// Materializes templates into one project directory.
pub struct Project<'a> {
    root: PathBuf,
    store: &'a dyn TemplateStore,
    resolver: &'a dyn VersionResolver,
    renderer: Box<dyn TemplateRenderer + 'a>,
}

impl<'a> Project<'a> {
    pub fn new<P: Into<PathBuf>>(
        root: P,
        store: &'a dyn TemplateStore,
        resolver: &'a dyn VersionResolver,
    ) -> Self {
        Self {
            root: root.into(),
            store,
            resolver,
            renderer: Box::new(MiniJinjaRenderer::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the project marker file already exists.
    pub fn is_initialized(&self) -> bool {
        self.root.join(MARKER_FILE).exists()
    }

    /// Runs the preset of `template_name`, then flushes config files and the
    /// ignore file, in that order.
    ///
    /// The first failing step aborts the run; steps that already wrote to the
    /// project are not rolled back.
    pub fn create(&self, template_name: &str, home: &str) -> Result<()> {
        if self.is_initialized() {
            return Err(Error::ProjectAlreadyInitialized {
                marker: self.root.join(MARKER_FILE).display().to_string(),
            });
        }

        let app = project_name(&self.root)?;
        info!("Creating project {app} from template {template_name}");

        let preset = Preset::load(self.store, template_name)?;
        let ctx = StepContext {
            project_root: &self.root,
            template_name,
            app: &app,
            home,
            store: self.store,
            resolver: self.resolver,
            renderer: self.renderer.as_ref(),
        };
        let mut state = RunState::new();

        for (index, step) in preset.steps.iter().enumerate() {
            info!("Step #{index}: {}", step.kind());
            steps::execute(step, &ctx, &mut state).map_err(|e| Error::Step {
                index,
                kind: step.kind().to_string(),
                source: Box::new(e),
            })?;
        }

        state.configs.flush(&self.root)?;
        state.ignore_sections.merge_into(self.root.join(IGNORE_FILE))?;

        info!("Project {app} created in {}", self.root.display());
        Ok(())
    }
}
