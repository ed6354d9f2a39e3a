use crate::{
    cli::Args,
    error::{Error, Result},
    project::Project,
    registry::NpmRegistry,
    store::LocalTemplateStore,
};
use std::path::PathBuf;
use std::time::Duration;

/// Main CLI runner: wires the asset store and registry into a project run.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Creates the project described by the arguments.
    pub fn run(self) -> Result<()> {
        let project_root = self.project_root()?;
        let store = LocalTemplateStore::new(self.args.templates_dir.clone());
        let registry =
            NpmRegistry::new(self.args.registry.clone(), Duration::from_secs(self.args.timeout))?;

        log::debug!(
            "Templates from {}, registry {}",
            self.args.templates_dir.display(),
            self.args.registry
        );
        let project = Project::new(project_root, &store, &registry);
        project.create(&self.args.template, &self.args.home)?;
        println!("Project created successfully in {}.", project.root().display());
        Ok(())
    }

    /// Absolute project directory, so its base name is always available.
    fn project_root(&self) -> Result<PathBuf> {
        let dir = match &self.args.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| Error::filesystem(".", e))?,
        };
        dir.canonicalize().map_err(|e| Error::filesystem(&dir, e))
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
