//! Step executors
//!
//! Each executor either records into the run state (flushed by the
//! orchestrator once every step has run) or writes the project directly.

pub mod copy;
pub mod gitignore;
pub mod npm;
pub mod patch;

use crate::accumulator::ConfigAccumulator;
use crate::error::Result;
use crate::ignore::IgnoreSections;
use crate::preset::Step;
use crate::registry::VersionResolver;
use crate::renderer::TemplateRenderer;
use crate::store::TemplateStore;
use std::path::Path;

/// Read-only inputs shared by every step of a run.
pub struct StepContext<'a> {
    pub project_root: &'a Path,
    pub template_name: &'a str,
    /// Project name, bound to `App` in copied templates.
    pub app: &'a str,
    /// Opaque value bound to `Home` in copied templates.
    pub home: &'a str,
    pub store: &'a dyn TemplateStore,
    pub resolver: &'a dyn VersionResolver,
    pub renderer: &'a dyn TemplateRenderer,
}

/// State accumulated across the steps of a run.
#[derive(Debug, Default)]
pub struct RunState {
    pub configs: ConfigAccumulator,
    pub ignore_sections: IgnoreSections,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs `step` with the executor matching its type.
pub fn execute(step: &Step, ctx: &StepContext<'_>, state: &mut RunState) -> Result<()> {
    match step {
        Step::Npm(npm) => npm::run(npm, ctx, &mut state.configs),
        Step::Patch(patch) => patch::run(patch, ctx, &state.configs),
        Step::Copy => copy::run(ctx),
        Step::Gitignore(gitignore) => {
            gitignore::run(gitignore, &mut state.ignore_sections);
            Ok(())
        }
    }
}
