//! Preset definitions: the step pipeline of a template

pub mod loader;
pub mod step;

pub use loader::{files_path, preset_path, Preset};
pub use step::{GitignoreStep, NpmStep, PatchStep, RawStep, Step, Substitution};
