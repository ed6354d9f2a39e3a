/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Order-preserving config documents merged across steps.
pub mod accumulator;

/// Merges ignore sections into the project's ignore file.
pub mod ignore;

/// Template parsing and rendering functionality.
pub mod renderer;

/// An abstraction over the read-only source of template assets.
pub mod store;

/// Preset definitions and loading.
pub mod preset;

/// Comment-preserving JSON patching.
pub mod patch;

/// Package version lookups.
pub mod registry;

/// Executors for each preset step type.
pub mod steps;

/// Copying of a template's file tree.
pub mod template;

/// Project creation orchestration.
pub mod project;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Extension traits for standard library types.
pub mod ext;

pub use project::Project;
