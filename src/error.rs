use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot proceed: '{marker}' already exists, the project is already initialized.")]
    ProjectAlreadyInitialized { marker: String },

    #[error("Failed to read preset for template '{template}'. Original error: {source}")]
    PresetUnreadable {
        template: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preset for template '{template}'. Original error: {e}")]
    PresetMalformed { template: String, e: String },

    #[error("Failed to read config file '{file}'. Original error: {source}")]
    ConfigUnreadable {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{file}'. Original error: {source}")]
    ConfigMalformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The config file parsed, but a value does not have the expected type.
    #[error("Config file '{file}' is invalid: {reason}.")]
    ConfigInvalidShape { file: String, reason: String },

    #[error("Failed to patch '{file}': {reason}.")]
    PatchFailure { file: String, reason: String },

    #[error("Failed to resolve the latest version of '{package}'. Original error: {e}")]
    NetworkFailure { package: String, e: String },

    #[error("Filesystem error at '{path}'. Original error: {source}")]
    FilesystemFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render. Original error: {0}")]
    RenderError(#[from] minijinja::Error),

    /// Wraps the first error raised by a step with its position in the preset.
    #[error("Step #{index} ({kind}) failed: {source}")]
    Step {
        index: usize,
        kind: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Builds a `FilesystemFailure` for the given path.
    pub fn filesystem<P: AsRef<std::path::Path>>(path: P, source: std::io::Error) -> Self {
        Error::FilesystemFailure { path: path.as_ref().display().to_string(), source }
    }

    /// Returns the innermost error, looking through `Step` wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_cause_unwraps_nested_steps() {
        let inner = Error::PatchFailure { file: "tsconfig.json".into(), reason: "bad".into() };
        let wrapped = Error::Step {
            index: 2,
            kind: "patch".into(),
            source: Box::new(Error::Step {
                index: 0,
                kind: "patch".into(),
                source: Box::new(inner),
            }),
        };
        assert!(matches!(wrapped.root_cause(), Error::PatchFailure { .. }));
    }

    #[test]
    fn step_error_mentions_index_and_kind() {
        let err = Error::Step {
            index: 3,
            kind: "npm".into(),
            source: Box::new(Error::NetworkFailure {
                package: "sst".into(),
                e: "timed out".into(),
            }),
        };
        let message = err.to_string();
        assert!(message.starts_with("Step #3 (npm) failed"));
        assert!(message.contains("'sst'"));
    }
}
