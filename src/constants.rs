//! Constants used throughout sst-init

/// Marker file whose presence means the project is already initialized
pub const MARKER_FILE: &str = "sst.config.ts";

/// Ignore file merged at the end of a run
pub const IGNORE_FILE: &str = ".gitignore";

/// Section always written to the ignore file, ahead of preset sections
pub const DEFAULT_IGNORE_HEADER: &str = "# sst";
pub const DEFAULT_IGNORE_PATH: &str = ".sst";

/// Directory inside the asset store holding one subdirectory per template
pub const TEMPLATES_DIR: &str = "templates";

/// Pipeline definition file inside a template directory
pub const PRESET_FILE: &str = "preset.json";

/// Copyable tree inside a template directory
pub const FILES_DIR: &str = "files";

/// Default package registry queried for "latest" versions
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default registry request timeout, in seconds
pub const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 30;

/// Default value of the `Home` template variable
pub const DEFAULT_HOME: &str = "aws";

/// Dependency fields of a package manifest
pub mod fields {
    pub const DEPENDENCIES: &str = "dependencies";
    pub const DEV_DEPENDENCIES: &str = "devDependencies";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
