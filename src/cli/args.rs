use crate::constants::{
    exit_codes, verbosity, DEFAULT_HOME, DEFAULT_REGISTRY_TIMEOUT_SECS, DEFAULT_REGISTRY_URL,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for sst-init.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the template to create the project from.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Value exposed to templates as `Home`.
    #[arg(long, default_value = DEFAULT_HOME)]
    pub home: String,

    /// Directory containing the `templates/` asset tree.
    #[arg(long = "templates-dir", value_name = "DIR", default_value = ".")]
    pub templates_dir: PathBuf,

    /// Project directory. Defaults to the current directory.
    #[arg(long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Package registry used to resolve unpinned versions.
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,

    /// Registry request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_REGISTRY_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["sst-init", "js"]);
        assert_eq!(args.template, "js");
        assert_eq!(args.home, "aws");
        assert_eq!(args.templates_dir, PathBuf::from("."));
        assert_eq!(args.project_dir, None);
        assert_eq!(args.registry, "https://registry.npmjs.org");
        assert_eq!(args.timeout, 30);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_all_args() {
        let args = Args::parse_from([
            "sst-init",
            "nextjs",
            "--home",
            "cloudflare",
            "--templates-dir",
            "/opt/sst",
            "--project-dir",
            "/work/app",
            "--registry",
            "http://localhost:4873",
            "--timeout",
            "5",
            "-vv",
        ]);
        assert_eq!(args.template, "nextjs");
        assert_eq!(args.home, "cloudflare");
        assert_eq!(args.templates_dir, PathBuf::from("/opt/sst"));
        assert_eq!(args.project_dir, Some(PathBuf::from("/work/app")));
        assert_eq!(args.registry, "http://localhost:4873");
        assert_eq!(args.timeout, 5);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn missing_template_is_an_error() {
        let err = Args::try_parse_from(["sst-init"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
