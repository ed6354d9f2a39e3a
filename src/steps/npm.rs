use super::StepContext;
use crate::accumulator::ConfigAccumulator;
use crate::error::Result;
use crate::preset::NpmStep;
use log::info;

/// Registers a dependency in the accumulated config document of `step.file`.
///
/// Without a pinned version the registry's latest version is used; a failed
/// lookup aborts the step.
pub fn run(step: &NpmStep, ctx: &StepContext<'_>, configs: &mut ConfigAccumulator) -> Result<()> {
    let requested = step.version.as_deref().unwrap_or("latest");
    info!("Installing npm package {} ({requested})", step.package);
    let field = step.field();

    // Resolve the target field before any network call so shape errors surface first.
    configs.dependency_field(ctx.project_root, &step.file, field)?;

    let version = match &step.version {
        Some(version) => version.clone(),
        None => {
            info!("Fetching latest version of {}", step.package);
            let version = ctx.resolver.latest_version(&step.package)?;
            info!("Latest version of {} is {version}", step.package);
            version
        }
    };

    configs.set_dependency(ctx.project_root, &step.file, field, &step.package, &version)
}
