use super::StepContext;
use crate::accumulator::ConfigAccumulator;
use crate::error::{Error, Result};
use crate::patch::{PatchOperation, TolerantDocument};
use crate::preset::{PatchStep, Substitution};
use log::{debug, info, warn};
use regex::Regex;

/// Patches `step.file` in place, keeping its comments and formatting.
///
/// A missing file is skipped. Regex substitutions run on the patched text.
pub fn run(step: &PatchStep, ctx: &StepContext<'_>, configs: &ConfigAccumulator) -> Result<()> {
    let path = ctx.project_root.join(&step.file);
    if !path.exists() {
        info!("{} does not exist, ignoring patch", step.file);
        return Ok(());
    }
    if configs.contains(&step.file) {
        warn!(
            "{} is also updated by npm steps; the config flush will overwrite this patch",
            step.file
        );
    }
    info!("Patching {}", step.file);
    debug!("Patch for {}: {}", step.file, step.patch);

    let failure = |reason: String| Error::PatchFailure { file: step.file.clone(), reason };

    let text = std::fs::read_to_string(&path).map_err(|e| Error::filesystem(&path, e))?;
    let operations = PatchOperation::parse_all(&step.patch).map_err(failure)?;
    let mut document = TolerantDocument::parse(&text).map_err(failure)?;
    document.apply(&operations).map_err(failure)?;

    let patched = apply_substitutions(document.to_string(), &step.regex).map_err(failure)?;
    std::fs::write(&path, patched).map_err(|e| Error::filesystem(&path, e))
}

/// Applies each substitution in order, replacing all non-overlapping matches.
fn apply_substitutions(
    mut text: String,
    substitutions: &[Substitution],
) -> std::result::Result<String, String> {
    for substitution in substitutions {
        let re = Regex::new(&substitution.find)
            .map_err(|e| format!("invalid regex '{}': {e}", substitution.find))?;
        text = re.replace_all(&text, substitution.replace.as_str()).into_owned();
    }
    Ok(text)
}
