use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { source: PathBuf, target: PathBuf, content: String },
    /// The destination already exists and is left untouched.
    Skip { source: PathBuf, target: PathBuf },
}

impl TemplateOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => target,
            TemplateOperation::Write { target, .. } => target,
            TemplateOperation::Skip { target, .. } => target,
        }
    }

    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Skipping directory creation '{}' (already exists)", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
            TemplateOperation::Write { source, target, .. } => {
                format!("Copying template '{}' to '{}'", source.display(), target.display())
            }
            TemplateOperation::Skip { source, target } => format!(
                "Skipping copy of '{}' to '{}' (target already exists)",
                source.display(),
                target.display()
            ),
        }
    }
}
