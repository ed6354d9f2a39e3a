use crate::ignore::{IgnoreSection, IgnoreSections};
use crate::preset::GitignoreStep;
use log::info;

/// Records an ignore section; the ignore file is only touched at flush.
pub fn run(step: &GitignoreStep, sections: &mut IgnoreSections) {
    info!("Handling .gitignore section {}", step.name);
    sections.push(IgnoreSection::new(step.name.clone(), step.path.clone()));
}
