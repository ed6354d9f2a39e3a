//! Preset loading

use crate::constants::{FILES_DIR, PRESET_FILE, TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::preset::step::{RawStep, Step};
use crate::store::TemplateStore;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct RawPreset {
    #[serde(default)]
    steps: Vec<RawStep>,
}

/// The ordered step pipeline of one template.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub steps: Vec<Step>,
}

impl Preset {
    /// Reads and decodes `templates/<name>/preset.json` from the store.
    ///
    /// Every step payload is decoded here, so a malformed preset fails
    /// before any step has run.
    pub fn load(store: &dyn TemplateStore, template_name: &str) -> Result<Self> {
        let preset_path = preset_path(template_name);
        log::debug!("Reading preset from {}", preset_path.display());

        let content = store.read_file(&preset_path).map_err(|source| {
            Error::PresetUnreadable { template: template_name.to_string(), source }
        })?;
        Self::parse(template_name, &content)
    }

    /// Decodes a preset document.
    pub fn parse(template_name: &str, content: &str) -> Result<Self> {
        let malformed =
            |e: String| Error::PresetMalformed { template: template_name.to_string(), e };

        let raw: RawPreset =
            serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
        let steps = raw
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                Step::decode(step).map_err(|e| malformed(format!("step #{index}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { steps })
    }
}

/// Location of a template's pipeline definition inside the store.
pub fn preset_path(template_name: &str) -> PathBuf {
    PathBuf::from(TEMPLATES_DIR).join(template_name).join(PRESET_FILE)
}

/// Location of a template's copyable tree inside the store.
pub fn files_path(template_name: &str) -> PathBuf {
    PathBuf::from(TEMPLATES_DIR).join(template_name).join(FILES_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalTemplateStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_steps_in_order() {
        let preset = Preset::parse(
            "js",
            r##"{
                "steps": [
                    { "type": "copy" },
                    { "type": "npm", "properties": { "file": "package.json", "package": "sst", "version": "3.0.0" } },
                    { "type": "gitignore", "properties": { "name": "# deps", "path": "node_modules" } }
                ]
            }"##,
        )
        .unwrap();
        let kinds: Vec<_> = preset.steps.iter().map(Step::kind).collect();
        assert_eq!(kinds, vec!["copy", "npm", "gitignore"]);
    }

    #[test]
    fn empty_document_has_no_steps() {
        assert!(Preset::parse("empty", "{}").unwrap().steps.is_empty());
    }

    #[test]
    fn malformed_json_is_preset_malformed() {
        let err = Preset::parse("js", "{ steps: ").unwrap_err();
        assert!(matches!(err, Error::PresetMalformed { ref template, .. } if template == "js"));
    }

    #[test]
    fn bad_payload_names_the_step() {
        let err = Preset::parse(
            "js",
            r#"{ "steps": [ { "type": "copy" }, { "type": "npm", "properties": { "file": 1 } } ] }"#,
        )
        .unwrap_err();
        match err {
            Error::PresetMalformed { e, .. } => assert!(e.starts_with("step #1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_template_is_preset_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalTemplateStore::new(temp_dir.path());
        let err = Preset::load(&store, "missing").unwrap_err();
        assert!(matches!(err, Error::PresetUnreadable { .. }));
    }

    #[test]
    fn loads_from_store() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("templates/js")).unwrap();
        fs::write(
            temp_dir.path().join("templates/js/preset.json"),
            r#"{ "steps": [ { "type": "copy" } ] }"#,
        )
        .unwrap();
        let store = LocalTemplateStore::new(temp_dir.path());
        assert_eq!(Preset::load(&store, "js").unwrap().steps, vec![Step::Copy]);
    }
}
