//! Step payloads of a preset pipeline

use serde::Deserialize;

/// A step as it appears in `preset.json`: a type tag plus an untyped property bag.
#[derive(Debug, Deserialize)]
pub struct RawStep {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// One typed unit of work in a preset.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Npm(NpmStep),
    Patch(PatchStep),
    Copy,
    Gitignore(GitignoreStep),
}

impl Step {
    /// Decodes the type tag first, then the payload shape for that tag.
    pub fn decode(raw: RawStep) -> Result<Self, String> {
        let RawStep { kind, properties } = raw;
        let step = match kind.as_str() {
            "npm" => Step::Npm(decode_properties(&kind, properties)?),
            "patch" => Step::Patch(decode_properties(&kind, properties)?),
            "copy" => Step::Copy,
            "gitignore" => Step::Gitignore(decode_properties(&kind, properties)?),
            other => return Err(format!("unknown step type '{other}'")),
        };
        Ok(step)
    }

    /// The tag this step was declared with.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Npm(_) => "npm",
            Step::Patch(_) => "patch",
            Step::Copy => "copy",
            Step::Gitignore(_) => "gitignore",
        }
    }
}

fn decode_properties<T: serde::de::DeserializeOwned>(
    kind: &str,
    properties: serde_json::Value,
) -> Result<T, String> {
    serde_json::from_value(properties)
        .map_err(|e| format!("invalid properties for '{kind}' step: {e}"))
}

/// Registers a package in a dependency field of a package manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NpmStep {
    pub file: String,
    pub package: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub dev: bool,
}

impl NpmStep {
    pub fn field(&self) -> &'static str {
        if self.dev {
            crate::constants::fields::DEV_DEPENDENCIES
        } else {
            crate::constants::fields::DEPENDENCIES
        }
    }
}

/// Patches a (possibly commented) JSON config file in place.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchStep {
    pub file: String,
    /// Patch operations, decoded when the step runs.
    #[serde(default)]
    pub patch: serde_json::Value,
    #[serde(default)]
    pub regex: Vec<Substitution>,
}

/// A regex find/replace applied to the patched text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Substitution {
    pub find: String,
    pub replace: String,
}

/// Adds a section to the project's ignore file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitignoreStep {
    pub name: String,
    pub path: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
