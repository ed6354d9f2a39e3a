//! In-memory, order-preserving config documents with a deferred flush.

use crate::error::{Error, Result};
use crate::ioutils::write_file;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::Path;

/// An ordered JSON object loaded from one config file.
///
/// Keys keep their first-seen order when written back, nested objects
/// included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    entries: IndexMap<String, Value>,
}

impl ConfigDocument {
    /// Decodes a config file's content. The top level must be an object.
    pub fn parse(file: &str, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|source| {
            Error::ConfigMalformed { file: file.to_string(), source }
        })?;
        match value {
            Value::Object(map) => Ok(Self { entries: map.into_iter().collect() }),
            other => Err(Error::ConfigInvalidShape {
                file: file.to_string(),
                reason: format!("expected a top-level object, found {}", type_name(&other)),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Sets `key`, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Returns the value under `key`, appending `default` at the end of the
    /// key order first if the key is absent.
    pub fn append_if_absent(&mut self, key: &str, default: Value) -> &mut Value {
        self.entries.entry(key.to_string()).or_insert(default)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serializes with 2-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::Other(anyhow::anyhow!("failed to serialize config: {e}")))?;
        out.push('\n');
        Ok(out)
    }
}

/// Collects config documents across steps, keyed by file path.
///
/// Each file is read from disk on first reference only; later steps see the
/// in-memory copy. Nothing is written until [`ConfigAccumulator::flush`].
#[derive(Debug, Default)]
pub struct ConfigAccumulator {
    documents: IndexMap<String, ConfigDocument>,
}

impl ConfigAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `file` has already been loaded during this run.
    pub fn contains(&self, file: &str) -> bool {
        self.documents.contains_key(file)
    }

    pub fn get(&self, file: &str) -> Option<&ConfigDocument> {
        self.documents.get(file)
    }

    /// Returns the cached document for `file`, loading it from `project_root`
    /// on first reference.
    pub fn document(&mut self, project_root: &Path, file: &str) -> Result<&mut ConfigDocument> {
        if !self.documents.contains_key(file) {
            log::info!("Reading config file {file}");
            let content = std::fs::read_to_string(project_root.join(file)).map_err(|source| {
                Error::ConfigUnreadable { file: file.to_string(), source }
            })?;
            let document = ConfigDocument::parse(file, &content)?;
            self.documents.insert(file.to_string(), document);
        }
        self.documents.get_mut(file).ok_or_else(|| {
            Error::Other(anyhow::anyhow!("config document '{file}' vanished from the cache"))
        })
    }

    /// Registers `package` at `version` in `field` of `file`, overwriting any
    /// earlier version for the same package.
    pub fn set_dependency(
        &mut self,
        project_root: &Path,
        file: &str,
        field: &str,
        package: &str,
        version: &str,
    ) -> Result<()> {
        let target = self.dependency_field(project_root, file, field)?;
        target.insert(package.to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Returns the dependency mapping `field` of `file`, appending an empty
    /// one to the document if it is absent.
    pub fn dependency_field(
        &mut self,
        project_root: &Path,
        file: &str,
        field: &str,
    ) -> Result<&mut Map<String, Value>> {
        let document = self.document(project_root, file)?;
        match document.append_if_absent(field, Value::Object(Map::new())) {
            Value::Object(map) => Ok(map),
            other => Err(Error::ConfigInvalidShape {
                file: file.to_string(),
                reason: format!("'{field}' must be an object, found {}", type_name(other)),
            }),
        }
    }

    /// Writes every document to its path, in first-reference order.
    pub fn flush(&self, project_root: &Path) -> Result<()> {
        for (file, document) in &self.documents {
            log::info!("Writing config file {file}");
            write_file(&document.to_pretty_string()?, project_root.join(file))?;
        }
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_manifest(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), content).unwrap();
        temp_dir
    }

    #[test]
    fn keeps_key_order_and_appends_new_fields() {
        let project = project_with_manifest(r#"{"name":"app","version":"1.0.0","scripts":{}}"#);
        let mut accumulator = ConfigAccumulator::new();
        accumulator
            .set_dependency(project.path(), "package.json", "devDependencies", "sst", "3.0.0")
            .unwrap();

        let keys: Vec<_> = accumulator.get("package.json").unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "version", "scripts", "devDependencies"]);
    }

    #[test]
    fn later_version_overwrites_in_place() {
        let project =
            project_with_manifest(r#"{"dependencies":{"a":"1.0.0","b":"1.0.0"}}"#);
        let mut accumulator = ConfigAccumulator::new();
        let root = project.path();
        accumulator.set_dependency(root, "package.json", "dependencies", "a", "2.0.0").unwrap();
        accumulator.set_dependency(root, "package.json", "dependencies", "c", "1.0.0").unwrap();
        accumulator.set_dependency(root, "package.json", "dependencies", "a", "3.0.0").unwrap();

        let deps = accumulator.get("package.json").unwrap().get("dependencies").unwrap();
        assert_eq!(deps, &json!({ "a": "3.0.0", "b": "1.0.0", "c": "1.0.0" }));
        let order: Vec<_> = deps.as_object().unwrap().keys().cloned().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn loads_each_file_once() {
        let project = project_with_manifest(r#"{"name":"app"}"#);
        let mut accumulator = ConfigAccumulator::new();
        accumulator.document(project.path(), "package.json").unwrap().set("private", json!(true));

        fs::write(project.path().join("package.json"), r#"{"name":"changed"}"#).unwrap();
        let document = accumulator.document(project.path(), "package.json").unwrap();
        assert_eq!(document.get("name"), Some(&json!("app")));
        assert_eq!(document.get("private"), Some(&json!(true)));
    }

    #[test]
    fn missing_file_is_config_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let mut accumulator = ConfigAccumulator::new();
        let err = accumulator.document(temp_dir.path(), "package.json").unwrap_err();
        assert!(matches!(err, Error::ConfigUnreadable { .. }));
    }

    #[test]
    fn invalid_json_is_config_malformed() {
        let project = project_with_manifest("{ name: ");
        let mut accumulator = ConfigAccumulator::new();
        let err = accumulator.document(project.path(), "package.json").unwrap_err();
        assert!(matches!(err, Error::ConfigMalformed { .. }));
    }

    #[test]
    fn non_object_field_is_invalid_shape() {
        let project = project_with_manifest(r#"{"dependencies":["sst"]}"#);
        let mut accumulator = ConfigAccumulator::new();
        let err = accumulator
            .set_dependency(project.path(), "package.json", "dependencies", "sst", "1.0.0")
            .unwrap_err();
        assert!(matches!(err, Error::ConfigInvalidShape { .. }));
    }

    #[test]
    fn top_level_array_is_invalid_shape() {
        let err = ConfigDocument::parse("package.json", "[]").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalidShape { .. }));
    }

    #[test]
    fn flush_writes_indented_json() {
        let project = project_with_manifest(r#"{"name":"app"}"#);
        let mut accumulator = ConfigAccumulator::new();
        accumulator
            .set_dependency(project.path(), "package.json", "dependencies", "sst", "3.0.0")
            .unwrap();
        accumulator.flush(project.path()).unwrap();

        let written = fs::read_to_string(project.path().join("package.json")).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"app\",\n  \"dependencies\": {\n    \"sst\": \"3.0.0\"\n  }\n}\n"
        );
    }
}
