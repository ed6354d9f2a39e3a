use serde::Deserialize;
use serde_json::Value;

/// A single JSON patch (RFC 6902) operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    /// Decodes a patch document: an array of operations.
    pub fn parse_all(patch: &Value) -> Result<Vec<Self>, String> {
        if patch.is_null() {
            return Ok(Vec::new());
        }
        if !patch.is_array() {
            return Err("patch document must be an array of operations".to_string());
        }
        Vec::<PatchOperation>::deserialize(patch)
            .map_err(|e| format!("invalid patch document: {e}"))
    }

    /// Returns a brief description of this operation for error messages.
    pub fn describe(&self) -> String {
        match self {
            PatchOperation::Add { path, .. } => format!("add '{path}'"),
            PatchOperation::Remove { path } => format!("remove '{path}'"),
            PatchOperation::Replace { path, .. } => format!("replace '{path}'"),
            PatchOperation::Move { from, path } => format!("move '{from}' -> '{path}'"),
            PatchOperation::Copy { from, path } => format!("copy '{from}' -> '{path}'"),
            PatchOperation::Test { path, .. } => format!("test '{path}'"),
        }
    }
}
