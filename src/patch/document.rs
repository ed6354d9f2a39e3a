//! Comment-preserving JSON documents.

use crate::patch::operation::PatchOperation;
use crate::patch::pointer::{parse_index, parse_pointer};
use jsonc_parser::cst::{CstArray, CstInputValue, CstNode, CstObject, CstRootNode};
use jsonc_parser::ParseOptions;
use serde_json::Value;
use std::fmt;

/// A JSON document parsed permissively (comments, trailing commas) that
/// keeps comments and whitespace through edits.
pub struct TolerantDocument {
    root: CstRootNode,
}

enum Container {
    Object(CstObject),
    Array(CstArray),
}

impl TolerantDocument {
    pub fn parse(text: &str) -> Result<Self, String> {
        let root = CstRootNode::parse(text, &ParseOptions::default())
            .map_err(|e| format!("failed to parse: {e}"))?;
        Ok(Self { root })
    }

    /// The document's current value, without comments.
    pub fn to_value(&self) -> Result<Value, String> {
        let text = self.root.to_string();
        let value = jsonc_parser::parse_to_serde_value(&text, &ParseOptions::default())
            .map_err(|e| format!("failed to read document: {e}"))?;
        Ok(value.unwrap_or(Value::Null))
    }

    /// Returns the value at `pointer`, if any.
    pub fn get(&self, pointer: &str) -> Result<Option<Value>, String> {
        parse_pointer(pointer)?;
        Ok(self.to_value()?.pointer(pointer).cloned())
    }

    /// Applies the operations in order, stopping at the first failure.
    pub fn apply(&mut self, operations: &[PatchOperation]) -> Result<(), String> {
        for operation in operations {
            self.apply_one(operation)
                .map_err(|e| format!("{} failed: {e}", operation.describe()))?;
        }
        Ok(())
    }

    fn apply_one(&mut self, operation: &PatchOperation) -> Result<(), String> {
        match operation {
            PatchOperation::Add { path, value } => self.add(path, value),
            PatchOperation::Remove { path } => self.remove(path),
            PatchOperation::Replace { path, value } => self.replace(path, value),
            PatchOperation::Move { from, path } => {
                if path.starts_with(&format!("{from}/")) {
                    return Err("cannot move a value into one of its children".to_string());
                }
                let value = self.get(from)?.ok_or_else(|| missing(from))?;
                self.remove(from)?;
                self.add(path, &value)
            }
            PatchOperation::Copy { from, path } => {
                let value = self.get(from)?.ok_or_else(|| missing(from))?;
                self.add(path, &value)
            }
            PatchOperation::Test { path, value } => match self.get(path)? {
                Some(actual) if &actual == value => Ok(()),
                Some(actual) => Err(format!("expected {value}, found {actual}")),
                None => Err(missing(path)),
            },
        }
    }

    fn add(&mut self, path: &str, value: &Value) -> Result<(), String> {
        let tokens = parse_pointer(path)?;
        let Some((last, parents)) = tokens.split_last() else {
            self.root.set_value(to_input(value));
            return Ok(());
        };
        match self.container_at(parents)? {
            Container::Object(object) => match object.get(last) {
                Some(prop) => prop.set_value(to_input(value)),
                None => {
                    object.append(last, to_input(value));
                }
            },
            Container::Array(array) => {
                let len = array.elements().len();
                let index = if last == "-" { len } else { parse_index(last)? };
                if index > len {
                    return Err(format!("index {index} is out of bounds (length {len})"));
                }
                insert_element(&array, index, len, value);
            }
        }
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<(), String> {
        let tokens = parse_pointer(path)?;
        let Some((last, parents)) = tokens.split_last() else {
            return Err("cannot remove the document root".to_string());
        };
        match self.container_at(parents)? {
            Container::Object(object) => object.get(last).ok_or_else(|| missing(path))?.remove(),
            Container::Array(array) => {
                let index = parse_index(last)?;
                array.elements().into_iter().nth(index).ok_or_else(|| missing(path))?.remove()
            }
        }
        Ok(())
    }

    fn replace(&mut self, path: &str, value: &Value) -> Result<(), String> {
        let tokens = parse_pointer(path)?;
        let Some((last, parents)) = tokens.split_last() else {
            self.root.set_value(to_input(value));
            return Ok(());
        };
        match self.container_at(parents)? {
            Container::Object(object) => {
                object.get(last).ok_or_else(|| missing(path))?.set_value(to_input(value))
            }
            Container::Array(array) => {
                let index = parse_index(last)?;
                let element =
                    array.elements().into_iter().nth(index).ok_or_else(|| missing(path))?;
                element.remove();
                let len = array.elements().len();
                insert_element(&array, index, len, value);
            }
        }
        Ok(())
    }

    /// Resolves the object or array addressed by `tokens`.
    fn container_at(&self, tokens: &[String]) -> Result<Container, String> {
        let mut node = self.root.value().ok_or_else(|| "document is empty".to_string())?;
        for (depth, token) in tokens.iter().enumerate() {
            node = child(&node, token).ok_or_else(|| missing(&to_pointer(&tokens[..=depth])))?;
        }
        if let Some(object) = node.as_object() {
            Ok(Container::Object(object))
        } else if let Some(array) = node.as_array() {
            Ok(Container::Array(array))
        } else {
            Err(format!("'{}' is not an object or array", to_pointer(tokens)))
        }
    }
}

impl fmt::Display for TolerantDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

fn child(node: &CstNode, token: &str) -> Option<CstNode> {
    if let Some(object) = node.as_object() {
        return object.get(token).and_then(|prop| prop.value());
    }
    if let Some(array) = node.as_array() {
        let index = parse_index(token).ok()?;
        return array.elements().into_iter().nth(index);
    }
    None
}

fn insert_element(array: &CstArray, index: usize, len: usize, value: &Value) {
    if index == len {
        array.append(to_input(value));
    } else {
        array.insert(index, to_input(value));
    }
}

fn missing(pointer: &str) -> String {
    format!("path '{pointer}' does not exist")
}

fn to_pointer(tokens: &[String]) -> String {
    tokens.iter().map(|t| format!("/{}", t.replace('~', "~0").replace('/', "~1"))).collect()
}

fn to_input(value: &Value) -> CstInputValue {
    match value {
        Value::Null => CstInputValue::Null,
        Value::Bool(b) => CstInputValue::Bool(*b),
        Value::Number(n) => CstInputValue::Number(n.to_string()),
        Value::String(s) => CstInputValue::String(s.clone()),
        Value::Array(items) => CstInputValue::Array(items.iter().map(to_input).collect()),
        Value::Object(map) => CstInputValue::Object(
            map.iter().map(|(key, value)| (key.clone(), to_input(value))).collect(),
        ),
    }
}
