//! Definition inventory - reports what each definition contributes.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::generator::is_top_level_object;
use crate::types::is_primitive_alias;

/// Classified shape of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Object,
    Array,
    Primitive,
    Other,
}

/// Per-definition report entry.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionSummary {
    pub name: String,
    pub kind: DefinitionKind,
    /// Own properties plus allOf-merged fragment properties.
    pub properties: usize,
    /// False for definitions that are inlined at reference sites instead of
    /// producing a declaration.
    pub emitted: bool,
}

/// Summarize the definitions of a Swagger document.
///
/// # Errors
///
/// Returns `MissingDefinitions` when the document has no `definitions`
/// object.
pub fn summarize(document: &Value) -> Result<Vec<DefinitionSummary>, GenerateError> {
    let definitions = document
        .get("definitions")
        .and_then(Value::as_object)
        .ok_or(GenerateError::MissingDefinitions)?;

    Ok(definitions
        .iter()
        .map(|(name, node)| {
            let properties = merged_property_count(node);
            DefinitionSummary {
                name: name.clone(),
                kind: classify(node),
                properties,
                emitted: is_top_level_object(node) && !is_primitive_alias(node, properties),
            }
        })
        .collect())
}

fn classify(node: &Value) -> DefinitionKind {
    let declared = node.get("type").and_then(Value::as_str);
    if node.get("properties").is_some() || is_top_level_object(node) {
        DefinitionKind::Object
    } else if declared == Some("array") || node.get("items").is_some() {
        DefinitionKind::Array
    } else if declared.is_some_and(|t| crate::types::map_primitive(t).is_some()) {
        DefinitionKind::Primitive
    } else {
        DefinitionKind::Other
    }
}

fn merged_property_count(node: &Value) -> usize {
    let mut keys: HashSet<&str> = node
        .get("properties")
        .and_then(Value::as_object)
        .map(Map::keys)
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect();

    if let Some(all_of) = node.get("allOf").and_then(Value::as_array) {
        for entry in all_of {
            if entry.get("$ref").is_some() {
                continue;
            }
            if let Some(fragment) = entry.get("properties").and_then(Value::as_object) {
                keys.extend(fragment.keys().map(String::as_str));
            }
        }
    }

    keys.len()
}
