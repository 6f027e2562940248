//! Top-level generation driver.
//!
//! Seeds the work queue from object-shaped definitions, drains it to empty
//! (each entry expands into at most one declaration), and assembles the
//! formatted output text.

use serde_json::{Map, Value};

use crate::builder::build_declaration;
use crate::error::GenerateError;
use crate::pretty;
use crate::render;
use crate::types::{Declaration, GenerateOptions, PendingDeclaration};

/// Generate TypeScript declarations from a Swagger document.
///
/// Reads the document's `definitions` section and returns the formatted
/// declaration text.
///
/// # Errors
///
/// Returns `MissingDefinitions` when the document has no `definitions`
/// object, and propagates resolution and formatting failures.
pub fn generate(document: &Value, options: &GenerateOptions) -> Result<String, GenerateError> {
    let definitions = document
        .get("definitions")
        .and_then(Value::as_object)
        .ok_or(GenerateError::MissingDefinitions)?;
    generate_definitions(definitions, options)
}

/// Generate TypeScript declarations from a definition map.
pub fn generate_definitions(
    definitions: &Map<String, Value>,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let declarations = build_declarations(definitions, options)?;
    let text = render::render_document(&declarations, options);
    Ok(pretty::reformat(&text)?)
}

/// Build the declaration list without rendering it to text.
///
/// Declarations come out in drain order: seeds sorted by name, nested
/// discoveries expanded immediately after their discoverer (LIFO stack
/// semantics).
pub fn build_declarations(
    definitions: &Map<String, Value>,
    options: &GenerateOptions,
) -> Result<Vec<Declaration>, GenerateError> {
    let mut queue: Vec<PendingDeclaration> = Vec::new();

    let mut seeds: Vec<(&String, &Value)> = definitions
        .iter()
        .filter(|(_, node)| is_top_level_object(node))
        .collect();
    seeds.sort_by(|a, b| a.0.cmp(b.0));
    for (name, node) in seeds {
        queue.push(PendingDeclaration::new(name.clone(), (*node).clone()));
    }

    let mut declarations = Vec::new();
    while let Some(pending) = queue.pop() {
        if let Some(declaration) =
            build_declaration(&pending.name, &pending.node, definitions, &mut queue, options)?
        {
            declarations.push(declaration);
        }
    }

    Ok(declarations)
}

/// True for definitions that seed the queue: object-shaped, or with no
/// usable `type` at all (assumed object).
pub(crate) fn is_top_level_object(node: &Value) -> bool {
    match node.get("type") {
        None | Some(Value::Null) => true,
        Some(Value::String(kind)) => kind == "object" || kind.is_empty(),
        Some(_) => false,
    }
}
