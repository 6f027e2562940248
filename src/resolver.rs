//! Type expression resolution - maps an arbitrary schema node to a
//! TypeScript type expression.
//!
//! Resolution may discover anonymous nested shapes that need their own named
//! declaration; those are pushed onto the shared work queue as a side effect
//! and expanded later by the builder.

use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::naming;
use crate::refs;
use crate::types::{map_primitive, PendingDeclaration, DEFAULT_TYPE};

/// Resolve the type expression for a schema node.
///
/// `candidate` is the name the node receives if it has to be promoted to a
/// named declaration. An empty candidate suppresses promotion; the expression
/// falls back to the opaque type instead.
///
/// # Errors
///
/// Returns `UnknownReference` for a `$ref` whose target must be read but is
/// absent, and `CircularReference` for reference chains that never bottom
/// out.
pub(crate) fn resolve_type(
    node: &Value,
    candidate: &str,
    definitions: &Map<String, Value>,
    queue: &mut Vec<PendingDeclaration>,
) -> Result<String, GenerateError> {
    let mut trail = Vec::new();
    resolve_inner(node, candidate, definitions, queue, &mut trail)
}

fn resolve_inner(
    node: &Value,
    candidate: &str,
    definitions: &Map<String, Value>,
    queue: &mut Vec<PendingDeclaration>,
    trail: &mut Vec<String>,
) -> Result<String, GenerateError> {
    // Name the node takes if promoted to a declaration.
    let promoted = naming::camel_case(candidate);

    if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
        let (ref_name, ref_node) = refs::lookup(definitions, reference);
        let Some(ref_node) = ref_node else {
            return Err(GenerateError::UnknownReference {
                reference: reference.to_string(),
            });
        };
        // One level of reference-to-array-of-references indirection flattens
        // into the array expression itself.
        if ref_node
            .get("items")
            .is_some_and(|items| items.get("$ref").is_some())
        {
            if trail.iter().any(|seen| *seen == ref_name) {
                return Err(GenerateError::CircularReference { name: ref_name });
            }
            trail.push(ref_name.clone());
            let expr = resolve_inner(ref_node, &ref_name, definitions, queue, trail);
            trail.pop();
            return expr;
        }
        // Primitive aliases are inlined, never referenced by name.
        if let Some(primitive) = ref_node
            .get("type")
            .and_then(Value::as_str)
            .and_then(map_primitive)
        {
            return Ok(primitive.to_string());
        }
        return Ok(if ref_name.is_empty() {
            DEFAULT_TYPE.to_string()
        } else {
            naming::camel_case(&ref_name)
        });
    }

    if let Some(items) = node.get("items") {
        if let Some(reference) = items.get("$ref").and_then(Value::as_str) {
            // The referenced declaration is seeded at top level; only the
            // array expression is produced here.
            let (ref_name, _) = refs::lookup(definitions, reference);
            return Ok(array_of(&naming::camel_case(&ref_name)));
        }
        let nested_array =
            items.get("type").and_then(Value::as_str) == Some("array") || items.get("items").is_some();
        if nested_array {
            let inner = resolve_inner(items, candidate, definitions, queue, trail)?;
            return Ok(array_of(&inner));
        }
        if let Some(primitive) = items
            .get("type")
            .and_then(Value::as_str)
            .and_then(map_primitive)
        {
            return Ok(array_of(primitive));
        }
        if items.get("properties").is_some() || items.get("type").is_some() {
            // Array of anonymous objects: promote the element type.
            if promoted.is_empty() {
                return Ok(array_of(DEFAULT_TYPE));
            }
            queue.push(PendingDeclaration::new(promoted.clone(), items.clone()));
            return Ok(array_of(&promoted));
        }
    }

    if let Some(alternatives) = node.get("oneOf").and_then(Value::as_array) {
        let parts = alternatives
            .iter()
            .map(|alt| resolve_inner(alt, "", definitions, queue, trail))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(parts.join(" | "));
    }

    if node.get("properties").is_some() {
        // Anonymous nested object: promote it.
        if promoted.is_empty() {
            return Ok(DEFAULT_TYPE.to_string());
        }
        queue.push(PendingDeclaration::new(promoted.clone(), node.clone()));
        return Ok(promoted);
    }

    if let Some(declared) = node.get("type").and_then(Value::as_str) {
        if let Some(primitive) = map_primitive(declared) {
            return Ok(primitive.to_string());
        }
        if !declared.is_empty() {
            return Ok(declared.to_string());
        }
    }

    Ok(DEFAULT_TYPE.to_string())
}

fn array_of(inner: &str) -> String {
    format!("ReadonlyArray<{}>", inner)
}
