//! Reference lookup within the definition map.

use serde_json::{Map, Value};

/// Resolve a `$ref` string of the form `#/definitions/X` against the
/// definition map.
///
/// Returns the referenced name and, when present, its node. Absent targets
/// are not an error here; call sites that must read the target decide how a
/// missing node surfaces.
pub(crate) fn lookup<'a>(
    definitions: &'a Map<String, Value>,
    reference: &str,
) -> (String, Option<&'a Value>) {
    let name = reference
        .strip_prefix("#/definitions/")
        .unwrap_or(reference);
    (name.to_string(), definitions.get(name))
}
