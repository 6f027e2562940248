//! Declaration building - expands one pending `(name, node)` pair into a
//! finished declaration.

use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::naming;
use crate::refs;
use crate::resolver::resolve_type;
use crate::types::{
    is_primitive_alias, Declaration, GenerateOptions, Member, PendingDeclaration, DEFAULT_TYPE,
};

/// Build the declaration for a definition node.
///
/// Returns `None` for bare primitive aliases, which emit nothing and are
/// inlined at their reference sites. Nested anonymous shapes discovered while
/// resolving members are pushed onto `queue`.
///
/// # Errors
///
/// Propagates resolution failures (`UnknownReference`, `CircularReference`).
pub(crate) fn build_declaration(
    name: &str,
    node: &Value,
    definitions: &Map<String, Value>,
    queue: &mut Vec<PendingDeclaration>,
    options: &GenerateOptions,
) -> Result<Option<Declaration>, GenerateError> {
    let mut merged: Map<String, Value> = node
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    // Composition: references become supertypes, inline fragments merge in.
    let mut supertypes = Vec::new();
    if let Some(all_of) = node.get("allOf").and_then(Value::as_array) {
        for entry in all_of {
            if let Some(reference) = entry.get("$ref").and_then(Value::as_str) {
                let (ref_name, _) = refs::lookup(definitions, reference);
                supertypes.push(naming::camel_case(&ref_name));
            } else if let Some(fragment) = entry.get("properties").and_then(Value::as_object) {
                for (key, value) in fragment {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
    }

    if is_primitive_alias(node, merged.len()) {
        return Ok(None);
    }

    let required: Vec<&str> = node
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut members = Vec::new();
    for (key, prop) in &merged {
        let optional = !required.contains(&key.as_str());
        let formatted = if options.camelcase {
            naming::camel_case(key)
        } else {
            key.clone()
        };
        let candidate = format!("{}{}", name, naming::capitalize(key));
        let type_expr = match prop.get("enum").and_then(Value::as_array) {
            Some(values) if !values.is_empty() => enum_literal(values),
            _ => resolve_type(prop, &candidate, definitions, queue)?,
        };

        let mut member = Member {
            name: naming::sanitize_key(&formatted),
            type_expr,
            optional,
            description: prop
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            catch_all: false,
        };
        if let Some(mapper) = &options.property_mapper {
            member = mapper(prop, member);
        }

        // A property-level additionalProperties clause turns the member into
        // an inline string-keyed map.
        if let Some(extra) = prop.get("additionalProperties") {
            if extra != &Value::Bool(false) && !extra.is_null() {
                let inner = resolve_type(extra, "", definitions, queue)?;
                member.type_expr = format!("{{ [key: string]: {} }}", inner);
            }
        }

        members.push(member);
    }

    if let Some(member) = catch_all_member(node, definitions, queue)? {
        members.push(member);
    }

    Ok(Some(Declaration {
        name: name.to_string(),
        supertypes,
        members,
    }))
}

/// JSON-quoted literal union of enum values, in declared order.
fn enum_literal(values: &[Value]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|value| serde_json::to_string(value).unwrap_or_else(|_| DEFAULT_TYPE.to_string()))
        .collect();
    format!(" {}", parts.join(" | "))
}

/// Catch-all member for a node-level additionalProperties clause.
fn catch_all_member(
    node: &Value,
    definitions: &Map<String, Value>,
    queue: &mut Vec<PendingDeclaration>,
) -> Result<Option<Member>, GenerateError> {
    match node.get("additionalProperties") {
        Some(Value::Bool(true)) => Ok(Some(Member::catch_all(DEFAULT_TYPE.to_string()))),
        Some(clause @ Value::Object(map)) => {
            let type_expr = if map.contains_key("type") {
                resolve_type(clause, "", definitions, queue)?
            } else {
                DEFAULT_TYPE.to_string()
            };
            Ok(Some(Member::catch_all(type_expr)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defs(doc: Value) -> Map<String, Value> {
        doc.as_object().cloned().unwrap()
    }

    fn build(
        name: &str,
        node: &Value,
        definitions: &Map<String, Value>,
        options: &GenerateOptions,
    ) -> Option<Declaration> {
        let mut queue = Vec::new();
        build_declaration(name, node, definitions, &mut queue, options).unwrap()
    }

    #[test]
    fn members_preserve_property_order() {
        let node = json!({
            "type": "object",
            "properties": {
                "zebra": { "type": "string" },
                "apple": { "type": "integer" },
                "mango": { "type": "boolean" }
            }
        });
        let decl = build("Basket", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        let names: Vec<&str> = decl.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn optionality_tracks_required() {
        let node = json!({
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": { "type": "string" },
                "tag": { "type": "string" }
            }
        });
        let decl = build("Pet", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert!(!decl.members[0].optional);
        assert!(decl.members[1].optional);
    }

    #[test]
    fn missing_required_makes_everything_optional() {
        let node = json!({
            "type": "object",
            "properties": { "name": { "type": "string" } }
        });
        let decl = build("Pet", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert!(decl.members[0].optional);
    }

    #[test]
    fn primitive_alias_is_skipped() {
        let node = json!({ "type": "string" });
        assert!(build("PetId", &node, &defs(json!({})), &GenerateOptions::default()).is_none());
    }

    #[test]
    fn skip_predicate_is_literal() {
        let options = GenerateOptions::default();
        let definitions = defs(json!({}));

        // additionalProperties: true keeps the declaration even without properties.
        let node = json!({ "type": "string", "additionalProperties": true });
        assert!(build("Loose", &node, &definitions, &options).is_some());

        // A non-primitive declared type keeps the declaration.
        let node = json!({ "type": "object" });
        assert!(build("Empty", &node, &definitions, &options).is_some());

        // An absent type keeps the declaration.
        let node = json!({});
        assert!(build("Blank", &node, &definitions, &options).is_some());

        // allOf-merged properties count toward the predicate.
        let node = json!({
            "type": "string",
            "allOf": [{ "properties": { "extra": { "type": "string" } } }]
        });
        assert!(build("Alias", &node, &definitions, &options).is_some());
    }

    #[test]
    fn all_of_references_become_supertypes() {
        let definitions = defs(json!({
            "Base": { "type": "object", "properties": { "id": { "type": "integer" } } }
        }));
        let node = json!({
            "allOf": [
                { "$ref": "#/definitions/Base" },
                { "properties": { "extra": { "type": "string" } } }
            ]
        });
        let decl = build("Derived", &node, &definitions, &GenerateOptions::default()).unwrap();
        assert_eq!(decl.supertypes, ["Base"]);
        // Base's own members arrive via inheritance, not merging.
        let names: Vec<&str> = decl.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["extra"]);
    }

    #[test]
    fn all_of_fragment_overrides_own_property() {
        let node = json!({
            "properties": {
                "kind": { "type": "string" },
                "size": { "type": "integer" }
            },
            "allOf": [
                { "properties": { "kind": { "type": "integer" } } }
            ]
        });
        let decl = build("Widget", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        // Override keeps the original position.
        assert_eq!(decl.members[0].name, "kind");
        assert_eq!(decl.members[0].type_expr, "number");
        assert_eq!(decl.members.len(), 2);
    }

    #[test]
    fn enum_renders_space_prefixed_literal_union() {
        let node = json!({
            "properties": {
                "status": { "type": "string", "enum": ["available", "sold"] }
            }
        });
        let decl = build("Pet", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].type_expr, " \"available\" | \"sold\"");
    }

    #[test]
    fn enum_quotes_non_string_values_as_json() {
        let node = json!({
            "properties": {
                "level": { "type": "integer", "enum": [1, 2, 3] }
            }
        });
        let decl = build("Log", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].type_expr, " 1 | 2 | 3");
    }

    #[test]
    fn enum_is_never_promoted() {
        let node = json!({
            "properties": {
                "status": { "enum": ["a", "b"], "properties": { "x": { "type": "string" } } }
            }
        });
        let mut queue = Vec::new();
        let declaration = build_declaration(
            "Pet",
            &node,
            &defs(json!({})),
            &mut queue,
            &GenerateOptions::default(),
        )
        .unwrap();
        assert!(declaration.is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn nested_object_gets_synthesized_name() {
        let node = json!({
            "properties": {
                "owner": { "type": "object", "properties": { "id": { "type": "integer" } } }
            }
        });
        let mut queue = Vec::new();
        let decl = build_declaration(
            "Pet",
            &node,
            &defs(json!({})),
            &mut queue,
            &GenerateOptions::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(decl.members[0].type_expr, "PetOwner");
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].name, "PetOwner");
    }

    #[test]
    fn camelcase_option_transforms_member_keys() {
        let node = json!({
            "properties": { "pet_name": { "type": "string" } }
        });
        let definitions = defs(json!({}));

        let decl = build("Pet", &node, &definitions, &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].name, "pet_name");

        let decl = build(
            "Pet",
            &node,
            &definitions,
            &GenerateOptions::new().camelcase(true),
        )
        .unwrap();
        assert_eq!(decl.members[0].name, "petName");
    }

    #[test]
    fn keys_needing_quotes_are_sanitized() {
        let node = json!({
            "properties": { "content-type": { "type": "string" } }
        });
        let decl = build("Header", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].name, "\"content-type\"");
    }

    #[test]
    fn description_is_carried() {
        let node = json!({
            "properties": {
                "name": { "type": "string", "description": "Display name." }
            }
        });
        let decl = build("Pet", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].description.as_deref(), Some("Display name."));
    }

    #[test]
    fn property_mapper_overrides_member() {
        let options = GenerateOptions::new().property_mapper(|node, mut member| {
            if node.get("x-nullable") == Some(&Value::Bool(true)) {
                member.type_expr = format!("{} | null", member.type_expr);
                member.optional = true;
            }
            member
        });
        let node = json!({
            "required": ["name"],
            "properties": {
                "name": { "type": "string", "x-nullable": true }
            }
        });
        let decl = build("Pet", &node, &defs(json!({})), &options).unwrap();
        assert_eq!(decl.members[0].type_expr, "string | null");
        assert!(decl.members[0].optional);
    }

    #[test]
    fn property_level_additional_properties_wraps_type() {
        let node = json!({
            "properties": {
                "labels": {
                    "type": "object",
                    "additionalProperties": { "type": "string" }
                }
            }
        });
        let decl = build("Meta", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].type_expr, "{ [key: string]: string }");
    }

    #[test]
    fn property_level_additional_properties_false_is_ignored() {
        let node = json!({
            "properties": {
                "labels": { "type": "string", "additionalProperties": false }
            }
        });
        let decl = build("Meta", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members[0].type_expr, "string");
    }

    #[test]
    fn node_level_additional_properties_true_appends_permissive_catch_all() {
        let node = json!({
            "properties": { "name": { "type": "string" } },
            "additionalProperties": true
        });
        let decl = build("Loose", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        let last = decl.members.last().unwrap();
        assert!(last.catch_all);
        assert_eq!(last.type_expr, "object");
    }

    #[test]
    fn node_level_additional_properties_with_type_resolves() {
        let node = json!({
            "properties": { "name": { "type": "string" } },
            "additionalProperties": { "type": "integer" }
        });
        let decl = build("Counts", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        let last = decl.members.last().unwrap();
        assert!(last.catch_all);
        assert_eq!(last.type_expr, "number");
    }

    #[test]
    fn node_level_additional_properties_without_type_is_permissive() {
        let node = json!({
            "properties": { "name": { "type": "string" } },
            "additionalProperties": { "$ref": "#/definitions/Anything" }
        });
        let decl = build("Loose", &node, &defs(json!({})), &GenerateOptions::default()).unwrap();
        assert_eq!(decl.members.last().unwrap().type_expr, "object");
    }
}
