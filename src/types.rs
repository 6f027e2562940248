//! Core types for declaration generation.

use std::fmt;

use serde_json::Value;

/// Fallback type expression for schema shapes the generator cannot name.
pub const DEFAULT_TYPE: &str = "object";

/// Namespace wrapper emitted around the declarations unless disabled.
pub const DEFAULT_WRAPPER: &str = "declare namespace Definitions";

/// Notice prepended to the output unless `warning` is disabled.
pub const WARNING_BANNER: &str = "/**\n * This file was auto-generated by swagger-dts.\n * Do not make direct changes to the file.\n */";

/// Map a schema scalar `type` to its TypeScript counterpart.
///
/// Returns `None` for unrecognized kinds (caller decides the fallback).
pub fn map_primitive(kind: &str) -> Option<&'static str> {
    match kind {
        "string" => Some("string"),
        "integer" | "number" => Some("number"),
        "boolean" => Some("boolean"),
        _ => None,
    }
}

/// True when a definition is a bare primitive alias: no merged properties,
/// `additionalProperties` not exactly `true`, and a declared scalar `type`
/// that maps to a known primitive. Aliases emit no declaration and are
/// inlined at every reference site instead.
pub(crate) fn is_primitive_alias(node: &Value, merged_property_count: usize) -> bool {
    merged_property_count == 0
        && node.get("additionalProperties") != Some(&Value::Bool(true))
        && node
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| map_primitive(t).is_some())
}

/// One field of an emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Output key, already case-transformed and sanitized.
    /// Empty for catch-all members.
    pub name: String,
    /// Resolved type expression.
    pub type_expr: String,
    /// Rendered with a `?` marker when true.
    pub optional: bool,
    /// Free-text description, rendered as a comment above the member.
    pub description: Option<String>,
    /// Rendered as an index signature (`[key: string]: T`) instead of a
    /// named field.
    pub catch_all: bool,
}

impl Member {
    pub(crate) fn catch_all(type_expr: String) -> Self {
        Member {
            name: String::new(),
            type_expr,
            optional: false,
            description: None,
            catch_all: true,
        }
    }
}

/// One emitted named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Names the declaration extends (from `allOf` references).
    pub supertypes: Vec<String>,
    /// Members in input property order.
    pub members: Vec<Member>,
}

/// A `(name, node)` pair awaiting expansion into a declaration.
///
/// Duplicates by name are allowed; each entry expands exactly once.
#[derive(Debug, Clone)]
pub(crate) struct PendingDeclaration {
    pub name: String,
    pub node: Value,
}

impl PendingDeclaration {
    pub fn new(name: String, node: Value) -> Self {
        PendingDeclaration { name, node }
    }
}

/// Hook invoked once per member before it is finalized.
///
/// Receives the original property node and the computed member, and returns
/// the member to emit.
pub type PropertyMapper = Box<dyn Fn(&Value, Member) -> Member>;

/// Options for declaration generation.
pub struct GenerateOptions {
    /// Case-transform member keys before emission.
    pub camelcase: bool,
    /// Prepend the auto-generated notice to the output.
    pub warning: bool,
    /// Enclosing namespace text, or `None` for bare declarations.
    pub wrapper: Option<String>,
    /// Per-member override hook.
    pub property_mapper: Option<PropertyMapper>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            camelcase: false,
            warning: true,
            wrapper: Some(DEFAULT_WRAPPER.to_string()),
            property_mapper: None,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether member keys are camelCased.
    pub fn camelcase(mut self, camelcase: bool) -> Self {
        self.camelcase = camelcase;
        self
    }

    /// Set whether the auto-generated notice is prepended.
    pub fn warning(mut self, warning: bool) -> Self {
        self.warning = warning;
        self
    }

    /// Set the namespace wrapper text.
    pub fn wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = Some(wrapper.into());
        self
    }

    /// Emit declarations without a namespace wrapper.
    pub fn no_wrapper(mut self) -> Self {
        self.wrapper = None;
        self
    }

    /// Install a per-member override hook.
    pub fn property_mapper(mut self, mapper: impl Fn(&Value, Member) -> Member + 'static) -> Self {
        self.property_mapper = Some(Box::new(mapper));
        self
    }
}

impl fmt::Debug for GenerateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateOptions")
            .field("camelcase", &self.camelcase)
            .field("warning", &self.warning)
            .field("wrapper", &self.wrapper)
            .field("property_mapper", &self.property_mapper.is_some())
            .finish()
    }
}
