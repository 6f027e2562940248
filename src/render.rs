//! Raw text rendering of declarations.
//!
//! Produces one statement or member per line, wrapped in the optional
//! warning banner and namespace envelope. The output is deliberately rough;
//! `pretty::reformat` normalizes spacing and indentation afterwards.

use crate::naming;
use crate::types::{Declaration, GenerateOptions, WARNING_BANNER};

/// Render the full document: banner, wrapper, declaration blocks.
pub(crate) fn render_document(declarations: &[Declaration], options: &GenerateOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if options.warning {
        lines.extend(WARNING_BANNER.lines().map(str::to_string));
        lines.push(String::new());
    }
    if let Some(wrapper) = &options.wrapper {
        lines.push(format!("{} {{", wrapper));
    }

    for (index, declaration) in declarations.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        render_declaration(declaration, &mut lines);
    }

    if options.wrapper.is_some() {
        lines.push("}".to_string());
    }

    lines.join("\n")
}

fn render_declaration(declaration: &Declaration, lines: &mut Vec<String>) {
    let name = naming::camel_case(&declaration.name);
    if declaration.supertypes.is_empty() {
        lines.push(format!("export interface {} {{", name));
    } else {
        lines.push(format!(
            "export interface {} extends {} {{",
            name,
            declaration.supertypes.join(", ")
        ));
    }

    for member in &declaration.members {
        if let Some(description) = &member.description {
            for line in description.trim_end().lines() {
                lines.push(format!("// {}", line));
            }
        }
        if member.catch_all {
            lines.push(format!("[key: string]: {};", member.type_expr));
        } else {
            let marker = if member.optional { "?" } else { "" };
            lines.push(format!("{}{}: {};", member.name, marker, member.type_expr));
        }
    }

    lines.push("}".to_string());
}
