//! Swagger to TypeScript declarations
//!
//! Translates the `definitions` section of a Swagger document into
//! TypeScript interface declarations.
//!
//! Object-shaped definitions become `export interface` blocks with one
//! member per property. Nested anonymous objects and arrays of objects are
//! promoted to their own named declarations; references, enums, unions, and
//! additional-property maps resolve to inline type expressions.
//!
//! # Example
//!
//! ```
//! use swagger_dts::{generate, GenerateOptions};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "definitions": {
//!         "Pet": {
//!             "type": "object",
//!             "required": ["name"],
//!             "properties": {
//!                 "name": { "type": "string" },
//!                 "tag": { "type": "string" }
//!             }
//!         }
//!     }
//! });
//!
//! let output = generate(&doc, &GenerateOptions::default()).unwrap();
//! assert!(output.contains("export interface Pet {"));
//! assert!(output.contains("name: string;"));
//! assert!(output.contains("tag?: string;"));
//! ```
//!
//! # Resolution rules
//!
//! | Schema shape | Type expression |
//! |--------------|-----------------|
//! | `$ref` to an object definition | the referenced name |
//! | `$ref` to a primitive alias | the inlined primitive |
//! | array of `$ref` | `ReadonlyArray<Name>` |
//! | array of primitive | `ReadonlyArray<primitive>` |
//! | array of anonymous object | `ReadonlyArray<PromotedName>` |
//! | `oneOf` | alternatives joined with ` \| ` |
//! | nested object with `properties` | a promoted named declaration |
//! | `enum` | literal union of the JSON-quoted values |
//! | unrecognized | `object` |

mod builder;
mod error;
mod generator;
mod loader;
mod naming;
mod pretty;
mod refs;
mod render;
mod resolver;
mod summary;
mod types;

pub use error::{FormatError, GenerateError};
pub use generator::{build_declarations, generate, generate_definitions};
pub use loader::{is_url, load_document, load_document_auto, load_document_str};
pub use pretty::reformat;
pub use summary::{summarize, DefinitionKind, DefinitionSummary};
pub use types::{
    map_primitive, Declaration, GenerateOptions, Member, PropertyMapper, DEFAULT_TYPE,
    DEFAULT_WRAPPER, WARNING_BANNER,
};

#[cfg(feature = "remote")]
pub use loader::load_document_url;
