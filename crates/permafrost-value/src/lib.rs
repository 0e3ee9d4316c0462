//! The value model locked by permafrost.
//!
//! This crate is intentionally boring:
//! - a dynamic `Value` over primitives, symbols, functions, and composites
//! - reference-semantics object handles with per-property attributes
//! - explicit `freeze`/`seal` lock operations and checked mutations
//! - JSON conversions for building and inspecting graphs

#![forbid(unsafe_code)]

pub mod error;
pub mod function;
pub mod json;
pub mod object;
pub mod value;

pub use error::{JsonError, MutationError};
pub use function::FunctionRef;
pub use json::{from_json, to_json};
pub use object::{ObjectRef, Property, PropertyAttrs};
pub use value::{PropertyKey, Symbol, Value};
