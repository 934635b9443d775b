//! # Ferrotype Schema
//!
//! JSON Schema document model, loader and reference resolver.
//!
//! This crate provides:
//! - A keyword-complete document model for the supported 2020-12 subset
//! - Boolean-schema normalization at parse time
//! - Effective type-kind classification
//! - Local `#/$defs/` reference resolution with cycle detection

pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;

pub use error::{LoadError, ResolveError};
pub use loader::{load_schema, parse_schema};
pub use model::{SchemaNode, TypeKind};
pub use resolver::{Resolver, def_name};
