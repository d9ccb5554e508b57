//! Declarative index schema for the artists and workshops search indexes.
//!
//! Establishes the field vocabulary the query builder may reference: which
//! paths are full-text, facet, numeric, boolean, date, or geo, and which
//! text fields carry an edge-n-gram autocomplete sub-field. Purely a lookup
//! table; a malformed schema is a build-time error, not a runtime one.

pub mod definition;
pub mod fields;

pub use definition::index_definition;
pub use fields::{fields, search_paths, FieldKind, IndexField, SearchPaths};
