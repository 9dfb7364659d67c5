//! NSQ export parsing
//!
//! Loading happens in two stages: [`loader`] turns a file into an XML tree
//! with a normalized declaration, then [`models`] builds the typed entity
//! hierarchy from the tree's named properties.

pub mod loader;
pub mod models;
pub mod path;
pub mod property;

#[cfg(test)]
pub(crate) mod test_support;

pub use loader::NsqSource;
pub use models::{
    Document, Field, FieldValue, Filter, Identified, OfficeReport, OpaqueEntity, Task, User,
};
pub use property::{PropertyIndex, PropertyReader};
