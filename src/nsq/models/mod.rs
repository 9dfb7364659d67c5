//! Typed entities built from an NSQ property tree

pub mod document;
pub mod filter;
pub mod office_report;
pub mod task;
pub mod user;

pub use document::Document;
pub use filter::{Field, FieldValue, Filter};
pub use office_report::OfficeReport;
pub use task::Task;
pub use user::User;

use roxmltree::Node;

use super::property::PropertyIndex;
use crate::error::EntityKind;

/// Entities addressable by their `ID` property
pub trait Identified {
    fn id(&self) -> &str;
}

/// Linear lookup of an entity by ID within one collection
pub fn find_by_id<'d, T: Identified>(items: &'d [T], id: &str) -> Option<&'d T> {
    items.iter().find(|item| item.id() == id)
}

/// An entity from a collection that is carried through but not interpreted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueEntity {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl OpaqueEntity {
    /// Keep whatever `ID` and `Name` the object exposes; never fails
    pub fn from_object(object: Node<'_, '_>) -> Self {
        match PropertyIndex::of_object(object, EntityKind::Document) {
            Ok(index) => Self {
                id: index.get("ID").map(super::path::leaf_text),
                name: index.get("Name").map(super::path::leaf_text),
            },
            Err(_) => Self::default(),
        }
    }
}

macro_rules! impl_identified {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl Identified for $entity {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_identified!(User, Filter);
