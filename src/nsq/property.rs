//! Property indexing and schema-driven property reading
//!
//! Every NSQ entity is an object element whose first child holds a flat list
//! of `<... name="X">` property elements. [`PropertyIndex`] maps those names
//! to their elements; [`PropertyReader`] pulls typed values out of the index
//! and collects every missing required property before failing.

use log::trace;
use roxmltree::Node;
use std::collections::HashMap;

use super::path::{self, Step, elements, leaf_text};
use crate::error::{EntityKind, NsqError, Result, SchemaError};

/// Literal text that marks a flag property as set. Comparison is case-sensitive.
pub const TRUE_LITERAL: &str = "True";

/// Read an optional boolean flag, defaulting to false when absent
pub fn read_flag(property: Option<Node<'_, '_>>) -> bool {
    property.and_then(|node| node.text()) == Some(TRUE_LITERAL)
}

/// Mapping from property name to the element carrying its value,
/// scoped to one entity's nesting level
#[derive(Debug)]
pub struct PropertyIndex<'a, 'input> {
    entity: EntityKind,
    properties: HashMap<&'a str, Node<'a, 'input>>,
}

impl<'a, 'input> PropertyIndex<'a, 'input> {
    /// Index the properties of an object element (its first element child)
    pub fn of_object(
        object: Node<'a, 'input>,
        entity: EntityKind,
    ) -> std::result::Result<Self, SchemaError> {
        let container = object
            .first_element_child()
            .ok_or_else(|| SchemaError::MissingNesting {
                entity,
                step: format!("<{}>{}", object.tag_name().name(), Step::First),
            })?;
        Self::from_container(container, entity)
    }

    /// Index the named property elements directly under `container`.
    /// A repeated name resolves to its last occurrence.
    pub fn from_container(
        container: Node<'a, 'input>,
        entity: EntityKind,
    ) -> std::result::Result<Self, SchemaError> {
        let mut properties = HashMap::new();
        for property in elements(container) {
            let name = property
                .attribute("name")
                .ok_or_else(|| SchemaError::UnnamedProperty {
                    entity,
                    tag: property.tag_name().name().to_string(),
                })?;
            properties.insert(name, property);
        }
        trace!("Indexed {} properties for {}", properties.len(), entity);
        Ok(Self { entity, properties })
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    pub fn get(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.properties.get(name).copied()
    }

}

/// Reads typed values out of a [`PropertyIndex`] for one entity.
///
/// Required reads that miss are recorded and reported together by
/// [`PropertyReader::finish`], so a single pass names every absent key.
/// The first failure while building a nested child is kept and surfaced
/// after this entity's own missing keys.
pub struct PropertyReader<'a, 'input> {
    index: PropertyIndex<'a, 'input>,
    missing: Vec<String>,
    nested_error: Option<NsqError>,
}

impl<'a, 'input> PropertyReader<'a, 'input> {
    pub fn new(
        object: Node<'a, 'input>,
        entity: EntityKind,
    ) -> std::result::Result<Self, SchemaError> {
        Ok(Self::from_index(PropertyIndex::of_object(object, entity)?))
    }

    pub fn from_index(index: PropertyIndex<'a, 'input>) -> Self {
        Self {
            index,
            missing: Vec::new(),
            nested_error: None,
        }
    }

    fn require(&mut self, name: &str) -> Option<Node<'a, 'input>> {
        let property = self.index.get(name);
        if property.is_none() {
            self.missing.push(name.to_string());
        }
        property
    }

    /// Required scalar property, copied as text
    pub fn text(&mut self, name: &str) -> String {
        self.require(name).map(leaf_text).unwrap_or_default()
    }

    /// Boolean flag property; absent or any text other than `True` is false
    pub fn flag(&self, name: &str) -> bool {
        read_flag(self.index.get(name))
    }

    /// Required list of ID references, one per child element
    pub fn references(&mut self, name: &str) -> Vec<String> {
        self.require(name)
            .map(|property| elements(property).map(leaf_text).collect())
            .unwrap_or_default()
    }

    /// List of ID references that defaults to empty when absent
    pub fn optional_references(&self, name: &str) -> Vec<String> {
        self.index
            .get(name)
            .map(|property| elements(property).map(leaf_text).collect())
            .unwrap_or_default()
    }

    /// Leaf texts reached by walking `steps` from a required property.
    /// Nesting that breaks off before the walk ends counts as a missing property.
    pub fn walk(&mut self, name: &str, steps: &[Step]) -> Vec<String> {
        let Some(property) = self.require(name) else {
            return Vec::new();
        };
        match path::select_texts(property, steps) {
            Ok(texts) => texts,
            Err(reached) => {
                self.missing.push(format!("{}{}", name, reached));
                Vec::new()
            }
        }
    }

    /// Leaf text reached by walking `steps` from a required property. When the
    /// walk selects several leaves the last one wins, as with repeated names in
    /// [`PropertyIndex`]. A walk that reaches nothing counts as a missing property.
    pub fn nested_text(&mut self, name: &str, steps: &[Step]) -> String {
        let Some(property) = self.require(name) else {
            return String::new();
        };
        match path::select_texts(property, steps).map(|texts| texts.into_iter().last()) {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.missing.push(format!("{}{}", name, path::describe(steps)));
                String::new()
            }
            Err(reached) => {
                self.missing.push(format!("{}{}", name, reached));
                String::new()
            }
        }
    }

    /// Required collection: each child element is an object built by `build`
    pub fn collection<T, F>(&mut self, name: &str, build: F) -> Vec<T>
    where
        F: Fn(Node<'a, 'input>) -> Result<T>,
    {
        match self.require(name) {
            Some(property) => self.build_items(property, build),
            None => Vec::new(),
        }
    }

    /// Collection that defaults to empty when absent
    pub fn optional_collection<T, F>(&mut self, name: &str, build: F) -> Vec<T>
    where
        F: Fn(Node<'a, 'input>) -> Result<T>,
    {
        match self.index.get(name) {
            Some(property) => self.build_items(property, build),
            None => Vec::new(),
        }
    }

    fn build_items<T, F>(&mut self, property: Node<'a, 'input>, build: F) -> Vec<T>
    where
        F: Fn(Node<'a, 'input>) -> Result<T>,
    {
        let mut items = Vec::new();
        if self.nested_error.is_some() {
            return items;
        }
        for child in elements(property) {
            match build(child) {
                Ok(item) => items.push(item),
                Err(err) => {
                    self.nested_error = Some(err);
                    break;
                }
            }
        }
        items
    }

    /// Fail with every missing required property, then with any nested failure
    pub fn finish(self) -> Result<()> {
        if !self.missing.is_empty() {
            return Err(SchemaError::MissingProperties {
                entity: self.index.entity(),
                properties: self.missing,
            }
            .into());
        }
        match self.nested_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
