use log::trace;
use roxmltree::Node;

use crate::error::{EntityKind, Result};
use crate::nsq::path::SOURCE_FIELD_NAME;
use crate::nsq::property::PropertyReader;

/// A named filter owning an ordered list of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub fields: Vec<Field>,
}

impl Filter {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::Filter)?;
        let filter = Filter {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            fields: props.collection("Fields", Field::from_object),
        };
        props.finish()?;
        trace!("Built filter '{}' with {} fields", filter.name, filter.fields.len());
        Ok(filter)
    }
}

/// One field of a filter, with its selected values and behaviour flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub source_field: String,
    /// `CheckPossible`
    pub verify: bool,
    /// `UserCanUnlock`
    pub unlock: bool,
    pub excluded: bool,
    pub lock: bool,
    pub values: Vec<FieldValue>,
}

impl Field {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::Field)?;
        let field = Field {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            source_field: props.nested_text("SourceField", SOURCE_FIELD_NAME),
            verify: props.flag("CheckPossible"),
            unlock: props.flag("UserCanUnlock"),
            excluded: props.flag("Excluded"),
            lock: props.flag("Lock"),
            values: props.collection("Values", FieldValue::from_object),
        };
        props.finish()?;
        Ok(field)
    }

    /// Active flags, always in the order verify, unlock, excluded, lock
    pub fn tags(&self) -> Vec<&'static str> {
        [
            (self.verify, "verify"),
            (self.unlock, "unlock"),
            (self.excluded, "excluded"),
            (self.lock, "lock"),
        ]
        .into_iter()
        .filter_map(|(active, tag)| active.then_some(tag))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub value: String,
    pub number: String,
    pub is_numeric: bool,
    pub evaluate: bool,
}

impl FieldValue {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::FieldValue)?;
        let value = FieldValue {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            value: props.text("Value"),
            number: props.text("Number"),
            is_numeric: props.flag("IsNumeric"),
            evaluate: props.flag("Evaluate"),
        };
        props.finish()?;
        Ok(value)
    }

    pub fn tags(&self) -> Vec<&'static str> {
        if self.evaluate { vec!["evaluate"] } else { Vec::new() }
    }

    /// The number for numeric values, the text otherwise
    pub fn display_value(&self) -> &str {
        if self.is_numeric { &self.number } else { &self.value }
    }
}
