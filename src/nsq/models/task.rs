use log::trace;
use roxmltree::Node;

use crate::error::{EntityKind, Result};
use crate::nsq::path::RECIPIENT_IDS;
use crate::nsq::property::PropertyReader;

/// A distribution task and the users and filters it references by ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub database_connection: String,
    pub recipients: Vec<String>,
    pub filters: Vec<String>,
    pub conditions: Vec<String>,
}

impl Task {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::Task)?;
        let task = Task {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            database_connection: props.text("DatabaseConnectionID"),
            recipients: props.walk("Recipients", RECIPIENT_IDS),
            filters: props.references("Filters"),
            conditions: props.optional_references("Conditions"),
        };
        props.finish()?;
        trace!(
            "Built task '{}' with {} recipients",
            task.label,
            task.recipients.len()
        );
        Ok(task)
    }

    pub fn has_recipient(&self, user_id: &str) -> bool {
        self.recipients.iter().any(|id| id == user_id)
    }
}
