use roxmltree::Node;

use crate::error::{EntityKind, Result};
use crate::nsq::property::PropertyReader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub email: String,
    /// IDs into the document's filter collection
    pub filters: Vec<String>,
}

impl User {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::User)?;
        let user = User {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            email: props.text("Email"),
            filters: props.references("Filters"),
        };
        props.finish()?;
        Ok(user)
    }
}
