use roxmltree::Node;

use crate::error::{EntityKind, Result};
use crate::nsq::property::PropertyReader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficeReport {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub database_connection: String,
    pub report_type: String,
    pub template: String,
}

impl OfficeReport {
    pub fn from_object(object: Node<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::new(object, EntityKind::OfficeReport)?;
        let report = OfficeReport {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            database_connection: props.text("DatabaseConnectionID"),
            report_type: props.text("ReportType"),
            template: props.text("Template"),
        };
        props.finish()?;
        Ok(report)
    }
}
