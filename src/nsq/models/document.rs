use log::{debug, info};
use roxmltree::Node;
use std::path::Path;

use super::{Filter, OfficeReport, OpaqueEntity, Task, User, find_by_id};
use crate::error::Result;
use crate::nsq::loader::{self, NsqSource};
use crate::nsq::property::{PropertyIndex, PropertyReader};

/// Root entity of one NSQ file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: String,
    pub label: String,
    pub database_connections: Vec<OpaqueEntity>,
    pub destinations: Vec<OpaqueEntity>,
    pub linked_fields: Vec<OpaqueEntity>,
    pub conditions: Vec<OpaqueEntity>,
    pub filters: Vec<Filter>,
    pub roles: Vec<OpaqueEntity>,
    pub users: Vec<User>,
    pub user_imports: Vec<OpaqueEntity>,
    pub groups: Vec<OpaqueEntity>,
    pub qlik_reports: Vec<OpaqueEntity>,
    pub reports: Vec<OpaqueEntity>,
    pub office_reports: Vec<OfficeReport>,
    pub tasks: Vec<Task>,
    pub jobs: Vec<OpaqueEntity>,
    pub schedules: Vec<OpaqueEntity>,
}

fn opaque(object: Node<'_, '_>) -> Result<OpaqueEntity> {
    Ok(OpaqueEntity::from_object(object))
}

impl Document {
    /// Read, parse and build the document stored in an NSQ file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = NsqSource::read(path)?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &NsqSource) -> Result<Self> {
        let tree = source.parse()?;
        let document = Self::from_index(loader::property_index(&tree)?)?;
        info!(
            "Loaded {}: {} users, {} tasks, {} filters",
            source.path().display(),
            document.users.len(),
            document.tasks.len(),
            document.filters.len()
        );
        Ok(document)
    }

    /// Build from the named properties of the document object
    pub fn from_index(index: PropertyIndex<'_, '_>) -> Result<Self> {
        let mut props = PropertyReader::from_index(index);
        let document = Document {
            id: props.text("ID"),
            name: props.text("Name"),
            description: props.text("Description"),
            label: props.text("Label_"),
            database_connections: props.optional_collection("DatabaseConnections", opaque),
            destinations: props.optional_collection("Destinations", opaque),
            linked_fields: props.optional_collection("LinkedFields", opaque),
            conditions: props.optional_collection("Conditions", opaque),
            filters: props.collection("Filters", Filter::from_object),
            roles: props.optional_collection("Roles", opaque),
            users: props.collection("Users", User::from_object),
            user_imports: props.optional_collection("UserImports", opaque),
            groups: props.optional_collection("Groups", opaque),
            qlik_reports: props.optional_collection("QlikReports", opaque),
            reports: props.optional_collection("Reports", opaque),
            office_reports: props.collection("OfficeReports", OfficeReport::from_object),
            tasks: props.collection("Tasks", Task::from_object),
            jobs: props.optional_collection("Jobs", opaque),
            schedules: props.optional_collection("Schedules", opaque),
        };
        props.finish()?;
        debug!(
            "Built document '{}' ({} office reports, {} schedules)",
            document.name,
            document.office_reports.len(),
            document.schedules.len()
        );
        Ok(document)
    }

    pub fn get_filter(&self, filter_id: &str) -> Option<&Filter> {
        find_by_id(&self.filters, filter_id)
    }

    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        find_by_id(&self.users, user_id)
    }

    /// Tasks that list `user_id` as a recipient, in task order
    pub fn tasks_for_user<'d>(&'d self, user_id: &'d str) -> impl Iterator<Item = &'d Task> + 'd {
        self.tasks.iter().filter(move |task| task.has_recipient(user_id))
    }
}
