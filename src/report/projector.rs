//! Flattens a [`Document`] into one report row per user

use log::debug;

use crate::error::{EntityKind, NsqError, Result};
use crate::nsq::{Document, Field, FieldValue, User};

/// Column names of the user report, in output order
pub const HEADER: [&str; 4] = ["Name", "Email", "Desc (Tasks)", "Filters"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub email: String,
    /// Labels of the tasks the user receives, comma-space joined
    pub tasks: String,
    /// Rendered filter fields of every filter assigned to the user
    pub filters: String,
}

impl ReportRow {
    pub fn as_record(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.email.as_str(),
            self.tasks.as_str(),
            self.filters.as_str(),
        ]
    }
}

/// Resolves task, user and filter references of one document into report rows
pub struct ReportProjector<'d> {
    document: &'d Document,
}

impl<'d> ReportProjector<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self { document }
    }

    /// One row per user, in document order
    pub fn rows(&self) -> Result<Vec<ReportRow>> {
        let rows = self
            .document
            .users
            .iter()
            .map(|user| self.row_for(user))
            .collect::<Result<Vec<_>>>()?;
        debug!("Projected {} report rows", rows.len());
        Ok(rows)
    }

    pub fn row_for(&self, user: &User) -> Result<ReportRow> {
        Ok(ReportRow {
            name: user.name.clone(),
            email: user.email.clone(),
            tasks: self.tasks_containing_user(&user.id),
            filters: self.user_filter_format(user)?,
        })
    }

    /// Labels of every task with `user_id` among its recipients, in task order
    pub fn tasks_containing_user(&self, user_id: &str) -> String {
        self.document
            .tasks_for_user(user_id)
            .map(|task| task.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render every field of every filter assigned to `user`.
    ///
    /// A filter ID that matches no filter in the document is a
    /// [`NsqError::Reference`].
    pub fn user_filter_format(&self, user: &User) -> Result<String> {
        let mut rendered = Vec::new();
        for filter_id in &user.filters {
            let filter = self
                .document
                .get_filter(filter_id)
                .ok_or_else(|| NsqError::Reference {
                    kind: EntityKind::Filter,
                    id: filter_id.clone(),
                    referrer: format!("user '{}'", user.name),
                })?;
            rendered.extend(filter.fields.iter().map(format_field));
        }
        Ok(rendered.join(", "))
    }
}

/// `[name] = {value<tags>,value}<tags>`
pub fn format_field(field: &Field) -> String {
    let values = field
        .values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{}] = {{{}}}{}", field.name, values, format_tags(&field.tags()))
}

pub fn format_value(value: &FieldValue) -> String {
    format!("{}{}", value.value, format_tags(&value.tags()))
}

/// `<a,b>` for active tags, nothing when there are none
pub fn format_tags(tags: &[&str]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("<{}>", tags.join(","))
    }
}
