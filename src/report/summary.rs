//! Human-readable task summary for inspecting an NSQ document
//!
//! One block per task: the task's own filters, then each recipient with the
//! fields of the filters assigned to them. Each nesting level is one tab.
//! Dangling references are shown inline rather than treated as errors.

use crate::nsq::{Document, Field, Filter};

use super::projector::format_tags;

pub fn task_summary(document: &Document) -> String {
    let mut out = String::new();
    for task in &document.tasks {
        out.push_str(&format!("Task: {}\n", task.label));

        for filter_id in &task.filters {
            match document.get_filter(filter_id) {
                Some(filter) => {
                    out.push_str(&format!("\tTask filter: {}\n", filter.name));
                    push_filter_fields(&mut out, filter);
                }
                None => out.push_str(&format!("\tTask filter: <missing filter '{}'>\n", filter_id)),
            }
        }

        for user_id in &task.recipients {
            let Some(user) = document.get_user(user_id) else {
                out.push_str(&format!("\tRecipient: <missing user '{}'>\n", user_id));
                continue;
            };
            out.push_str(&format!("\tRecipient: {} ({})\n", user.name, user.email));
            for filter_id in &user.filters {
                match document.get_filter(filter_id) {
                    Some(filter) => push_filter_fields(&mut out, filter),
                    None => out.push_str(&format!("\t\t<missing filter '{}'>\n", filter_id)),
                }
            }
        }
    }
    out
}

fn push_filter_fields(out: &mut String, filter: &Filter) {
    for field in &filter.fields {
        out.push_str("\t\t");
        out.push_str(&field_line(field));
        out.push('\n');
    }
}

/// `Region: North, South<evaluate> <lock>`
fn field_line(field: &Field) -> String {
    let values = field
        .values
        .iter()
        .map(|value| format!("{}{}", value.display_value(), format_tags(&value.tags())))
        .collect::<Vec<_>>()
        .join(", ");
    let tags = format_tags(&field.tags());
    if tags.is_empty() {
        format!("{}: {}", field.name, values)
    } else {
        format!("{}: {} {}", field.name, values, tags)
    }
}
