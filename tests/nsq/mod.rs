/// NSQ report pipeline tests
///
/// Fixtures live in `tests/fixtures/`. Small documents that need a specific
/// shape are built with the helpers below.

pub mod loader;
pub mod projector;

use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("fixture should be readable")
}

/// Copy a fixture into `dir` under a new file name
pub fn copy_fixture(name: &str, dir: &Path, as_name: &str) -> PathBuf {
    let target = dir.join(as_name);
    fs::copy(fixture(name), &target).expect("fixture copy");
    target
}

pub fn prop(name: &str, text: &str) -> String {
    format!(r#"<Property name="{}">{}</Property>"#, name, text)
}

pub fn object(props: &[String]) -> String {
    format!("<Object><Properties>{}</Properties></Object>", props.concat())
}

pub fn list(name: &str, items: &[String]) -> String {
    format!(r#"<Property name="{}">{}</Property>"#, name, items.concat())
}

pub fn refs(name: &str, ids: &[&str]) -> String {
    let items: Vec<String> = ids
        .iter()
        .map(|id| format!("<Reference>{}</Reference>", id))
        .collect();
    list(name, &items)
}

fn header(id: &str, name: &str) -> Vec<String> {
    vec![
        prop("ID", id),
        prop("Name", name),
        prop("Description", ""),
        prop("Label_", name),
    ]
}

pub fn user(id: &str, name: &str, email: &str, filters: &[&str]) -> String {
    let mut props = header(id, name);
    props.push(prop("Email", email));
    props.push(refs("Filters", filters));
    object(&props)
}

pub fn task(id: &str, label: &str, recipients: &[&str]) -> String {
    let entries: Vec<String> = recipients
        .iter()
        .map(|user_id| object(&[prop("ReferenceID", user_id), prop("Type", "User")]))
        .collect();
    let mut props = header(id, label);
    props.push(prop("DatabaseConnectionID", "db-1"));
    props.push(list("Recipients", &[object(&[list("Recipients", &entries)])]));
    props.push(refs("Filters", &[]));
    object(&props)
}

/// NSQ file text with the given users and tasks and no filters
pub fn nsq_file(users: &[String], tasks: &[String]) -> String {
    let mut props = header("doc-1", "Distribution");
    props.push(list("Filters", &[]));
    props.push(list("Users", users));
    props.push(list("OfficeReports", &[]));
    props.push(list("Tasks", tasks));
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-16\"?>\n<NSQ>{}</NSQ>\n",
        object(&props)
    )
}
