//! XML builders for unit tests

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

pub fn header(id: &str, name: &str, label: &str) -> Vec<String> {
    vec![
        prop("ID", id),
        prop("Name", name),
        prop("Description", ""),
        prop("Label_", label),
    ]
}

pub fn user(id: &str, name: &str, email: &str, filters: &[&str]) -> String {
    let mut props = header(id, name, name);
    props.push(prop("Email", email));
    props.push(refs("Filters", filters));
    object(&props)
}

pub fn task(id: &str, label: &str, recipients: &[&str], filters: &[&str]) -> String {
    let entries: Vec<String> = recipients
        .iter()
        .map(|user_id| object(&[prop("ReferenceID", user_id)]))
        .collect();
    let recipient_list = object(&[list("Recipients", &entries)]);

    let mut props = header(id, label, label);
    props.push(prop("DatabaseConnectionID", "db-1"));
    props.push(list("Recipients", &[recipient_list]));
    props.push(refs("Filters", filters));
    object(&props)
}

pub fn filter(id: &str, name: &str, fields: &[String]) -> String {
    let mut props = header(id, name, name);
    props.push(list("Fields", fields));
    object(&props)
}

pub fn field(id: &str, name: &str, flags: &[(&str, &str)], values: &[String]) -> String {
    let mut props = header(id, name, name);
    props.push(list("SourceField", &[object(&[prop("Name", name)])]));
    props.extend(flags.iter().map(|(flag, text)| prop(flag, text)));
    props.push(list("Values", values));
    object(&props)
}

pub fn value(id: &str, text: &str, flags: &[(&str, &str)]) -> String {
    let mut props = header(id, text, text);
    props.push(prop("Value", text));
    props.push(prop("Number", "0"));
    props.extend(flags.iter().map(|(flag, text)| prop(flag, text)));
    object(&props)
}

/// A full NSQ file (declaration line included) around the given collections
pub fn nsq_file(users: &[String], tasks: &[String], filters: &[String]) -> String {
    let mut props = header("doc-1", "Distribution", "Distribution");
    props.push(list("Filters", filters));
    props.push(list("Users", users));
    props.push(list("OfficeReports", &[]));
    props.push(list("Tasks", tasks));
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-16\"?>\n<NSQ>{}</NSQ>",
        object(&props)
    )
}

/// Parse a single object snippet and hand its root element to `f`
pub fn with_object<T>(xml: &str, f: impl FnOnce(roxmltree::Node<'_, '_>) -> T) -> T {
    let doc = roxmltree::Document::parse(xml).expect("test XML must be well-formed");
    f(doc.root_element())
}
