use nsq_report::nsq::{Document, NsqSource};
use nsq_report::{EntityKind, NsqError, SchemaError};

use super::{fixture, nsq_file, read_fixture, task, user};

#[test]
fn test_fixture_builds_every_collection() {
    let document = Document::load(fixture("distribution.nsq")).unwrap();

    assert_eq!(document.name, "Sales distribution");
    assert_eq!(document.users.len(), 3);
    assert_eq!(document.filters.len(), 2);
    assert_eq!(document.office_reports.len(), 1);
    assert_eq!(document.database_connections.len(), 1);
    assert!(document.schedules.is_empty());

    let labels: Vec<&str> = document.tasks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["Weekly sales", "Monthly sales"]);
    assert_eq!(document.tasks[0].recipients, vec!["u-ann", "u-cat"]);
    assert_eq!(document.tasks[1].conditions, vec!["c-1"]);
}

#[test]
fn test_fixture_field_flags_and_values() {
    let document = Document::load(fixture("distribution.nsq")).unwrap();
    let north = document.get_filter("f-north").unwrap();
    let region = &north.fields[0];

    assert_eq!(region.source_field, "RegionName");
    assert_eq!(region.tags(), vec!["verify", "lock"]);
    assert!(!region.values[0].evaluate);
    assert!(region.values[1].evaluate);

    let year = &document.get_filter("f-year").unwrap().fields[0];
    assert!(year.tags().is_empty());
    assert_eq!(year.values[0].display_value(), "2024");
}

#[test]
fn test_first_line_is_always_replaced() {
    // A first line that is already a valid declaration is still dropped
    let raw = read_fixture("distribution.nsq").replacen("utf-16", "UTF-8", 1);
    let document = Document::from_source(&NsqSource::from_raw("a.nsq", &raw)).unwrap();
    assert_eq!(document.users.len(), 3);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let err = Document::load(fixture("malformed.nsq")).unwrap_err();
    assert!(matches!(err, NsqError::Parse { .. }), "got {err:?}");
    assert!(err.to_string().contains("malformed.nsq"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Document::load(fixture("does-not-exist.nsq")).unwrap_err();
    assert!(matches!(err, NsqError::Io { .. }));
}

#[test]
fn test_user_missing_email_reports_schema_error() {
    let without_email = user("u1", "A", "a@x.com", &[])
        .replace(r#"<Property name="Email">a@x.com</Property>"#, "");
    let raw = nsq_file(&[without_email], &[task("t1", "T1", &["u1"])]);

    let err = Document::from_source(&NsqSource::from_raw("a.nsq", &raw)).unwrap_err();
    match err {
        NsqError::Schema(SchemaError::MissingProperties { entity, properties }) => {
            assert_eq!(entity, EntityKind::User);
            assert_eq!(properties, vec!["Email"]);
        }
        other => panic!("expected missing properties, got {other:?}"),
    }
}

#[test]
fn test_document_without_object_is_schema_error() {
    let source = NsqSource::from_raw("empty.nsq", "header\n<NSQ/>");
    let err = Document::from_source(&source).unwrap_err();
    assert!(matches!(
        err,
        NsqError::Schema(SchemaError::MissingNesting { .. })
    ));
}
