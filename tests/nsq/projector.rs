use nsq_report::nsq::{Document, NsqSource};
use nsq_report::report::{ReportProjector, render_report, task_summary};
use nsq_report::{EntityKind, NsqError};

use super::{fixture, nsq_file, task, user};

fn render(raw: &str) -> String {
    let document = Document::from_source(&NsqSource::from_raw("test.nsq", raw)).unwrap();
    let rows = ReportProjector::new(&document).rows().unwrap();
    render_report(&rows).unwrap()
}

#[test]
fn test_single_user_single_task() {
    let raw = nsq_file(
        &[user("u1", "A", "a@x.com", &[])],
        &[task("t1", "T1", &["u1"])],
    );
    assert_eq!(
        render(&raw),
        "Name,Email,Desc (Tasks),Filters\r\nA,a@x.com,T1,\r\n"
    );
}

#[test]
fn test_task_labels_follow_task_order() {
    let raw = nsq_file(
        &[user("u1", "A", "a@x.com", &[]), user("u2", "B", "b@x.com", &[])],
        &[task("t1", "T1", &["u1"]), task("t2", "T2", &["u2", "u1"])],
    );
    assert_eq!(
        render(&raw),
        "Name,Email,Desc (Tasks),Filters\r\n\
         A,a@x.com,\"T1, T2\",\r\n\
         B,b@x.com,T2,\r\n"
    );
}

#[test]
fn test_user_without_tasks_keeps_row() {
    let raw = nsq_file(&[user("u1", "A", "a@x.com", &[])], &[]);
    assert_eq!(render(&raw), "Name,Email,Desc (Tasks),Filters\r\nA,a@x.com,,\r\n");
}

#[test]
fn test_fixture_report() {
    let document = Document::load(fixture("distribution.nsq")).unwrap();
    let rows = ReportProjector::new(&document).rows().unwrap();
    let expected = concat!(
        "Name,Email,Desc (Tasks),Filters\r\n",
        "Ann Example,ann@example.com,\"Weekly sales, Monthly sales\",",
        "\"[Region] = {North,=Only(NorthEast)<evaluate>}<verify,lock>, [Year] = {2024}\"\r\n",
        "Bob Example,bob@example.com,,\r\n",
        "Cat Example,cat@example.com,Weekly sales,[Year] = {2024}\r\n",
    );
    assert_eq!(render_report(&rows).unwrap(), expected);
}

#[test]
fn test_report_is_deterministic() {
    let document = Document::load(fixture("distribution.nsq")).unwrap();
    let projector = ReportProjector::new(&document);
    let first = render_report(&projector.rows().unwrap()).unwrap();
    let second = render_report(&projector.rows().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dangling_filter_is_reference_error() {
    let document = Document::load(fixture("dangling_filter.nsq")).unwrap();
    let err = ReportProjector::new(&document).rows().unwrap_err();
    match err {
        NsqError::Reference { kind, id, referrer } => {
            assert_eq!(kind, EntityKind::Filter);
            assert_eq!(id, "f-gone");
            assert_eq!(referrer, "user 'Cat Example'");
        }
        other => panic!("expected reference error, got {other:?}"),
    }
}

#[test]
fn test_fixture_task_summary() {
    let document = Document::load(fixture("distribution.nsq")).unwrap();
    let region = "\t\tRegion: North, =Only(NorthEast)<evaluate> <verify,lock>\n";
    let expected = [
        "Task: Weekly sales\n",
        "\tTask filter: Current year\n",
        "\t\tYear: 2024\n",
        "\tRecipient: Ann Example (ann@example.com)\n",
        region,
        "\t\tYear: 2024\n",
        "\tRecipient: Cat Example (cat@example.com)\n",
        "\t\tYear: 2024\n",
        "Task: Monthly sales\n",
        "\tRecipient: Ann Example (ann@example.com)\n",
        region,
        "\t\tYear: 2024\n",
    ]
    .concat();
    assert_eq!(task_summary(&document), expected);
}

#[test]
fn test_summary_tolerates_dangling_filter() {
    let document = Document::load(fixture("dangling_filter.nsq")).unwrap();
    let summary = task_summary(&document);
    assert!(summary.contains(
        "\tRecipient: Cat Example (cat@example.com)\n\t\t<missing filter 'f-gone'>\n"
    ));
}
