use std::io::Write;
use std::path::PathBuf;

use algolab::student::{comparator, load_students, Direction, LoadError, SortKey};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn fixture_loads_with_derived_totals() {
    let students = load_students(&fixture_path("students.csv")).expect("fixture must load");
    assert_eq!(students.len(), 20);
    for s in &students {
        assert_eq!(s.total, s.korean + s.english + s.math);
    }
    let first = &students[0];
    assert_eq!(first.id, 100001);
    assert_eq!(first.name, "Kim Minjun");
    assert_eq!(first.gender, 'M');
    assert_eq!(first.total, 88 + 92 + 79);
}

#[test]
fn comparators_order_the_fixture() {
    let mut students = load_students(&fixture_path("students.csv")).expect("fixture must load");

    let by_id = comparator(SortKey::Id, Direction::Asc);
    students.sort_by(|a, b| by_id(a, b));
    assert!(students.windows(2).all(|w| w[0].id < w[1].id));

    let by_total_desc = comparator(SortKey::Total, Direction::Desc);
    students.sort_by(|a, b| by_total_desc(a, b));
    assert!(students.windows(2).all(|w| w[0].total >= w[1].total));
    // Seo Junho holds the top total in the fixture
    assert_eq!(students[0].name, "Seo Junho");
}

#[test]
fn header_only_file_is_empty() {
    let file = temp_csv("id,name,gender,korean,english,math\n");
    let err = load_students(file.path()).expect_err("no data rows");
    assert!(matches!(err, LoadError::Empty { .. }));
}

#[test]
fn missing_field_reports_the_line() {
    let file = temp_csv("id,name,gender,korean,english,math\n1,Kim,M,80,70\n");
    let err = load_students(file.path()).expect_err("row is short one field");
    match err {
        LoadError::MissingField { line, field } => {
            assert_eq!(line, 2);
            assert_eq!(field, "math");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_numeric_score_reports_value() {
    let file = temp_csv("id,name,gender,korean,english,math\n1,Kim,M,80,seventy,60\n");
    let err = load_students(file.path()).expect_err("english is not a number");
    match err {
        LoadError::BadNumber { line, field, value } => {
            assert_eq!(line, 2);
            assert_eq!(field, "english");
            assert_eq!(value, "seventy");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_students(&fixture_path("no_such_file.csv")).expect_err("file does not exist");
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn blank_rows_are_skipped() {
    let file = temp_csv("id,name,gender,korean,english,math\n1,Kim,M,80,70,60\n\n2,Lee,F,90,85,95\n");
    let students = load_students(file.path()).expect("blank row must not abort the load");
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].id, 2);
}
