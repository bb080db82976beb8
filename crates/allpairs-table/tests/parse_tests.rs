use allpairs_table::parse::{parse_table, TableError};

#[test]
fn test_parse_five_by_five_fixture() {
    let table = parse_table(include_str!("fixtures/five_by_five.txt")).unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(table.domain_sizes(), vec![5, 5, 5, 5, 5]);
    assert_eq!(table.labels_in_original_order(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_parse_uneven_fixture_sorts_by_domain_size() {
    let table = parse_table(include_str!("fixtures/uneven.txt")).unwrap();

    // Browser(4), OS(3), Network(3), Locale(2); OS precedes Network in the input.
    let sorted: Vec<&str> = table.parameters().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(sorted, vec!["Browser", "OS", "Network", "Locale"]);
    assert_eq!(table.original_order(), &[1, 0, 3, 2]);
    assert_eq!(
        table.labels_in_original_order(),
        vec!["OS", "Browser", "Locale", "Network"]
    );
    assert_eq!(table.parameter(3).unwrap().values, vec!["en", "de"]);
}

#[test]
fn test_duplicate_label_in_header() {
    let err = parse_table("A\tB\tB\n").unwrap_err();
    match err {
        TableError::DuplicateLabel { label } => assert_eq!(label, "B"),
        other => panic!("expected duplicate label error, got {other:?}"),
    }
}

#[test]
fn test_row_with_extra_column() {
    let err = parse_table("A\tB\na1\tb1\na2\tb2\textra\n").unwrap_err();
    match err {
        TableError::ColumnCountMismatch {
            row,
            found,
            expected,
            line,
        } => {
            assert_eq!(row, 3);
            assert_eq!(found, 3);
            assert_eq!(expected, 2);
            assert_eq!(line, "a2\tb2\textra");
        }
        other => panic!("expected column count mismatch, got {other:?}"),
    }
}

#[test]
fn test_row_with_missing_column() {
    let err = parse_table("A\tB\tC\na1\tb1\n").unwrap_err();
    assert!(matches!(
        err,
        TableError::ColumnCountMismatch { row: 2, found: 2, expected: 3, .. }
    ));
}

#[test]
fn test_spurious_blank_line_is_rejected() {
    let err = parse_table("A\tB\na1\tb1\n\na2\tb2\n").unwrap_err();
    assert!(matches!(
        err,
        TableError::ColumnCountMismatch { row: 3, found: 1, .. }
    ));
}

#[test]
fn test_error_messages_identify_cause() {
    let err = parse_table("A\tB\na1\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 2"), "message was: {msg}");
    assert!(msg.contains("instead of 2"), "message was: {msg}");

    let err = parse_table("A\tA\n").unwrap_err();
    assert!(err.to_string().contains("'A' is not unique"));
}
