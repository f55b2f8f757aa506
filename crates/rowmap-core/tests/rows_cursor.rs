use rowmap_core::{Cursor, Row, Rows, Value};

fn people() -> Rows {
    Rows::new(["id", "name"])
        .record([Value::I64(1), Value::from("Jan")])
        .unwrap()
        .record([Value::I64(2), Value::Null])
        .unwrap()
}

#[test]
fn starts_on_first_record() {
    let rows = people();

    assert_eq!(rows.position(), 0);
    assert_eq!(rows.get("id").unwrap(), &Value::I64(1));
    assert_eq!(rows.get("name").unwrap(), &Value::from("Jan"));
}

#[test]
fn advance_walks_to_exhaustion() {
    let mut rows = people();

    assert!(rows.advance());
    assert_eq!(rows.get("id").unwrap(), &Value::I64(2));
    assert!(rows.is_null("name").unwrap());

    assert!(!rows.advance());
    assert!(!rows.advance());
    assert_eq!(rows.position(), 2);
}

#[test]
fn reading_past_the_end_fails() {
    let mut rows = people();
    while rows.advance() {}

    let err = rows.get("id").unwrap_err();
    assert!(err.is_cursor_out_of_bounds());
}

#[test]
fn move_to_first_rewinds() {
    let mut rows = people();
    while rows.advance() {}

    assert!(rows.move_to_first());
    assert_eq!(rows.get("id").unwrap(), &Value::I64(1));
}

#[test]
fn move_to_first_on_empty_cursor() {
    let mut rows = Rows::new(["id"]);

    assert!(rows.is_empty());
    assert!(!rows.move_to_first());
    assert!(rows.get("id").unwrap_err().is_cursor_out_of_bounds());
}

#[test]
fn unknown_column_is_missing_even_past_the_end() {
    let rows = Rows::new(["id"]);
    assert!(rows.get("nope").unwrap_err().is_missing_column());
}

#[test]
fn short_records_are_padded_with_null() {
    let rows = Rows::new(["a", "b"]).record([Value::I32(1)]).unwrap();

    assert!(rows.is_null("b").unwrap());
    assert_eq!(rows.columns().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn long_records_are_rejected() {
    let err = Rows::new(["a"])
        .record([Value::I32(1), Value::I32(2)])
        .unwrap_err();

    assert_eq!(err.to_string(), "record 0 has 2 cells but only 1 columns");
}
