use hydrant_core::error::HydrantError;
use hydrant_core::row::Row;
use hydrant_core::traits::FromRow;
use hydrant_core::Value;
use hydrant_macros::FromRow;

#[derive(Debug, FromRow)]
struct Person {
    id: i64,
    name: String,
    score: Option<f64>,
}

#[derive(Debug, FromRow)]
struct Pinned {
    #[hydrant(col = 2)]
    code: i64,
    label: String,
}

#[test]
fn test_from_row_positional() {
    let row = Row::new(vec![
        Value::Integer(7),
        Value::String("Alice".to_string()),
        Value::Float(0.5),
    ]);
    let person = Person::from_row(&row).unwrap();
    assert_eq!(person.id, 7);
    assert_eq!(person.name, "Alice");
    assert_eq!(person.score, Some(0.5));
}

#[test]
fn test_option_field_null_value() {
    let row = Row::new(vec![
        Value::Integer(7),
        Value::String("Alice".to_string()),
        Value::Null,
    ]);
    let person = Person::from_row(&row).unwrap();
    assert_eq!(person.score, None);
}

#[test]
fn test_option_field_missing_column() {
    let row = Row::new(vec![Value::Integer(7), Value::String("Alice".to_string())]);
    let person = Person::from_row(&row).unwrap();
    assert_eq!(person.score, None);
}

#[test]
fn test_missing_required_column() {
    let row = Row::new(vec![Value::Integer(7)]);
    let err = Person::from_row(&row).unwrap_err();
    match &err {
        HydrantError::MissingColumn { index, struct_name } => {
            assert_eq!(*index, 1);
            assert_eq!(struct_name, "Person");
        }
        other => panic!("expected MissingColumn, got: {other}"),
    }
}

#[test]
fn test_mismatch_is_wrapped_with_field_context() {
    let row = Row::new(vec![Value::Integer(7), Value::Integer(13)]);
    let err = Person::from_row(&row).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Person::name (column 1)"), "got: {msg}");
    assert!(msg.contains("type mismatch"), "got: {msg}");
}

#[test]
fn test_col_override_continues_from_pin() {
    // `code` is pinned to column 2, so `label` follows at column 3.
    let row = Row::new(vec![
        Value::Null,
        Value::Null,
        Value::Integer(99),
        Value::String("ok".to_string()),
    ]);
    let pinned = Pinned::from_row(&row).unwrap();
    assert_eq!(pinned.code, 99);
    assert_eq!(pinned.label, "ok");
}
