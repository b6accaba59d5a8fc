use hydrant_core::row::{column_value, has_column, Row};
use hydrant_core::traits::{FromRow, FromValue, Hydrator, IntoValue, RowHydrator};
use hydrant_core::{HydrantError, Value};

#[test]
fn test_from_value_integer() {
    let res = i64::from_value(Value::Integer(42)).unwrap();
    assert_eq!(res, 42);
}

#[test]
fn test_from_value_narrowing_integer() {
    let res = i16::from_value(Value::Integer(7)).unwrap();
    assert_eq!(res, 7);
}

#[test]
fn test_from_value_string() {
    let res = String::from_value(Value::String("hello".to_string())).unwrap();
    assert_eq!(res, "hello");
}

#[test]
fn test_from_value_bool() {
    let res = bool::from_value(Value::Boolean(true)).unwrap();
    assert!(res);
}

#[test]
fn test_from_value_float() {
    let res = f64::from_value(Value::Float(1.5)).unwrap();
    assert_eq!(res, 1.5);
}

#[test]
fn test_from_value_list() {
    let val = Value::list([1_i64, 2]);
    let res = Vec::<i64>::from_value(val).unwrap();
    assert_eq!(res, vec![1, 2]);
}

#[test]
fn test_from_value_option() {
    let res = Option::<i64>::from_value(Value::Null).unwrap();
    assert_eq!(res, None);

    let res = Option::<i64>::from_value(Value::Integer(42)).unwrap();
    assert_eq!(res, Some(42));
}

#[test]
fn test_from_value_bytes() {
    let res = bytes::Bytes::from_value(Value::Bytes(bytes::Bytes::from_static(b"blob"))).unwrap();
    assert_eq!(&res[..], b"blob");
}

#[test]
fn test_from_value_date() {
    let date = chrono::NaiveDate::from_ymd_opt(2020, 4, 1).unwrap();
    let res = chrono::NaiveDate::from_value(Value::Date(date)).unwrap();
    assert_eq!(res, date);
}

#[test]
fn test_type_mismatch_error() {
    let err = i64::from_value(Value::String("oops".to_string())).unwrap_err();
    match &err {
        HydrantError::TypeMismatch { expected, got, .. } => {
            assert_eq!(expected, "Integer");
            assert_eq!(got, "String");
        }
        other => panic!("expected TypeMismatch, got: {other}"),
    }
}

#[test]
fn test_missing_column_error() {
    let err = HydrantError::missing_column(2, "PersonRow");
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("PersonRow"));
}

#[test]
fn test_with_context_chains_messages() {
    let err = HydrantError::type_mismatch("Integer", "String", "i64")
        .with_context("Person::age (column 2)");
    let msg = err.to_string();
    assert!(msg.contains("Person::age (column 2)"));
    assert!(msg.contains("type mismatch"));
}

#[test]
fn test_into_value_conversions() {
    assert_eq!(30_i64.into_value(), Value::Integer(30));
    assert_eq!("Alice".into_value(), Value::String("Alice".to_string()));
    assert_eq!(true.into_value(), Value::Boolean(true));
    assert_eq!(None::<i64>.into_value(), Value::Null);
    assert_eq!(Some(1.5_f64).into_value(), Value::Float(1.5));
    assert_eq!(vec![1_u8, 2].into_value(), Value::Bytes(bytes::Bytes::from_static(&[1, 2])));
}

#[test]
fn test_row_positional_access() {
    let row = Row::new(vec![Value::Integer(1), Value::String("a".to_string())]);
    assert_eq!(row.len(), 2);
    assert_eq!(column_value(&row, 1), Some(Value::String("a".to_string())));
    assert_eq!(column_value(&row, 2), None);
    assert!(has_column(&row, 0));
    assert!(!has_column(&row, 5));
}

struct Pair {
    left: i64,
    right: i64,
}

impl FromRow for Pair {
    fn from_row(row: &Row) -> Result<Self, HydrantError> {
        let left = column_value(row, 0)
            .ok_or_else(|| HydrantError::missing_column(0, "Pair"))?;
        let right = column_value(row, 1)
            .ok_or_else(|| HydrantError::missing_column(1, "Pair"))?;
        Ok(Pair {
            left: i64::from_value(left)?,
            right: i64::from_value(right)?,
        })
    }
}

#[test]
fn test_row_hydrator_delegates_to_from_row() {
    let row = Row::new(vec![Value::Integer(3), Value::Integer(4)]);
    let pair = RowHydrator::<Pair>::new().hydrate(&row).unwrap();
    assert_eq!(pair.left, 3);
    assert_eq!(pair.right, 4);
}
