
//! The scalar column value model and conversions into Rust types.
//!
//! This module contains the [`Value`] enum, all [`FromValue`] implementations,
//! and the `From` conversions used to build values for condition binding.

use crate::error::HydrantError;
use crate::traits::FromValue;

/// A single scalar column value inside a result row.
///
/// Result rows are ordered sequences of these; the streaming iterator treats
/// them as opaque and only typed hydration looks inside.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Bytes(bytes::Bytes),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    DateTime(chrono::NaiveDateTime),
    List(Vec<Value>),
}

/// Returns a human-readable name for a [`Value`] variant.
///
/// Used in error messages to describe the actual type received when a
/// conversion fails.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "Null",
        Value::Boolean(_) => "Boolean",
        Value::Integer(_) => "Integer",
        Value::Float(_) => "Float",
        Value::String(_) => "String",
        Value::Bytes(_) => "Bytes",
        Value::Date(_) => "Date",
        Value::Time(_) => "Time",
        Value::DateTime(_) => "DateTime",
        Value::List(_) => "List",
    }
}

// ---------------------------------------------------------------------------
// Numeric macro
// ---------------------------------------------------------------------------

macro_rules! impl_from_val_num {
    ($t:ty, $pat:ident) => {
        impl FromValue for $t {
            fn from_value(value: Value) -> Result<Self, HydrantError> {
                match value {
                    Value::$pat(v) => Ok(v as $t),
                    other => Err(HydrantError::type_mismatch(
                        stringify!($pat),
                        type_name(&other),
                        stringify!($t),
                    )),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(HydrantError::type_mismatch("String", type_name(&other), "String")),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(HydrantError::type_mismatch("Boolean", type_name(&other), "bool")),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric types (Integer → signed/unsigned, Float → f64/f32)
// ---------------------------------------------------------------------------

impl_from_val_num!(i64, Integer);
impl_from_val_num!(i32, Integer);
impl_from_val_num!(u64, Integer);
impl_from_val_num!(u32, Integer);
impl_from_val_num!(i16, Integer);
impl_from_val_num!(u16, Integer);
impl_from_val_num!(i8, Integer);
impl_from_val_num!(u8, Integer);
impl_from_val_num!(f64, Float);
impl_from_val_num!(f32, Float);

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::List(xs) => xs.into_iter().map(T::from_value).collect(),
            other => Err(HydrantError::type_mismatch("List", type_name(&other), "Vec<T>")),
        }
    }
}

/// `Option<T>` is the "present vs absent" primitive.
/// - A missing column position is handled in the `FromRow` derive (returns `None`).
/// - Present but `Null` maps to `None`.
/// - Otherwise maps to `Some(T)`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::from_value(other)?)),
        }
    }
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

impl FromValue for bytes::Bytes {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::Bytes(b) => Ok(b),
            other => Err(HydrantError::type_mismatch("Bytes", type_name(&other), "Bytes")),
        }
    }
}

// ---------------------------------------------------------------------------
// Temporal types (chrono)
// ---------------------------------------------------------------------------

impl FromValue for chrono::NaiveDate {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::Date(d) => Ok(d),
            other => Err(HydrantError::type_mismatch("Date", type_name(&other), "NaiveDate")),
        }
    }
}

impl FromValue for chrono::NaiveTime {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::Time(t) => Ok(t),
            other => Err(HydrantError::type_mismatch("Time", type_name(&other), "NaiveTime")),
        }
    }
}

impl FromValue for chrono::NaiveDateTime {
    fn from_value(value: Value) -> Result<Self, HydrantError> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            other => Err(HydrantError::type_mismatch("DateTime", type_name(&other), "NaiveDateTime")),
        }
    }
}

// ---------------------------------------------------------------------------
// Building values (condition binding, test fixtures)
// ---------------------------------------------------------------------------

macro_rules! impl_into_val {
    ($t:ty, $pat:ident) => {
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::$pat(v.into())
            }
        }
    };
}

impl_into_val!(bool, Boolean);
impl_into_val!(i64, Integer);
impl_into_val!(i32, Integer);
impl_into_val!(i16, Integer);
impl_into_val!(i8, Integer);
impl_into_val!(u32, Integer);
impl_into_val!(u16, Integer);
impl_into_val!(u8, Integer);
impl_into_val!(f64, Float);
impl_into_val!(String, String);
impl_into_val!(bytes::Bytes, Bytes);
impl_into_val!(chrono::NaiveDate, Date);
impl_into_val!(chrono::NaiveTime, Time);
impl_into_val!(chrono::NaiveDateTime, DateTime);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(bytes::Bytes::from(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Value {
    /// Build a [`Value::List`] from anything iterable.
    ///
    /// `Vec<u8>` converts to [`Value::Bytes`] via `From`, so list building
    /// goes through this constructor instead of a blanket conversion.
    ///
    /// ```rust
    /// # use hydrant_core::Value;
    /// let v = Value::list([1_i64, 2, 3]);
    /// assert_eq!(v, Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    /// ```
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
