
//! Core traits, error types, and value conversions for hydrant.
//!
//! This crate is not meant to be used directly — use the [`hydrant`] facade
//! crate instead, which re-exports everything you need.

pub mod traits;
pub mod error;

pub mod value;
pub mod row;
pub mod pool;

pub use error::HydrantError;
pub use row::Row;
pub use value::Value;
pub use pool::{AtomicPooling, PoolingControl};
pub use traits::{FromRow, FromValue, Hydrator, IntoValue, RowHydrator, RowSource};
