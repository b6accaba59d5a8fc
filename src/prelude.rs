
//! Convenience re-exports for common hydrant usage.
//!
//! ```rust
//! use hydrant::prelude::*;
//! ```
//!
//! This imports the `FromRow` derive, the `criteria!` macro, the collaborator
//! traits ([`RowSource`], [`Hydrator`], [`PoolingControl`]), the conversion
//! traits ([`FromRowTrait`], [`FromValue`], [`IntoValue`]), the error type,
//! the condition-building types, and [`OnDemandRows`].

pub use crate::{criteria, FromRow};

pub use crate::criteria::{Comparison, Criteria, Criterion, CriterionIter};
pub use crate::stream::OnDemandRows;
pub use hydrant_core::pool::{AtomicPooling, PoolingControl};
pub use hydrant_core::traits::{
    FromRow as FromRowTrait, FromValue, Hydrator, IntoValue, RowHydrator, RowSource,
};
pub use hydrant_core::{HydrantError, Row, Value};
