
//! Core traits for the row-source, hydration, and value-conversion seams.

use std::marker::PhantomData;

use crate::error::HydrantError;
use crate::row::Row;
use crate::value::Value;

/// An open, forward-only cursor bound to an already-executed query.
///
/// The streaming iterator does not create the cursor and never owns the
/// connection behind it; it only pulls rows forward and invokes
/// [`close_cursor`](RowSource::close_cursor) once the source reports
/// end-of-results.
///
/// Implement this for your driver's statement or cursor handle. A fetch
/// failure must surface as an error, never as a silent end-of-results:
/// the iterator propagates it unmodified and will not truncate the stream.
pub trait RowSource {
    /// Pull the next row, or `Ok(None)` at end-of-results.
    ///
    /// This is the only blocking operation in a traversal; it blocks on the
    /// underlying data-source round trip.
    fn fetch_next_row(&mut self) -> Result<Option<Row>, HydrantError>;

    /// Release the cursor.
    ///
    /// Invoked exactly once, when the source reports end-of-results. Must be
    /// safe to call at that point; the connection itself stays untouched.
    fn close_cursor(&mut self);

    /// The driver-reported total row count, if the driver exposes one.
    ///
    /// Most drivers report an inaccurate number for selects. Treat the value
    /// as advisory only and never use it for loop bounds.
    fn row_count(&self) -> Option<u64> {
        None
    }
}

/// Converts one raw result row into a fully-formed domain object.
///
/// Stateless from the iterator's point of view: the iterator calls
/// [`hydrate`](Hydrator::hydrate) on demand, every time the current element
/// is requested, and never caches the output. An implementation may consult
/// a process-wide identity pool; the iterator keeps pooling disabled for the
/// duration of the stream so streamed objects are not retained there.
pub trait Hydrator {
    /// The domain object produced per row.
    type Output;

    /// Hydrate one row into an owned domain object.
    fn hydrate(&self, row: &Row) -> Result<Self::Output, HydrantError>;
}

/// Maps a [`Row`] into a Rust struct by column position.
///
/// Automatically implemented by `#[derive(FromRow)]`. Each struct field maps
/// to a column position in declaration order.
///
/// # Field attributes
///
/// - **`Option<T>`** fields tolerate a missing column (become `None`).
/// - **`#[hydrant(col = N)]`** pins a field to column `N`; the running
///   position continues from `N + 1`.
pub trait FromRow: Sized {
    /// Deserialize a [`Row`] into `Self`.
    fn from_row(row: &Row) -> Result<Self, HydrantError>;
}

/// A [`Hydrator`] that delegates to a type's [`FromRow`] implementation.
///
/// This is the bridge between the typed hydration contract and the
/// object-per-row seam the streaming iterator consumes:
///
/// ```rust,ignore
/// let rows = OnDemandRows::new(RowHydrator::<Person>::new(), source);
/// ```
pub struct RowHydrator<T> {
    _marker: PhantomData<T>,
}

impl<T> RowHydrator<T> {
    pub fn new() -> Self {
        RowHydrator { _marker: PhantomData }
    }
}

impl<T> Default for RowHydrator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromRow> Hydrator for RowHydrator<T> {
    type Output = T;

    fn hydrate(&self, row: &Row) -> Result<T, HydrantError> {
        T::from_row(row)
    }
}

/// Converts a single [`Value`] into a Rust type.
///
/// This is the core conversion primitive. Implementations exist for
/// primitives, `Option<T>`, `Vec<T>`, byte buffers, and chrono temporal
/// types. See the [crate-level docs](crate) for a full table.
pub trait FromValue: Sized {
    /// Convert a [`Value`] into `Self`.
    fn from_value(value: Value) -> Result<Self, HydrantError>;
}

/// Converts a Rust value into a [`Value`] for condition binding.
///
/// A blanket implementation covers all types that already implement
/// `Into<Value>` (e.g. `String`, `i64`, `f64`, `bool`, the chrono types).
pub trait IntoValue {
    /// Convert `self` into a [`Value`].
    fn into_value(self) -> Value;
}

impl<T: Into<Value>> IntoValue for T {
    fn into_value(self) -> Value {
        self.into()
    }
}
