
//! Procedural macros for hydrant.
//!
//! This crate is not meant to be used directly — use the [`hydrant`] facade
//! crate which re-exports all macros.

extern crate proc_macro;

use proc_macro::TokenStream;

mod criteria;
mod from_row;

/// Derive [`FromRow`](hydrant_core::traits::FromRow) for a struct.
///
/// Maps a result [`Row`](hydrant_core::row::Row) to a Rust struct. Fields
/// consume column positions in declaration order, so the struct mirrors the
/// select list of the query that produced the row.
///
/// # Attributes
///
/// **Field-level:**
/// - `#[hydrant(col = N)]` — pin the field to column `N`. The running
///   position continues from `N + 1` for the fields that follow.
///
/// # Field type behaviour
///
/// - **`Option<T>`** — a missing column or `Null` value becomes `None`.
/// - **`T: FromValue`** — any type with a value conversion (primitives,
///   byte buffers, the chrono temporal types).
///
/// Conversion failures are wrapped with the struct name, field name, and
/// column position, e.g. `Person::age (column 2): type mismatch: ...`.
///
/// # Example
///
/// ```rust,ignore
/// use hydrant::prelude::*;
///
/// #[derive(FromRow)]
/// struct Person {
///     id: i64,
///     name: String,
///     score: Option<f64>,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(hydrant))]
pub fn from_row(input: TokenStream) -> TokenStream {
    from_row::expand(input)
}

/// Builds a [`Criteria`](hydrant::criteria::Criteria) from a condition block.
///
/// Each comma-separated condition is `column <op> value`, where the value is
/// any Rust expression that converts into a
/// [`Value`](hydrant_core::value::Value). Operators: `=`/`==`, `!=`/`<>`,
/// `>`, `>=`, `<`, `<=`, `like`, `in`.
///
/// # Example
///
/// ```rust,ignore
/// use hydrant::prelude::*;
///
/// let min_age: i64 = 21;
/// let c = criteria! {
///     name = "Alice",
///     age >= min_age,
///     bio like "%rust%"
/// };
/// // Expands to:
/// //   Criteria::new()
/// //       .add("name", Comparison::Equal, "Alice")
/// //       .add("age", Comparison::GreaterEqual, min_age)
/// //       .add("bio", Comparison::Like, "%rust%")
/// ```
#[proc_macro]
pub fn criteria(input: TokenStream) -> TokenStream {
    criteria::expand(input)
}
