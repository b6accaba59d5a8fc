
//! Error types for hydrant operations.

use thiserror::Error;

/// Unified error type for all hydrant operations.
///
/// The `FromRow` derive automatically wraps conversion errors with
/// [`Context`](HydrantError::Context) via [`with_context`](HydrantError::with_context),
/// producing chained messages like:
///
/// ```text
/// Person::age (column 2): type mismatch: expected Integer, got String (i64)
/// ```
#[derive(Error, Debug)]
pub enum HydrantError {
    /// A collaborator the on-demand traversal needs was never supplied.
    ///
    /// Raised when the traversal begins, not at construction, so collaborators
    /// may be attached after the iterator is created.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The single-traversal protocol was violated.
    ///
    /// Raised by a second call to `start()` — the on-demand traversal cannot
    /// be rewound or iterated twice.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A general mapping error with a freeform message.
    #[error("mapping error: {0}")]
    Mapping(String),

    /// A required column position was not present in a row.
    #[error("missing column {index} for {struct_name}")]
    MissingColumn { index: usize, struct_name: String },

    /// A [`Value`](crate::value::Value) variant did not match the expected Rust type.
    #[error("type mismatch: expected {expected}, got {got} ({context})")]
    TypeMismatch {
        expected: String,
        got: String,
        context: String,
    },

    /// Wraps an inner error with additional context (struct name, field, column).
    ///
    /// Created automatically by the `FromRow` derive. Can also be created
    /// manually via [`with_context`](HydrantError::with_context).
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<HydrantError>,
    },

    /// A failure reported by the underlying row source.
    ///
    /// Source failures pass through `advance()` unmodified; recovery policy
    /// belongs to the data-source layer, not the iterator.
    #[error("row source error: {source}")]
    Source {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl HydrantError {
    /// Create a [`Configuration`](HydrantError::Configuration) error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        HydrantError::Configuration(msg.into())
    }

    /// Create a [`Protocol`](HydrantError::Protocol) error.
    pub fn protocol(msg: impl Into<String>) -> Self {
        HydrantError::Protocol(msg.into())
    }

    /// Create a [`TypeMismatch`](HydrantError::TypeMismatch) error.
    pub fn type_mismatch(expected: &str, got: &str, context: &str) -> Self {
        HydrantError::TypeMismatch {
            expected: expected.to_owned(),
            got: got.to_owned(),
            context: context.to_owned(),
        }
    }

    /// Create a [`MissingColumn`](HydrantError::MissingColumn) error.
    pub fn missing_column(index: usize, struct_name: &str) -> Self {
        HydrantError::MissingColumn {
            index,
            struct_name: struct_name.to_owned(),
        }
    }

    /// Wrap a data-source failure in a [`Source`](HydrantError::Source) error.
    pub fn from_source(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        HydrantError::Source {
            source: source.into(),
        }
    }

    /// Wrap this error with additional context, producing a [`Context`](HydrantError::Context) variant.
    ///
    /// The `FromRow` derive calls this automatically to annotate errors with
    /// the struct name, field name, and column position so you can trace
    /// exactly where a hydration failed.
    ///
    /// ```rust
    /// # use hydrant_core::HydrantError;
    /// let err = HydrantError::type_mismatch("Integer", "String", "i64");
    /// let wrapped = err.with_context("Person::age (column 2)");
    /// assert!(wrapped.to_string().contains("Person::age"));
    /// ```
    pub fn with_context(self, ctx: impl Into<String>) -> Self {
        HydrantError::Context {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}
