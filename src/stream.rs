
//! The on-demand streaming iterator over query results.

use hydrant_core::error::HydrantError;
use hydrant_core::pool::{self, AtomicPooling, PoolingControl};
use hydrant_core::row::Row;
use hydrant_core::traits::{Hydrator, RowSource};
use tracing::{debug, trace};

/// Where a traversal currently stands.
///
/// Transitions only move forward: `NotStarted → Active → Exhausted`, with
/// `Active → Active` on each advance. Nothing ever returns to an earlier
/// state, which is what makes the traversal single-use.
enum TraversalState {
    NotStarted,
    Active { row: Row, key: u64 },
    Exhausted,
}

/// A forward-only, single-pass iterator producing one hydrated domain object
/// per result row.
///
/// `OnDemandRows` mediates between an open cursor ([`RowSource`]) and a
/// [`Hydrator`], pulling one row at a time so the full result set is never
/// materialized. Use it for bulk exports, batch jobs, and report generation
/// over results too large to buffer.
///
/// # Traversal protocol
///
/// Call [`start()`](Self::start) once, then loop while
/// [`is_valid()`](Self::is_valid), reading [`current()`](Self::current) and
/// [`key()`](Self::key) and moving on with [`advance()`](Self::advance):
///
/// ```rust
/// # use hydrant::prelude::*;
/// # use hydrant_core::{HydrantError, Row, Value};
/// # struct OneShot(Vec<Row>);
/// # impl RowSource for OneShot {
/// #     fn fetch_next_row(&mut self) -> Result<Option<Row>, HydrantError> {
/// #         Ok(if self.0.is_empty() { None } else { Some(self.0.remove(0)) })
/// #     }
/// #     fn close_cursor(&mut self) {}
/// # }
/// # struct FirstColumn;
/// # impl Hydrator for FirstColumn {
/// #     type Output = i64;
/// #     fn hydrate(&self, row: &Row) -> Result<i64, HydrantError> {
/// #         Ok(match row.get(0) { Some(Value::Integer(n)) => *n, _ => 0 })
/// #     }
/// # }
/// # fn main() -> Result<(), HydrantError> {
/// # let source = OneShot(vec![Row::new(vec![Value::Integer(1)])]);
/// let mut rows = OnDemandRows::new(FirstColumn, source);
/// rows.start()?;
/// while rows.is_valid() {
///     let object = rows.current()?;
///     # assert_eq!(object, 1);
///     rows.advance()?;
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Single traversal
///
/// The traversal cannot be rewound or repeated; a second `start()` fails
/// with a protocol error. Rows are delivered exactly in source order, with
/// no reordering, filtering, or buffering.
///
/// # Instance pooling
///
/// Constructing the iterator disables instance pooling (recording the prior
/// state) so that hydrating a large stream cannot fill the identity pool.
/// The prior state is restored exactly once, when the source reports
/// end-of-results. **Abandoning a traversal early leaves pooling disabled
/// for the rest of the process** unless something else re-enables it; if you
/// may break out of the loop, manage the switch at the call site.
pub struct OnDemandRows<S, H, P = &'static AtomicPooling> {
    source: Option<S>,
    hydrator: Option<H>,
    pooling: P,
    restore_pooling: bool,
    state: TraversalState,
}

impl<S, H> OnDemandRows<S, H> {
    /// Create an iterator over `source`, governed by the process-wide
    /// pooling switch.
    ///
    /// Pooling is disabled immediately, before any row is fetched.
    pub fn new(hydrator: H, source: S) -> Self {
        Self::with_pooling(hydrator, source, pool::process())
    }
}

impl<S, H, P: PoolingControl> OnDemandRows<S, H, P> {
    /// Like [`new`](Self::new), but with an explicit pooling switch.
    pub fn with_pooling(hydrator: H, source: S, pooling: P) -> Self {
        Self::assemble(Some(hydrator), Some(source), pooling)
    }

    /// Create an iterator with no collaborators attached yet.
    ///
    /// The hydrator and row source may be supplied later with
    /// [`set_hydrator`](Self::set_hydrator) and
    /// [`set_source`](Self::set_source); [`start()`](Self::start) fails with
    /// a configuration error if either is still missing. Pooling is disabled
    /// here regardless.
    pub fn unconfigured(pooling: P) -> Self {
        Self::assemble(None, None, pooling)
    }

    fn assemble(hydrator: Option<H>, source: Option<S>, pooling: P) -> Self {
        // Capture the prior pooling state exactly once, for the lifetime of
        // this iterator. It is consumed on the transition into Exhausted.
        let restore_pooling = pooling.disable();
        OnDemandRows {
            source,
            hydrator,
            pooling,
            restore_pooling,
            state: TraversalState::NotStarted,
        }
    }

    /// Attach the hydrator.
    pub fn set_hydrator(&mut self, hydrator: H) {
        self.hydrator = Some(hydrator);
    }

    /// Attach the row source.
    pub fn set_source(&mut self, source: S) {
        self.source = Some(source);
    }
}

impl<S: RowSource, H: Hydrator, P: PoolingControl> OnDemandRows<S, H, P> {
    /// Begin the traversal by advancing to the first row.
    ///
    /// Permitted exactly once per iterator. Fails with
    /// [`HydrantError::Configuration`] if the hydrator or row source was
    /// never supplied, and with [`HydrantError::Protocol`] on any call after
    /// the first — the traversal cannot be rewound.
    ///
    /// After a successful `start()` the first element (if any) is available
    /// through [`current()`](Self::current).
    pub fn start(&mut self) -> Result<(), HydrantError> {
        if self.hydrator.is_none() {
            return Err(HydrantError::configuration(
                "the on-demand traversal requires a hydrator; add one with set_hydrator()",
            ));
        }
        if self.source.is_none() {
            return Err(HydrantError::configuration(
                "the on-demand traversal requires a row source; add one with set_source()",
            ));
        }
        if !matches!(self.state, TraversalState::NotStarted) {
            return Err(HydrantError::protocol(
                "the on-demand traversal can only be iterated once",
            ));
        }

        trace!("starting on-demand traversal");
        self.advance()
    }

    /// Advance the cursor to the next row.
    ///
    /// When the source reports end-of-results, the traversal becomes
    /// exhausted: the cursor is closed and, if pooling had been enabled
    /// before this iterator was constructed, it is re-enabled. Both happen
    /// exactly once; further calls are no-ops.
    ///
    /// A fetch failure propagates unmodified and leaves the traversal state
    /// untouched — the stream is never silently truncated.
    pub fn advance(&mut self) -> Result<(), HydrantError> {
        if matches!(self.state, TraversalState::Exhausted) {
            return Ok(());
        }
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => {
                return Err(HydrantError::configuration(
                    "the on-demand traversal requires a row source; add one with set_source()",
                ))
            }
        };
        let key = match &self.state {
            TraversalState::Active { key, .. } => key + 1,
            _ => 0,
        };

        match source.fetch_next_row()? {
            Some(row) => {
                trace!(key, "row fetched");
                self.state = TraversalState::Active { row, key };
            }
            None => {
                self.state = TraversalState::Exhausted;
                source.close_cursor();
                let restored = std::mem::take(&mut self.restore_pooling);
                if restored {
                    self.pooling.enable();
                }
                debug!(rows = key, pooling_restored = restored, "result set exhausted; cursor closed");
            }
        }
        Ok(())
    }

    /// Hydrate and return the current row's domain object.
    ///
    /// Hydration happens here, on demand, every time this is called — the
    /// result is never cached, so two calls on the same row produce two
    /// independent objects and no reference to a consumed object is
    /// retained.
    ///
    /// # Panics
    ///
    /// Panics when the traversal is not positioned on a row (before
    /// `start()` or after exhaustion). Check [`is_valid()`](Self::is_valid)
    /// first; the iterator does not detect misuse as a recoverable error.
    pub fn current(&self) -> Result<H::Output, HydrantError> {
        let row = match &self.state {
            TraversalState::Active { row, .. } => row,
            _ => panic!("current() called outside an active traversal; check is_valid() first"),
        };
        let hydrator = match &self.hydrator {
            Some(hydrator) => hydrator,
            None => panic!("current() called without a hydrator; begin the traversal with start()"),
        };
        hydrator.hydrate(row)
    }

    /// The zero-based sequential index of the current row.
    ///
    /// Increments by exactly one per successful advance, independent of the
    /// row's content.
    ///
    /// # Panics
    ///
    /// Panics when the traversal is not positioned on a row; check
    /// [`is_valid()`](Self::is_valid) first.
    pub fn key(&self) -> u64 {
        match &self.state {
            TraversalState::Active { key, .. } => *key,
            _ => panic!("key() called outside an active traversal; check is_valid() first"),
        }
    }

    /// Whether the traversal is positioned on a row.
    ///
    /// `false` both before [`start()`](Self::start) and after exhaustion.
    pub fn is_valid(&self) -> bool {
        matches!(self.state, TraversalState::Active { .. })
    }

    /// The source's reported row count, if it exposes one.
    ///
    /// Most drivers report an inaccurate number for selects. The value is
    /// advisory only — never use it as a loop bound; iterate with
    /// [`is_valid()`](Self::is_valid) instead.
    pub fn count(&self) -> Option<u64> {
        self.source.as_ref().and_then(|source| source.row_count())
    }
}
