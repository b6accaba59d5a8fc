#![doc = r#"
On-demand streaming and hydration of database query results.

`hydrant` turns an open, forward-only cursor into a single-pass stream of
fully-formed domain objects: one row is pulled per step, hydrated only when
the current element is requested, and the full result set is never held in
memory. It is built for bulk exports, batch jobs, and report generation over
results too large to buffer, and it is driver-agnostic — any statement or
cursor handle can back a stream by implementing one trait.

# Quick start

## Back a stream with your driver

Implement [`RowSource`] for the driver's executed-statement handle:

```rust,ignore
use hydrant::prelude::*;
use hydrant_core::{HydrantError, Row};

struct PgCursor {
    stmt: my_driver::Statement,
}

impl RowSource for PgCursor {
    fn fetch_next_row(&mut self) -> Result<Option<Row>, HydrantError> {
        self.stmt.fetch().map_err(HydrantError::from_source)
    }

    fn close_cursor(&mut self) {
        self.stmt.close();
    }

    fn row_count(&self) -> Option<u64> {
        Some(self.stmt.row_count())
    }
}
```

## Map rows to domain objects

`#[derive(FromRow)]` maps columns to struct fields by position, mirroring
the query's select list:

```rust,ignore
use hydrant::prelude::*;

#[derive(Debug, FromRow)]
struct Person {
    id: i64,
    name: String,
    score: Option<f64>,
}
```

`Option<T>` fields tolerate a missing column or a `Null` value;
`#[hydrant(col = N)]` pins a field to a specific column position.

## Stream the result set

```rust,ignore
use hydrant::prelude::*;

let mut rows = OnDemandRows::new(RowHydrator::<Person>::new(), cursor);
rows.start()?;
while rows.is_valid() {
    let person = rows.current()?;
    export(rows.key(), person);
    rows.advance()?;
}
```

The traversal is strictly single-pass: no rewinding, no second `start()`,
rows delivered exactly in source order. `current()` hydrates on demand every
time it is called — nothing is cached, so memory stays bounded no matter how
large the result set is.

# Instance pooling

Hydrators may deduplicate entities by key in a process-wide identity pool.
Streaming a large result through that pool would pin every hydrated object
in memory, so constructing an [`OnDemandRows`] disables pooling (capturing
the prior state) and restores it exactly once, when the source reports
end-of-results.

**Breaking out of a traversal early leaves pooling disabled for the rest of
the process.** That is a deliberate property of the exhaustion-driven
restore, not an oversight; if your code may abandon a stream, manage the
switch at the call site. The switch is an injected service object
([`PoolingControl`]) — [`OnDemandRows::with_pooling`] accepts any
implementation, and [`OnDemandRows::new`] uses the process-wide
[`AtomicPooling`] instance.

# Query conditions

[`Criteria`](criteria::Criteria) collects ordered column conditions; the
[`criteria!`] macro builds one from a literal condition block:

```rust
use hydrant::prelude::*;

let min_age: i64 = 21;
let c = criteria! {
    name = "Alice",
    age >= min_age,
    bio like "%rust%"
};
assert_eq!(c.len(), 3);
```

[`Criteria::iter`](criteria::Criteria::iter) walks the conditions over a key
ordering snapshotted at iterator construction, so the traversal length is
fixed even though each `current()` reads the criterion live from the
builder.

# Supported value types

[`FromValue`] conversions are provided for:

| Column type | Rust type |
|-------------|-----------|
| Integer | `i64`, `i32`, `u64`, `u32`, `i16`, `u16`, `i8`, `u8` |
| Float | `f64`, `f32` |
| String | `String` |
| Boolean | `bool` |
| Bytes | [`bytes::Bytes`] |
| Null | `Option<T>` |
| List | `Vec<T>` |
| Date | `chrono::NaiveDate` |
| Time | `chrono::NaiveTime` |
| DateTime | `chrono::NaiveDateTime` |

# Error handling

All fallible operations return [`HydrantError`]. Misconfiguration
(`start()` without a hydrator or row source) and protocol violations
(a second `start()`) are fatal and surfaced immediately; data-source
failures propagate through `advance()` unmodified, and the stream is never
silently truncated. The `FromRow` derive wraps conversion errors with
`.with_context()` so messages include the struct, field, and column:

```text
Person::score (column 2): type mismatch: expected Float, got String (f64)
```

[`bytes::Bytes`]: https://docs.rs/bytes
"#]

pub mod criteria;
pub mod prelude;
pub mod stream;

pub use hydrant_core as core;
pub use hydrant_macros::{criteria, FromRow};

pub use hydrant_core::pool::{AtomicPooling, PoolingControl};
pub use hydrant_core::traits::{
    FromRow as FromRowTrait, FromValue, Hydrator, IntoValue, RowHydrator, RowSource,
};
pub use hydrant_core::{HydrantError, Row, Value};
pub use stream::OnDemandRows;
