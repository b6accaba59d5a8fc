
//! Query-condition building and snapshot traversal.

use hydrant_core::value::Value;

/// Comparison vocabulary for query conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl Comparison {
    /// The operator's conventional SQL spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "<>",
            Comparison::GreaterThan => ">",
            Comparison::GreaterEqual => ">=",
            Comparison::LessThan => "<",
            Comparison::LessEqual => "<=",
            Comparison::Like => "LIKE",
            Comparison::NotLike => "NOT LIKE",
            Comparison::In => "IN",
            Comparison::NotIn => "NOT IN",
            Comparison::IsNull => "IS NULL",
            Comparison::IsNotNull => "IS NOT NULL",
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One condition: a column, a comparison, and the bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    column: String,
    comparison: Comparison,
    value: Value,
}

impl Criterion {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An insertion-ordered set of query conditions.
///
/// Built either with chained [`add`](Criteria::add) calls or the
/// [`criteria!`](crate::criteria!) macro:
///
/// ```rust
/// use hydrant::criteria::{Comparison, Criteria};
///
/// let c = Criteria::new()
///     .add("name", Comparison::Equal, "Alice")
///     .add("age", Comparison::GreaterEqual, 21_i64);
/// assert_eq!(c.len(), 2);
/// ```
///
/// Adding a column that is already present replaces its criterion without
/// changing the column's position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    criteria: Vec<(String, Criterion)>,
}

impl Criteria {
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Add a condition, replacing any existing condition on the same column.
    pub fn add(
        mut self,
        column: impl Into<String>,
        comparison: Comparison,
        value: impl Into<Value>,
    ) -> Self {
        let column = column.into();
        let criterion = Criterion {
            column: column.clone(),
            comparison,
            value: value.into(),
        };
        match self.criteria.iter_mut().find(|(key, _)| *key == column) {
            Some((_, existing)) => *existing = criterion,
            None => self.criteria.push((column, criterion)),
        }
        self
    }

    /// The column names, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.criteria.iter().map(|(key, _)| key.as_str())
    }

    /// Look up the condition currently bound to `column`.
    pub fn criterion(&self, column: &str) -> Option<&Criterion> {
        self.criteria
            .iter()
            .find(|(key, _)| key == column)
            .map(|(_, criterion)| criterion)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Traverse the conditions over a snapshot of the current key ordering.
    pub fn iter(&self) -> CriterionIter<'_> {
        CriterionIter::new(self)
    }
}

/// Sequential traversal over a [`Criteria`]'s conditions.
///
/// The key ordering is snapshotted when the iterator is created, fixing the
/// traversal length; each [`current()`](CriterionIter::current) call looks
/// the criterion up from the builder, so the values seen are the builder's,
/// not copies. Unlike the on-demand row traversal this iterator is freely
/// rewindable.
pub struct CriterionIter<'a> {
    criteria: &'a Criteria,
    keys: Vec<String>,
    idx: usize,
}

impl<'a> CriterionIter<'a> {
    fn new(criteria: &'a Criteria) -> Self {
        CriterionIter {
            criteria,
            keys: criteria.keys().map(str::to_owned).collect(),
            idx: 0,
        }
    }

    /// Reposition at the first condition.
    pub fn rewind(&mut self) {
        self.idx = 0;
    }

    /// Whether the traversal is positioned on a condition.
    pub fn is_valid(&self) -> bool {
        self.idx < self.keys.len()
    }

    /// The column name at the current position.
    ///
    /// # Panics
    ///
    /// Panics outside the snapshot bounds; check
    /// [`is_valid()`](Self::is_valid) first.
    pub fn key(&self) -> &str {
        match self.keys.get(self.idx) {
            Some(key) => key,
            None => panic!("key() called outside the snapshot bounds; check is_valid() first"),
        }
    }

    /// The criterion at the current position, read from the builder.
    ///
    /// # Panics
    ///
    /// Panics outside the snapshot bounds; check
    /// [`is_valid()`](Self::is_valid) first.
    pub fn current(&self) -> &'a Criterion {
        let column = match self.keys.get(self.idx) {
            Some(key) => key,
            None => panic!("current() called outside the snapshot bounds; check is_valid() first"),
        };
        match self.criteria.criterion(column) {
            Some(criterion) => criterion,
            // Keys are snapshotted from this builder and columns are never
            // removed, so the lookup cannot miss.
            None => unreachable!("snapshot key missing from the builder"),
        }
    }

    /// Move to the next position.
    pub fn advance(&mut self) {
        self.idx += 1;
    }

    /// Number of conditions in the snapshot.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
