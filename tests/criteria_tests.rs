use hydrant::prelude::*;
use hydrant_core::Value;

fn sample() -> Criteria {
    Criteria::new()
        .add("a", Comparison::Equal, 1_i64)
        .add("b", Comparison::Equal, 2_i64)
        .add("c", Comparison::Equal, 3_i64)
}

#[test]
fn test_traversal_follows_insertion_order() {
    let c = sample();
    let mut it = c.iter();

    let mut seen = Vec::new();
    while it.is_valid() {
        seen.push((it.key().to_string(), it.current().value().clone()));
        it.advance();
    }
    assert_eq!(
        seen,
        vec![
            ("a".to_string(), Value::Integer(1)),
            ("b".to_string(), Value::Integer(2)),
            ("c".to_string(), Value::Integer(3)),
        ]
    );
}

#[test]
fn test_snapshot_length_is_fixed_per_traversal() {
    let c = sample();

    let mut walked = 0;
    let mut it = c.iter();
    while it.is_valid() {
        walked += 1;
        it.advance();
    }
    assert_eq!(walked, 3);

    // A column added after that traversal only appears in later snapshots.
    let c = c.add("d", Comparison::Equal, 4_i64);
    assert_eq!(c.iter().len(), 4);
}

#[test]
fn test_current_reads_the_builder_not_a_copy() {
    let c = sample();
    // Rebinding `b` keeps its position but swaps the criterion the snapshot
    // traversal observes.
    let c = c.add("b", Comparison::LessThan, 99_i64);

    let mut it = c.iter();
    assert_eq!(it.len(), 3);
    it.advance();
    assert_eq!(it.key(), "b");
    assert_eq!(it.current().comparison(), Comparison::LessThan);
    assert_eq!(it.current().value(), &Value::Integer(99));
}

#[test]
fn test_rewind_repositions_at_first_condition() {
    let c = sample();
    let mut it = c.iter();
    it.advance();
    it.advance();
    assert_eq!(it.key(), "c");

    it.rewind();
    assert!(it.is_valid());
    assert_eq!(it.key(), "a");
}

#[test]
fn test_advance_past_the_end_invalidates() {
    let c = Criteria::new().add("only", Comparison::Equal, 1_i64);
    let mut it = c.iter();
    assert!(it.is_valid());
    it.advance();
    assert!(!it.is_valid());
}

#[test]
fn test_empty_criteria() {
    let c = Criteria::new();
    assert!(c.is_empty());
    let it = c.iter();
    assert!(!it.is_valid());
    assert!(it.is_empty());
}

#[test]
fn test_add_replaces_without_moving() {
    let c = sample().add("b", Comparison::GreaterThan, 20_i64);
    assert_eq!(c.len(), 3);
    assert_eq!(c.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);

    let b = c.criterion("b").unwrap();
    assert_eq!(b.column(), "b");
    assert_eq!(b.comparison(), Comparison::GreaterThan);
    assert_eq!(b.value(), &Value::Integer(20));
}

#[test]
fn test_comparison_spelling() {
    assert_eq!(Comparison::Equal.as_str(), "=");
    assert_eq!(Comparison::NotEqual.as_str(), "<>");
    assert_eq!(Comparison::GreaterEqual.to_string(), ">=");
    assert_eq!(Comparison::Like.as_str(), "LIKE");
    assert_eq!(Comparison::IsNull.as_str(), "IS NULL");
}

#[test]
fn test_criteria_macro_binds_values() {
    let min_age: i64 = 21;
    let c = criteria! {
        name = "Alice",
        age >= min_age,
        bio like "%rust%"
    };

    assert_eq!(c.keys().collect::<Vec<_>>(), vec!["name", "age", "bio"]);
    assert_eq!(c.criterion("name").unwrap().comparison(), Comparison::Equal);
    assert_eq!(c.criterion("name").unwrap().value(), &Value::String("Alice".to_string()));
    assert_eq!(c.criterion("age").unwrap().comparison(), Comparison::GreaterEqual);
    assert_eq!(c.criterion("age").unwrap().value(), &Value::Integer(21));
    assert_eq!(c.criterion("bio").unwrap().comparison(), Comparison::Like);
}

#[test]
fn test_criteria_macro_operator_forms() {
    let c = criteria! {
        a == 1_i64,
        b != 2_i64,
        c <> 3_i64,
        d > 4_i64,
        e <= 5_i64,
        f < 6_i64,
        g in Value::list([7_i64, 8])
    };

    assert_eq!(c.criterion("a").unwrap().comparison(), Comparison::Equal);
    assert_eq!(c.criterion("b").unwrap().comparison(), Comparison::NotEqual);
    assert_eq!(c.criterion("c").unwrap().comparison(), Comparison::NotEqual);
    assert_eq!(c.criterion("d").unwrap().comparison(), Comparison::GreaterThan);
    assert_eq!(c.criterion("e").unwrap().comparison(), Comparison::LessEqual);
    assert_eq!(c.criterion("f").unwrap().comparison(), Comparison::LessThan);
    assert_eq!(c.criterion("g").unwrap().comparison(), Comparison::In);
    assert_eq!(
        c.criterion("g").unwrap().value(),
        &Value::List(vec![Value::Integer(7), Value::Integer(8)])
    );
}

#[test]
#[should_panic(expected = "outside the snapshot bounds")]
fn test_current_past_the_end_panics() {
    let c = Criteria::new().add("only", Comparison::Equal, 1_i64);
    let mut it = c.iter();
    it.advance();
    let _ = it.current();
}
