//! Property-based tests for OrderedIntCollection laws.
//!
//! This module verifies the ordering and size invariants of
//! OrderedIntCollection using proptest.

use proptest::prelude::*;
use sorted_ints::collection::OrderedIntCollection;

/// Operations applied in sequence by the sortedness law.
#[derive(Debug, Clone)]
enum Operation {
    Insert(i32),
    DeleteOne(i32),
    DeleteAll(i32),
    DeleteMin,
    DeleteMax,
    CombineWithSelf,
    ShrinkToFit,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (-20..20i32).prop_map(Operation::Insert),
        2 => (-20..20i32).prop_map(Operation::DeleteOne),
        1 => (-20..20i32).prop_map(Operation::DeleteAll),
        1 => Just(Operation::DeleteMin),
        1 => Just(Operation::DeleteMax),
        1 => Just(Operation::CombineWithSelf),
        1 => Just(Operation::ShrinkToFit),
    ]
}

fn contents(collection: &OrderedIntCollection) -> Vec<i32> {
    (1..=collection.len())
        .map(|position| collection.value_at(position))
        .collect()
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Sortedness Law: every operation sequence leaves the elements non-decreasing
    #[test]
    fn prop_sortedness_after_any_operations(
        operations in prop::collection::vec(operation_strategy(), 0..60)
    ) {
        let mut collection = OrderedIntCollection::new();
        for operation in operations {
            match operation {
                Operation::Insert(value) => collection.insert(value),
                Operation::DeleteOne(value) => {
                    collection.delete_one(value);
                }
                Operation::DeleteAll(value) => {
                    collection.delete_all(value);
                }
                Operation::DeleteMin => {
                    if !collection.is_empty() {
                        collection.delete_min();
                    }
                }
                Operation::DeleteMax => {
                    if !collection.is_empty() {
                        collection.delete_max();
                    }
                }
                Operation::CombineWithSelf => {
                    if collection.len() < 64 {
                        collection.combine_with_self();
                    }
                }
                Operation::ShrinkToFit => collection.shrink_to_fit(),
            }

            let values = contents(&collection);
            prop_assert!(values.windows(2).all(|window| window[0] <= window[1]));
            prop_assert!(collection.capacity() >= collection.len().max(1));
        }
    }

    /// Model Law: the collection matches a sorted Vec built from the same input
    #[test]
    fn prop_matches_sorted_model(
        values in prop::collection::vec(any::<i32>(), 0..100)
    ) {
        let collection: OrderedIntCollection = values.iter().copied().collect();
        prop_assert_eq!(contents(&collection), sorted(values));
    }
}

// =============================================================================
// Size Laws
// =============================================================================

proptest! {
    /// Insert Length Law: insert increases the length by one
    #[test]
    fn prop_insert_length_law(
        values in prop::collection::vec(any::<i32>(), 0..50),
        new_value: i32
    ) {
        let mut collection: OrderedIntCollection = values.into_iter().collect();
        let original_length = collection.len();
        collection.insert(new_value);
        prop_assert_eq!(collection.len(), original_length + 1);
    }

    /// Delete One Length Law: a successful delete_one decreases the length by one
    #[test]
    fn prop_delete_one_length_law(
        values in prop::collection::vec(-10..10i32, 0..50),
        target in -10..10i32
    ) {
        let mut collection: OrderedIntCollection = values.into_iter().collect();
        let original_length = collection.len();
        let frequency = collection.find_frequency(target);

        let removed = collection.delete_one(target);

        prop_assert_eq!(removed, frequency > 0);
        prop_assert_eq!(collection.len(), original_length - usize::from(removed));
    }

    /// Delete Min/Max Length Law: the length drops by the returned frequency
    #[test]
    fn prop_delete_extremes_length_law(
        values in prop::collection::vec(-5..5i32, 1..50)
    ) {
        let collection: OrderedIntCollection = values.into_iter().collect();

        let mut without_min = collection.clone();
        let min_frequency = collection.find_frequency(collection.find_min());
        prop_assert_eq!(without_min.delete_min(), min_frequency);
        prop_assert_eq!(without_min.len(), collection.len() - min_frequency);

        let mut without_max = collection.clone();
        let max_frequency = collection.find_frequency(collection.find_max());
        prop_assert_eq!(without_max.delete_max(), max_frequency);
        prop_assert_eq!(without_max.len(), collection.len() - max_frequency);
    }

    /// Frequency Law: delete_all returns the prior frequency and leaves none behind
    #[test]
    fn prop_frequency_delete_all_consistency(
        values in prop::collection::vec(-10..10i32, 0..50),
        target in -10..10i32
    ) {
        let mut collection: OrderedIntCollection = values.into_iter().collect();
        let original_length = collection.len();
        let frequency = collection.find_frequency(target);

        prop_assert_eq!(collection.delete_all(target), frequency);
        prop_assert_eq!(collection.find_frequency(target), 0);
        prop_assert_eq!(collection.len(), original_length - frequency);
    }
}

// =============================================================================
// Round-trip and Combination Laws
// =============================================================================

proptest! {
    /// Insert-Delete Law: insert then delete_one restores the prior content
    #[test]
    fn prop_insert_delete_one_round_trip(
        values in prop::collection::vec(any::<i32>(), 0..50),
        new_value: i32
    ) {
        let original: OrderedIntCollection = values.into_iter().collect();
        let mut collection = original.clone();

        collection.insert(new_value);
        prop_assert!(collection.delete_one(new_value));
        prop_assert_eq!(collection, original);
    }

    /// Self-append Law: every frequency doubles
    #[test]
    fn prop_combine_with_self_doubles_frequencies(
        values in prop::collection::vec(-10..10i32, 0..40)
    ) {
        let original: OrderedIntCollection = values.iter().copied().collect();
        let mut doubled = original.clone();
        doubled.combine_with_self();

        prop_assert_eq!(doubled.len(), original.len() * 2);
        for value in values {
            prop_assert_eq!(doubled.find_frequency(value), original.find_frequency(value) * 2);
        }
    }

    /// Commutativity Law: concatenation ignores operand order
    #[test]
    fn prop_concatenation_commutes(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let left_collection = OrderedIntCollection::from(left.clone());
        let right_collection = OrderedIntCollection::from(right.clone());

        let forward = &left_collection + &right_collection;
        let backward = &right_collection + &left_collection;

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(contents(&forward), sorted([left, right].concat()));
    }

    /// Combine Law: combine_into agrees with concatenation
    #[test]
    fn prop_combine_into_matches_concatenation(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let mut combined = OrderedIntCollection::from(left);
        let addend = OrderedIntCollection::from(right);
        let concatenated = &combined + &addend;

        combined.combine_into(&addend);
        prop_assert_eq!(combined, concatenated);
    }
}

// =============================================================================
// Aggregate Laws
// =============================================================================

proptest! {
    /// Median Law: the median lies between the minimum and the maximum
    #[test]
    fn prop_median_bounded_by_extremes(
        values in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let collection: OrderedIntCollection = values.into_iter().collect();
        let median = collection.find_median();
        prop_assert!(f64::from(collection.find_min()) <= median);
        prop_assert!(median <= f64::from(collection.find_max()));
    }

    /// Average Law: the mean lies between the minimum and the maximum
    #[test]
    fn prop_average_bounded_by_extremes(
        values in prop::collection::vec(-1000..1000i32, 1..50)
    ) {
        let collection: OrderedIntCollection = values.into_iter().collect();
        let average = collection.find_average();
        prop_assert!(f64::from(collection.find_min()) <= average + 1e-9);
        prop_assert!(average <= f64::from(collection.find_max()) + 1e-9);
    }

    /// Position Law: value_at(1) is the minimum and value_at(len) the maximum
    #[test]
    fn prop_positional_extremes(
        values in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let collection: OrderedIntCollection = values.into_iter().collect();
        prop_assert_eq!(collection.value_at(1), collection.find_min());
        prop_assert_eq!(collection.value_at(collection.len()), collection.find_max());
    }
}
