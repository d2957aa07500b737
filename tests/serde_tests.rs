#![cfg(feature = "serde")]

//! Integration tests for serde support in sorted-ints.

use rstest::rstest;
use sorted_ints::collection::OrderedIntCollection;

#[rstest]
fn test_collection_json_roundtrip() {
    let collection: OrderedIntCollection = vec![5, -1, 5, 3].into_iter().collect();
    let json = serde_json::to_string(&collection).unwrap();
    let restored: OrderedIntCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(collection, restored);
}

#[rstest]
fn test_collection_serializes_logical_elements_only() {
    let mut collection = OrderedIntCollection::with_capacity(16);
    collection.extend([3, 1, 2]);
    collection.delete_max();
    assert_eq!(serde_json::to_string(&collection).unwrap(), "[1,2]");
}

#[rstest]
fn test_empty_collection_json() {
    let collection = OrderedIntCollection::new();
    assert_eq!(serde_json::to_string(&collection).unwrap(), "[]");
    let restored: OrderedIntCollection = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_sorts_unsorted_input() {
    let restored: OrderedIntCollection = serde_json::from_str("[9, 2, 7, 2]").unwrap();
    assert_eq!(restored.to_string(), "[2, 2, 7, 9]");
}

#[rstest]
#[case::not_a_sequence("{\"a\": 1}")]
#[case::non_integer("[1, \"two\"]")]
#[case::out_of_range("[4294967296]")]
fn test_deserialize_rejects_invalid_input(#[case] json: &str) {
    let result: Result<OrderedIntCollection, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
