//! Sorted integer collections.
//!
//! - [`OrderedIntCollection`]: ordered multiset of `i32` over an explicitly
//!   sized, geometrically growing buffer
//! - [`CollectionError`]: unmet preconditions reported by the `try_*` methods
//! - [`concatenate`]: builds a fresh collection from two others
//!
//! # Examples
//!
//! ```rust
//! use sorted_ints::collection::OrderedIntCollection;
//!
//! let mut collection = OrderedIntCollection::from(vec![1, 3, 5]);
//! collection.combine_with_self();
//! assert_eq!(collection.to_string(), "[1, 1, 3, 3, 5, 5]");
//!
//! let merged = &collection + &OrderedIntCollection::from(vec![2, 2]);
//! assert_eq!(merged.len(), 8);
//! assert_eq!(merged.find_frequency(2), 2);
//! ```

mod error;
mod ordered_int_collection;

pub use error::CollectionError;
pub use ordered_int_collection::{DEFAULT_CAPACITY, OrderedIntCollection, concatenate};
