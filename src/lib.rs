//! # sorted-ints
//!
//! An ordered multiset of integers backed by a manually sized, growable
//! buffer.
//!
//! ## Overview
//!
//! [`OrderedIntCollection`](collection::OrderedIntCollection) keeps its
//! elements sorted in non-decreasing order after every operation. It offers:
//!
//! - **Insertion**: shift-based sorted insertion with geometric growth
//! - **Queries**: 1-based positional access, min, max, median, mean, frequency
//! - **Deletion**: minimum, maximum, one occurrence, or every occurrence
//! - **Value semantics**: deep `Clone`, positionwise equality, `+` and `+=`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence of integers
//!
//! ## Example
//!
//! ```rust
//! use sorted_ints::prelude::*;
//!
//! let mut collection = OrderedIntCollection::new();
//! for value in [5, 1, 4, 1] {
//!     collection.insert(value);
//! }
//! assert_eq!(collection.find_min(), 1);
//! assert_eq!(collection.delete_min(), 2);
//! assert_eq!(collection.to_string(), "[4, 5]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_ints::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
