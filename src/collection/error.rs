//! Error types for the collection module.
//!
//! The panicking query and deletion methods of
//! [`OrderedIntCollection`](super::OrderedIntCollection) report contract
//! violations with the `Display` text of [`CollectionError`]; the `try_*`
//! counterparts return it instead.

/// Represents a precondition that an operation on an
/// [`OrderedIntCollection`](super::OrderedIntCollection) did not meet.
///
/// # Examples
///
/// ```rust
/// use sorted_ints::collection::{CollectionError, OrderedIntCollection};
///
/// let collection = OrderedIntCollection::new();
/// assert_eq!(
///     collection.try_find_min(),
///     Err(CollectionError::Empty { operation: "find_min" })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// The operation requires at least one element.
    Empty {
        /// The name of the operation that was attempted.
        operation: &'static str,
    },
    /// A 1-based position fell outside `1..=len`.
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The number of elements at the time of the request.
        len: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { operation } => {
                write!(formatter, "{operation}: collection is empty")
            }
            Self::PositionOutOfRange { position, len } => {
                write!(formatter, "position {position} is out of range 1..={len}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}
