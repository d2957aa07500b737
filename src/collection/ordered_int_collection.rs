//! Ordered multiset of integers over a manually sized buffer.
//!
//! This module provides [`OrderedIntCollection`], a mutable, value-semantic
//! container that keeps its integers sorted in non-decreasing order at all
//! times. Duplicates are allowed.
//!
//! # Storage
//!
//! The collection owns a single boxed slice whose length is the *capacity*,
//! and tracks a separate logical length (`used`). Only the prefix
//! `[0, used)` is meaningful; the remaining slots are spare room for
//! insertion. The buffer is only ever reallocated in one place, and it grows
//! geometrically (`capacity + capacity / 2 + 1`) so that repeated insertion
//! costs O(1) amortized reallocation work.
//!
//! Deletions never shrink the buffer. Call
//! [`shrink_to_fit`](OrderedIntCollection::shrink_to_fit) to release spare
//! capacity explicitly.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity         |
//! |-------------------|--------------------|
//! | `insert`          | O(n), O(1) at end  |
//! | `value_at`        | O(1)               |
//! | `find_min/max`    | O(1)               |
//! | `find_median`     | O(1)               |
//! | `find_average`    | O(n)               |
//! | `find_frequency`  | O(log n)           |
//! | `delete_min`      | O(n)               |
//! | `delete_max`      | O(log n)           |
//! | `delete_one`      | O(n)               |
//! | `delete_all`      | O(n)               |
//!
//! # Examples
//!
//! ```rust
//! use sorted_ints::collection::OrderedIntCollection;
//!
//! let mut collection = OrderedIntCollection::new();
//! collection.insert(5);
//! collection.insert(1);
//! collection.insert(3);
//! collection.insert(3);
//!
//! assert_eq!(collection.len(), 4);
//! assert_eq!(collection.value_at(1), 1);
//! assert_eq!(collection.find_max(), 5);
//! assert_eq!(collection.find_frequency(3), 2);
//!
//! assert_eq!(collection.delete_all(3), 2);
//! assert_eq!(collection.to_string(), "[1, 5]");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Range};

use smallvec::SmallVec;

use super::error::CollectionError;

/// The capacity used when none, or an invalid one, is requested.
pub const DEFAULT_CAPACITY: usize = 1;

/// Number of elements a self-append snapshot keeps inline before spilling.
const SNAPSHOT_INLINE: usize = 16;

static_assertions::const_assert!(DEFAULT_CAPACITY >= 1);
static_assertions::assert_impl_all!(OrderedIntCollection: Send, Sync, Clone, Default);

/// A sorted multiset of `i32` backed by an explicitly sized buffer.
///
/// Elements are kept in non-decreasing order. Positional access is 1-based:
/// position `1` holds the minimum and position [`len`](Self::len) holds the
/// maximum.
///
/// Operations whose precondition is unmet (an empty collection, or a
/// position out of range) panic. Each has a `try_*` counterpart that
/// returns a [`CollectionError`] instead.
///
/// # Examples
///
/// ```rust
/// use sorted_ints::collection::OrderedIntCollection;
///
/// let collection: OrderedIntCollection = [4, 1, 2, 1].into_iter().collect();
/// assert_eq!(collection.find_min(), 1);
/// assert_eq!(collection.find_median(), 1.5);
/// assert_eq!(format!("{collection}"), "[1, 1, 2, 4]");
/// ```
pub struct OrderedIntCollection {
    /// Allocated storage; its length is the capacity.
    buffer: Box<[i32]>,
    used: usize,
}

impl OrderedIntCollection {
    /// Creates an empty collection with [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::{OrderedIntCollection, DEFAULT_CAPACITY};
    ///
    /// let collection = OrderedIntCollection::new();
    /// assert!(collection.is_empty());
    /// assert_eq!(collection.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: allocate(DEFAULT_CAPACITY),
            used: 0,
        }
    }

    /// Creates an empty collection able to hold `init_capacity` elements
    /// before reallocating.
    ///
    /// A request below `1` is silently replaced by [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::{OrderedIntCollection, DEFAULT_CAPACITY};
    ///
    /// assert_eq!(OrderedIntCollection::with_capacity(10).capacity(), 10);
    /// assert_eq!(OrderedIntCollection::with_capacity(0).capacity(), DEFAULT_CAPACITY);
    /// assert_eq!(OrderedIntCollection::with_capacity(-3).capacity(), DEFAULT_CAPACITY);
    /// ```
    #[must_use]
    pub fn with_capacity(init_capacity: isize) -> Self {
        let capacity = usize::try_from(init_capacity)
            .ok()
            .filter(|&capacity| capacity >= 1)
            .unwrap_or(DEFAULT_CAPACITY);
        Self {
            buffer: allocate(capacity),
            used: 0,
        }
    }

    /// Returns `true` if the collection holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns the number of elements in the collection.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.used
    }

    /// Returns the number of elements the collection can hold without
    /// reallocating. Always at least `1`.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the element at the 1-based `position`.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty or `position` is not in
    /// `1..=len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let collection = OrderedIntCollection::from(vec![30, 10, 20]);
    /// assert_eq!(collection.value_at(1), 10);
    /// assert_eq!(collection.value_at(3), 30);
    /// ```
    #[must_use]
    pub fn value_at(&self, position: usize) -> i32 {
        self.try_value_at(position)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the element at the 1-based `position`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty, or
    /// [`CollectionError::PositionOutOfRange`] if `position` is not in
    /// `1..=len()`.
    pub fn try_value_at(&self, position: usize) -> Result<i32, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty {
                operation: "value_at",
            });
        }
        if position == 0 || position > self.used {
            return Err(CollectionError::PositionOutOfRange {
                position,
                len: self.used,
            });
        }
        Ok(self.buffer[position - 1])
    }

    /// Returns the element at the 1-based `position`, or `None` when the
    /// position is not in `1..=len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let collection = OrderedIntCollection::from(vec![7]);
    /// assert_eq!(collection.get(1), Some(7));
    /// assert_eq!(collection.get(0), None);
    /// assert_eq!(collection.get(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<i32> {
        self.try_value_at(position).ok()
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    #[must_use]
    pub fn find_min(&self) -> i32 {
        self.try_find_min().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    pub fn try_find_min(&self) -> Result<i32, CollectionError> {
        self.elements()
            .first()
            .copied()
            .ok_or(CollectionError::Empty {
                operation: "find_min",
            })
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    #[must_use]
    pub fn find_max(&self) -> i32 {
        self.try_find_max().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    pub fn try_find_max(&self) -> Result<i32, CollectionError> {
        self.elements()
            .last()
            .copied()
            .ok_or(CollectionError::Empty {
                operation: "find_max",
            })
    }

    /// Returns the median.
    ///
    /// With an odd number of elements this is the middle element; with an
    /// even number it is the mean of the two middle elements.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let odd: OrderedIntCollection = (1..=5).collect();
    /// assert_eq!(odd.find_median(), 3.0);
    ///
    /// let even: OrderedIntCollection = (1..=6).collect();
    /// assert_eq!(even.find_median(), 3.5);
    /// ```
    #[must_use]
    pub fn find_median(&self) -> f64 {
        self.try_find_median()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the median.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    pub fn try_find_median(&self) -> Result<f64, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty {
                operation: "find_median",
            });
        }
        let middle = self.used / 2;
        let median = if self.used % 2 == 0 {
            // Widen before adding; the two middle values may overflow i32.
            (f64::from(self.buffer[middle - 1]) + f64::from(self.buffer[middle])) * 0.5
        } else {
            f64::from(self.buffer[middle])
        };
        Ok(median)
    }

    /// Returns the arithmetic mean of all elements.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let collection = OrderedIntCollection::from(vec![1, 2, 2, 5]);
    /// assert_eq!(collection.find_average(), 2.5);
    /// ```
    #[must_use]
    pub fn find_average(&self) -> f64 {
        self.try_find_average()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the arithmetic mean of all elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn try_find_average(&self) -> Result<f64, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty {
                operation: "find_average",
            });
        }
        let sum: f64 = self.elements().iter().map(|&value| f64::from(value)).sum();
        Ok(sum / self.used as f64)
    }

    /// Returns how many times `target` occurs. Zero if absent.
    ///
    /// # Complexity
    ///
    /// O(log n): occurrences are contiguous, so two binary searches bound
    /// the run.
    #[must_use]
    pub fn find_frequency(&self, target: i32) -> usize {
        self.equal_range(target).len()
    }

    /// Inserts `value`, keeping the elements sorted.
    ///
    /// When the buffer is full it first grows to
    /// `capacity + capacity / 2 + 1`. A value equal to existing elements is
    /// placed after them.
    ///
    /// # Complexity
    ///
    /// O(n) worst case; O(1) when `value` is not smaller than the maximum
    /// and no reallocation is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection = OrderedIntCollection::new();
    /// collection.insert(2);
    /// collection.insert(1);
    /// assert_eq!(collection.value_at(1), 1);
    /// assert!(collection.capacity() >= 2);
    /// ```
    pub fn insert(&mut self, value: i32) {
        if self.used == self.capacity() {
            self.set_capacity(grown_capacity(self.capacity()));
        }

        let mut hole = self.used;
        while hole > 0 && self.buffer[hole - 1] > value {
            self.buffer[hole] = self.buffer[hole - 1];
            hole -= 1;
        }
        self.buffer[hole] = value;
        self.used += 1;
    }

    /// Removes every occurrence of the minimum and returns how many were
    /// removed.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection = OrderedIntCollection::from(vec![1, 1, 2, 3]);
    /// assert_eq!(collection.delete_min(), 2);
    /// assert_eq!(collection.find_min(), 2);
    /// ```
    pub fn delete_min(&mut self) -> usize {
        self.try_delete_min()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Removes every occurrence of the minimum and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty; the
    /// collection is left untouched.
    pub fn try_delete_min(&mut self) -> Result<usize, CollectionError> {
        let minimum = self.try_find_min().map_err(|_| CollectionError::Empty {
            operation: "delete_min",
        })?;
        let frequency = self.equal_range(minimum).end;
        self.buffer.copy_within(frequency..self.used, 0);
        self.used -= frequency;
        Ok(frequency)
    }

    /// Removes every occurrence of the maximum and returns how many were
    /// removed.
    ///
    /// The maxima occupy the tail of the buffer, so only the logical length
    /// changes.
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    pub fn delete_max(&mut self) -> usize {
        self.try_delete_max()
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Removes every occurrence of the maximum and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection is empty; the
    /// collection is left untouched.
    pub fn try_delete_max(&mut self) -> Result<usize, CollectionError> {
        let maximum = self.try_find_max().map_err(|_| CollectionError::Empty {
            operation: "delete_max",
        })?;
        let run = self.equal_range(maximum);
        self.used = run.start;
        Ok(run.len())
    }

    /// Removes one occurrence of `target`, returning `true` if it was
    /// present.
    ///
    /// When `target` occurs several times the rightmost occurrence is the
    /// one removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection = OrderedIntCollection::from(vec![4, 4, 9]);
    /// assert!(collection.delete_one(4));
    /// assert_eq!(collection.find_frequency(4), 1);
    /// assert!(!collection.delete_one(7));
    /// ```
    pub fn delete_one(&mut self, target: i32) -> bool {
        let run = self.equal_range(target);
        if run.is_empty() {
            return false;
        }
        let position = run.end - 1;
        self.buffer.copy_within(position + 1..self.used, position);
        self.used -= 1;
        true
    }

    /// Removes every occurrence of `target` and returns how many were
    /// removed. Returns `0` and leaves the collection unchanged if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection = OrderedIntCollection::from(vec![1, 3, 3, 3, 8]);
    /// assert_eq!(collection.delete_all(3), 3);
    /// assert_eq!(collection.to_string(), "[1, 8]");
    /// ```
    pub fn delete_all(&mut self, target: i32) -> usize {
        let run = self.equal_range(target);
        if run.is_empty() {
            return 0;
        }
        self.buffer.copy_within(run.end..self.used, run.start);
        self.used -= run.len();
        run.len()
    }

    /// Removes every element. The capacity is kept.
    #[inline]
    pub const fn clear(&mut self) {
        self.used = 0;
    }

    /// Reallocates the buffer down to `max(len(), 1)` slots.
    ///
    /// Deletions never release memory on their own. This copies every
    /// element, so reserve it for cases where memory use matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection: OrderedIntCollection = (0..100).collect();
    /// collection.delete_all(0);
    /// collection.shrink_to_fit();
    /// assert_eq!(collection.capacity(), 99);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        tracing::debug!(
            capacity = self.capacity(),
            used = self.used,
            "shrinking buffer"
        );
        self.set_capacity(0);
    }

    /// Inserts every element of `addend` into this collection.
    ///
    /// Use [`combine_with_self`](Self::combine_with_self) to append a
    /// collection to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut left = OrderedIntCollection::from(vec![1, 5]);
    /// let right = OrderedIntCollection::from(vec![3, 5]);
    /// left.combine_into(&right);
    /// assert_eq!(left.to_string(), "[1, 3, 5, 5]");
    /// ```
    pub fn combine_into(&mut self, addend: &Self) {
        for &value in addend.elements() {
            self.insert(value);
        }
    }

    /// Appends the collection to itself, doubling every element.
    ///
    /// The elements are snapshotted before the first insertion, so the
    /// iteration is bounded by the original length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ints::collection::OrderedIntCollection;
    ///
    /// let mut collection = OrderedIntCollection::from(vec![1, 3, 5]);
    /// collection.combine_with_self();
    /// assert_eq!(collection.to_string(), "[1, 1, 3, 3, 5, 5]");
    /// ```
    pub fn combine_with_self(&mut self) {
        let snapshot: SmallVec<[i32; SNAPSHOT_INLINE]> = SmallVec::from_slice(self.elements());
        for value in snapshot {
            self.insert(value);
        }
    }

    /// The meaningful prefix of the buffer.
    #[inline]
    fn elements(&self) -> &[i32] {
        &self.buffer[..self.used]
    }

    /// Index range holding every occurrence of `target`.
    fn equal_range(&self, target: i32) -> Range<usize> {
        let elements = self.elements();
        let start = elements.partition_point(|&value| value < target);
        let end = start + elements[start..].partition_point(|&value| value <= target);
        start..end
    }

    /// Moves the elements into a buffer of `requested` slots, clamped first
    /// to `used` and then to `1`.
    fn set_capacity(&mut self, requested: usize) {
        let new_capacity = requested.max(self.used).max(1);
        let mut buffer = allocate(new_capacity);
        buffer[..self.used].copy_from_slice(self.elements());
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity,
            used = self.used,
            "reallocated buffer"
        );
        self.buffer = buffer;
    }
}

/// Builds a new collection holding every element of `first` and `second`.
///
/// The result starts from [`DEFAULT_CAPACITY`] and receives the elements of
/// `first` then `second` through [`OrderedIntCollection::insert`]. Operand
/// order does not affect the result.
///
/// # Examples
///
/// ```rust
/// use sorted_ints::collection::{concatenate, OrderedIntCollection};
///
/// let first = OrderedIntCollection::from(vec![1, 3]);
/// let second = OrderedIntCollection::from(vec![2, 2]);
/// assert_eq!(concatenate(&first, &second), concatenate(&second, &first));
/// assert_eq!(concatenate(&first, &second).to_string(), "[1, 2, 2, 3]");
/// ```
#[must_use]
pub fn concatenate(
    first: &OrderedIntCollection,
    second: &OrderedIntCollection,
) -> OrderedIntCollection {
    let mut result = OrderedIntCollection::new();
    for position in 1..=first.len() {
        result.insert(first.value_at(position));
    }
    for position in 1..=second.len() {
        result.insert(second.value_at(position));
    }
    result
}

fn allocate(capacity: usize) -> Box<[i32]> {
    vec![0; capacity].into_boxed_slice()
}

const fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_add(capacity / 2).saturating_add(1)
}

impl Default for OrderedIntCollection {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OrderedIntCollection {
    fn clone(&self) -> Self {
        let mut buffer = allocate(self.capacity());
        buffer[..self.used].copy_from_slice(self.elements());
        Self {
            buffer,
            used: self.used,
        }
    }

    /// Copies `source` into `self`, reusing the existing buffer when the
    /// capacities already match.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            self.buffer = allocate(source.capacity());
        }
        self.buffer[..source.used].copy_from_slice(source.elements());
        self.used = source.used;
    }
}

impl PartialEq for OrderedIntCollection {
    fn eq(&self, other: &Self) -> bool {
        self.elements() == other.elements()
    }
}

impl Eq for OrderedIntCollection {}

impl fmt::Debug for OrderedIntCollection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements()).finish()
    }
}

impl fmt::Display for OrderedIntCollection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.elements() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl Extend<i32> for OrderedIntCollection {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.used.saturating_add(lower);
        if required > self.capacity() {
            self.set_capacity(required.max(grown_capacity(self.capacity())));
        }
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for OrderedIntCollection {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl From<&[i32]> for OrderedIntCollection {
    fn from(values: &[i32]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<i32>> for OrderedIntCollection {
    fn from(values: Vec<i32>) -> Self {
        values.into_iter().collect()
    }
}

impl AddAssign<&OrderedIntCollection> for OrderedIntCollection {
    fn add_assign(&mut self, addend: &Self) {
        self.combine_into(addend);
    }
}

impl AddAssign for OrderedIntCollection {
    fn add_assign(&mut self, addend: Self) {
        self.combine_into(&addend);
    }
}

impl Add for &OrderedIntCollection {
    type Output = OrderedIntCollection;

    fn add(self, rhs: Self) -> Self::Output {
        concatenate(self, rhs)
    }
}

impl Add for OrderedIntCollection {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        concatenate(&self, &rhs)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for OrderedIntCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.elements() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedIntCollectionVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for OrderedIntCollectionVisitor {
    type Value = OrderedIntCollection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: isize = 4096;
        let capacity = seq
            .size_hint()
            .map_or(0, |hint| isize::try_from(hint).unwrap_or(MAX_PREALLOCATE))
            .min(MAX_PREALLOCATE);
        let mut collection = OrderedIntCollection::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            collection.insert(element);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OrderedIntCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedIntCollectionVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
