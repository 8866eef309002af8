// pytuple - Mutable heterogeneously-typed ordered container
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! The [`Tuple`] container and the [`TupleList`] sort adapter.
//!
//! A `Tuple` is a variable-length, mutable, ordered sequence of
//! runtime-typed [`Value`]s with Python-list ergonomics: negative
//! indexing, structural equality, lexicographic ordering, and slice-style
//! extraction.

use std::cmp::Ordering;
use std::fmt;
use std::ops;

use crate::compare;
use crate::error::Result;
use crate::value::Value;

/// A mutable, heterogeneously-typed ordered container.
///
/// `Clone` is the copy operation: it duplicates the element sequence
/// shallowly. Text and nested tuples are reference counted, so nested
/// tuples are shared between the original and the copy, not deep-copied.
///
/// A `Tuple` provides no internal synchronization; sharing one across
/// threads of control is the caller's responsibility, and `clone()` is
/// the mechanism for an alias-free hand-off.
#[derive(Clone, Default)]
pub struct Tuple {
    data: Vec<Value>,
}

// Access-time fault for an index that resolved below zero. Indexes past
// the end fault in the subsequent native bounds check instead.
fn expect_in_range(off: i64, len: usize) -> usize {
    usize::try_from(off)
        .unwrap_or_else(|_| panic!("index {off} out of range for tuple of length {len}"))
}

impl Tuple {
    /// Creates a new tuple of length `len` with every slot holding the
    /// absent marker. `len` may be 0.
    pub fn new(len: usize) -> Self {
        Tuple {
            data: vec![Value::Absent; len],
        }
    }

    /// Creates a new tuple that takes ownership of `data` directly, with
    /// no copy. Construct from a clone if independence is required.
    pub fn from_vec(data: Vec<Value>) -> Self {
        Tuple { data }
    }

    /// Returns the number of elements in the tuple
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the tuple has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Converts `n` to a position in the element sequence. Negative
    /// indexes resolve from the end as in Python, e.g. -1 is the last
    /// element.
    ///
    /// No bounds clamping happens here: an out-of-range result (such as
    /// `offset(-100)` on a length-3 tuple) passes through unchanged and
    /// faults at the point of access.
    pub fn offset(&self, n: i64) -> i64 {
        if n < 0 {
            self.data.len() as i64 + n
        } else {
            n
        }
    }

    fn resolve(&self, n: i64) -> usize {
        expect_in_range(self.offset(n), self.len())
    }

    /// Returns the element at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved index is outside `[0, len)`.
    pub fn get(&self, n: i64) -> &Value {
        &self.data[self.resolve(n)]
    }

    /// Returns a mutable reference to the element at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved index is outside `[0, len)`.
    pub fn get_mut(&mut self, n: i64) -> &mut Value {
        let i = self.resolve(n);
        &mut self.data[i]
    }

    /// Sets the element at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved index is outside `[0, len)`.
    pub fn set(&mut self, n: i64, item: impl Into<Value>) {
        let i = self.resolve(n);
        self.data[i] = item.into();
    }

    /// Returns a new tuple holding a copy of `[start, end)` of this
    /// tuple's elements. Both bounds resolve through [`Tuple::offset`]
    /// and are clamped to at most the length; full-range extraction is
    /// `slice(0, len as i64)`.
    ///
    /// # Panics
    ///
    /// Panics if a bound resolves below zero, or if the resolved start
    /// exceeds the resolved end (the native range fault; slicing is
    /// deliberately non-defensive).
    pub fn slice(&self, start: i64, end: i64) -> Tuple {
        let len = self.len();
        let start = expect_in_range(self.offset(start).min(len as i64), len);
        let end = expect_in_range(self.offset(end).min(len as i64), len);
        Tuple {
            data: self.data[start..end].to_vec(),
        }
    }

    /// Returns a new tuple with a copy of the `n` leftmost elements
    pub fn left(&self, n: i64) -> Tuple {
        self.slice(0, n)
    }

    /// Returns a new tuple with a copy of the `n` rightmost elements
    pub fn right(&self, n: i64) -> Tuple {
        let len = self.len() as i64;
        self.slice((len - n).max(0), len)
    }

    /// Removes and returns the leftmost element, shifting the rest down
    /// one position. Returns the absent marker if the tuple is empty.
    pub fn pop_left(&mut self) -> Value {
        if self.data.is_empty() {
            Value::Absent
        } else {
            self.data.remove(0)
        }
    }

    /// Removes and returns the rightmost element. Returns the absent
    /// marker if the tuple is empty.
    pub fn pop_right(&mut self) -> Value {
        self.data.pop().unwrap_or(Value::Absent)
    }

    /// Reverses the tuple in place
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Splices `items` into the tuple immediately before the element
    /// currently at `start` (resolved through [`Tuple::offset`]).
    /// A resolved position equal to the length appends.
    ///
    /// # Panics
    ///
    /// Panics if the resolved position is outside `[0, len]`.
    pub fn insert_items<I>(&mut self, start: i64, items: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let at = expect_in_range(self.offset(start), self.len());
        let tail = self.data.split_off(at);
        self.data.extend(items);
        self.data.extend(tail);
    }

    /// Splices all of `other`'s elements into the tuple before the
    /// element currently at `start`.
    pub fn insert(&mut self, start: i64, other: &Tuple) {
        self.insert_items(start, other.data.iter().cloned());
    }

    /// Appends one or more items to the end of the tuple
    pub fn append_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.data.extend(items);
    }

    /// Appends all of `other`'s elements to the end of the tuple
    pub fn append(&mut self, other: &Tuple) {
        self.append_items(other.data.iter().cloned());
    }

    /// Returns the position of the first element comparator-equal to
    /// `item`, scanning forward from position `start`, or `None` if no
    /// element matches.
    ///
    /// # Panics
    ///
    /// Panics if the scan compares `item` against an element of an
    /// incompatible kind.
    pub fn index(&self, item: &Value, start: usize) -> Option<usize> {
        (start..self.len()).find(|&i| compare::eq_or_fault(&self.data[i], item))
    }

    /// Returns the number of elements comparator-equal to `item` from
    /// position `start` to the end.
    ///
    /// # Panics
    ///
    /// Panics if the scan compares `item` against an element of an
    /// incompatible kind.
    pub fn count(&self, item: &Value, start: usize) -> usize {
        (start..self.len())
            .filter(|&i| compare::eq_or_fault(&self.data[i], item))
            .count()
    }

    /// Elementwise comparator equality. Tuples of different lengths are
    /// unequal without comparing elements.
    pub fn try_eq(&self, other: &Tuple) -> Result<bool> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (a, b) in self.data.iter().zip(&other.data) {
            if !compare::try_eq(a, b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lexicographic strict order: at the first differing pair the lesser
    /// element decides; if all compared positions are equal the shorter
    /// tuple is lesser.
    pub fn try_lt(&self, other: &Tuple) -> Result<bool> {
        for (a, b) in self.data.iter().zip(&other.data) {
            if compare::try_lt(a, b)? {
                return Ok(true);
            }
            if !compare::try_eq(a, b)? {
                return Ok(false);
            }
        }
        Ok(self.len() < other.len())
    }

    /// Three-way lexicographic comparison
    pub fn try_cmp(&self, other: &Tuple) -> Result<Ordering> {
        for (a, b) in self.data.iter().zip(&other.data) {
            match compare::try_cmp(a, b)? {
                Ordering::Equal => {}
                ord => return Ok(ord),
            }
        }
        Ok(self.len().cmp(&other.len()))
    }

    /// Sorts the tuple's elements in place by comparator order.
    ///
    /// # Panics
    ///
    /// Panics if two elements of incompatible kinds are compared.
    pub fn sort(&mut self) {
        self.data.sort_by(|a, b| compare::cmp_or_fault(a, b));
    }

    /// Borrows the element sequence
    pub fn as_slice(&self) -> &[Value] {
        &self.data
    }

    /// Mutably borrows the element sequence
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.data
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.data.iter()
    }

    /// Consumes the tuple and returns the element sequence
    pub fn into_vec(self) -> Vec<Value> {
        self.data
    }
}

/// Builds a [`Tuple`] from a literal element sequence, converting each
/// item through `Value::from`:
///
/// ```
/// use pytuple::tuple;
///
/// let t = tuple![10, "abc", 2.5];
/// assert_eq!(t.len(), 3);
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::new(0)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Tuple::from_vec(::std::vec![$($crate::Value::from($item)),+])
    };
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

// ============================================================================
// Equality and ordering
// ============================================================================

impl PartialEq for Tuple {
    /// Elementwise comparator equality.
    ///
    /// # Panics
    ///
    /// Panics when elements of incompatible kinds are compared, e.g. a
    /// numeric tuple against a text tuple of the same length. Use
    /// [`Tuple::try_eq`] when the pairing is not known to be compatible.
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl PartialOrd for Tuple {
    /// Lexicographic comparator order.
    ///
    /// # Panics
    ///
    /// Panics when elements of incompatible kinds are compared. Use
    /// [`Tuple::try_cmp`] when the pairing is not known to be compatible.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.try_cmp(other).unwrap_or_else(|err| panic!("{err}")))
    }
}

// ============================================================================
// Indexing and iteration
// ============================================================================

impl ops::Index<i64> for Tuple {
    type Output = Value;

    fn index(&self, n: i64) -> &Value {
        self.get(n)
    }
}

impl ops::IndexMut<i64> for Tuple {
    fn index_mut(&mut self, n: i64) -> &mut Value {
        self.get_mut(n)
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(data: Vec<Value>) -> Self {
        Tuple::from_vec(data)
    }
}

impl<T: Into<Value>> FromIterator<T> for Tuple {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tuple {
            data: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Extend<Value> for Tuple {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ============================================================================
// TupleList - sortable list of tuples
// ============================================================================

/// An ordered list of tuples that sorts by tuple lexicographic order.
#[derive(Clone, Default)]
pub struct TupleList {
    tuples: Vec<Tuple>,
}

impl TupleList {
    /// Creates an empty list
    pub fn new() -> Self {
        TupleList { tuples: Vec::new() }
    }

    /// Appends a tuple to the end of the list
    pub fn push(&mut self, tuple: Tuple) {
        self.tuples.push(tuple);
    }

    /// Returns the number of tuples in the list
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns true if the list holds no tuples
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns the tuple at position `n`, if any
    pub fn get(&self, n: usize) -> Option<&Tuple> {
        self.tuples.get(n)
    }

    /// Iterates over the tuples in order
    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    /// Sorts the list in place by tuple lexicographic order.
    ///
    /// # Panics
    ///
    /// Panics if two tuples with incompatible element kinds are compared.
    pub fn sort(&mut self) {
        self.tuples
            .sort_by(|a, b| a.try_cmp(b).unwrap_or_else(|err| panic!("{err}")));
    }

    /// Consumes the list and returns the underlying vector
    pub fn into_vec(self) -> Vec<Tuple> {
        self.tuples
    }
}

impl From<Vec<Tuple>> for TupleList {
    fn from(tuples: Vec<Tuple>) -> Self {
        TupleList { tuples }
    }
}

impl FromIterator<Tuple> for TupleList {
    fn from_iter<I: IntoIterator<Item = Tuple>>(iter: I) -> Self {
        TupleList {
            tuples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TupleList {
    type Item = Tuple;
    type IntoIter = std::vec::IntoIter<Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TupleList {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}
