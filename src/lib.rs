// pytuple - Mutable heterogeneously-typed ordered container
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! # pytuple
//!
//! A variable-length, mutable, heterogeneously-typed ordered container
//! with Python-list ergonomics: negative indexing, structural equality,
//! lexicographic ordering, and slice-style extraction.
//!
//! ```
//! use pytuple::{Value, tuple};
//!
//! let mut t = tuple![2, 4, 6, 8];
//! assert_eq!(t.pop_left(), Value::int(2));
//! assert_eq!(t, tuple![4, 6, 8]);
//! assert_eq!(t[-1], Value::int(8));
//! assert!(tuple![10, 20, 30] < tuple![10, 20, 30, 40]);
//! ```
//!
//! # Value kinds and comparison
//!
//! Every slot holds a [`Value`]: the absent marker, text, a signed or
//! unsigned integer, a float, or a nested tuple. Only same-family
//! pairings compare; the comparison operators panic on an unsupported
//! pairing (text vs. int, signed vs. unsigned, ...) rather than silently
//! answering "not equal". The fallible [`compare::try_eq`] /
//! [`compare::try_lt`] / [`compare::try_cmp`] and [`Tuple::try_eq`] /
//! [`Tuple::try_lt`] / [`Tuple::try_cmp`] surface the same decision as a
//! [`Result`] instead.
//!
//! # Indexing and faults
//!
//! Negative indexes resolve from the end ([`Tuple::offset`]) with no
//! bounds clamping anywhere: a deeply negative or too-large index faults
//! at the point of access, deliberately, instead of being clamped or
//! ignored. The one graceful case is popping an empty tuple, which
//! returns the absent marker.
//!
//! # Ownership and threading
//!
//! [`Tuple::from_vec`] takes ownership of the given sequence without
//! copying; [`Tuple::clone`] is the shallow copy used for alias-free
//! hand-off (nested tuples stay shared). A tuple has no internal
//! synchronization: mutating one from multiple threads of control is
//! undefined without external locking.

pub mod compare;
pub mod error;
pub mod tuple;
pub mod value;

pub use error::{Error, Result};
pub use tuple::{Tuple, TupleList};
pub use value::Value;
