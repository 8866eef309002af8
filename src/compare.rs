// pytuple - Comparator over runtime-typed values
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! Stateless equality and ordering over pairs of [`Value`]s.
//!
//! Only same-family pairings are defined: text/text, int/int, uint/uint,
//! float/float, and tuple/tuple (recursively). Cross-family pairings,
//! including signed vs. unsigned vs. float, return
//! [`Error::Incomparable`]. The absent marker is equal only to itself and
//! orders before every present value.
//!
//! Float relations are the raw `f64` operators: NaN is never equal to,
//! nor less than, anything (including itself).

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::value::Value;

/// Comparator equality over two values.
///
/// An absent marker paired with a present value is unequal, not an error.
pub fn try_eq(lhs: &Value, rhs: &Value) -> Result<bool> {
    match (lhs, rhs) {
        (Value::Absent, Value::Absent) => Ok(true),
        (Value::Absent, _) | (_, Value::Absent) => Ok(false),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Uint(a), Value::Uint(b)) => Ok(a == b),
        (Value::Float(a), Value::Float(b)) => Ok(a == b),
        (Value::Tuple(a), Value::Tuple(b)) => a.try_eq(b),
        (a, b) => Err(Error::incomparable(a, b)),
    }
}

/// Comparator strict order over two values.
///
/// The absent marker is minimal: it is less than every present value, and
/// no present value is less than it.
pub fn try_lt(lhs: &Value, rhs: &Value) -> Result<bool> {
    match (lhs, rhs) {
        (Value::Absent, Value::Absent) => Ok(false),
        (Value::Absent, _) => Ok(true),
        (_, Value::Absent) => Ok(false),
        (Value::Str(a), Value::Str(b)) => Ok(a < b),
        (Value::Int(a), Value::Int(b)) => Ok(a < b),
        (Value::Uint(a), Value::Uint(b)) => Ok(a < b),
        (Value::Float(a), Value::Float(b)) => Ok(a < b),
        (Value::Tuple(a), Value::Tuple(b)) => a.try_lt(b),
        (a, b) => Err(Error::incomparable(a, b)),
    }
}

/// Three-way comparison derived from the two primitive relations:
/// less, else equal, else greater.
pub fn try_cmp(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    if try_lt(lhs, rhs)? {
        Ok(Ordering::Less)
    } else if try_eq(lhs, rhs)? {
        Ok(Ordering::Equal)
    } else {
        Ok(Ordering::Greater)
    }
}

/// Equality for callers that cannot surface an error (operators, search).
/// Unsupported pairings fault here.
pub(crate) fn eq_or_fault(lhs: &Value, rhs: &Value) -> bool {
    try_eq(lhs, rhs).unwrap_or_else(|err| panic!("{err}"))
}

/// Ordering for callers that cannot surface an error (operators, sort).
/// Unsupported pairings fault here.
pub(crate) fn cmp_or_fault(lhs: &Value, rhs: &Value) -> Ordering {
    try_cmp(lhs, rhs).unwrap_or_else(|err| panic!("{err}"))
}
