// pytuple - Runtime-typed element values
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! Core element type for tuples.
//!
//! [`Value`] is the closed set of runtime kinds a tuple slot can hold:
//! the absent marker, text, signed and unsigned integers, floats, and
//! nested tuples. Slots are independently typed at runtime; the
//! comparator in [`crate::compare`] recovers the concrete kind by
//! matching on the variant pair.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::compare;
use crate::tuple::Tuple;

/// A single tuple element.
///
/// Text and nested tuples are reference counted, so cloning a `Value` is
/// cheap and copying a tuple shares (rather than deep-copies) its nested
/// tuples.
#[derive(Clone)]
pub enum Value {
    /// The absent marker occupying a slot that has never been set
    Absent,
    /// Text
    Str(Rc<str>),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit unsigned integer
    Uint(u64),
    /// 64-bit floating point number
    Float(f64),
    /// Nested tuple
    Tuple(Rc<Tuple>),
}

impl Value {
    /// Create an absent marker
    pub fn absent() -> Self {
        Value::Absent
    }

    /// Create a text value
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a signed integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create an unsigned integer value
    pub fn uint(n: u64) -> Self {
        Value::Uint(n)
    }

    /// Create a float value
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a nested tuple value
    pub fn tuple(t: Tuple) -> Self {
        Value::Tuple(Rc::new(t))
    }

    /// Check if this value is the absent marker
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "nil",
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Tuple(_) => "tuple",
        }
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "nil"),
            Value::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        write!(f, "inf")
                    } else {
                        write!(f, "-inf")
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{}.0", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Tuple(t) => write!(f, "{}", t),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

// ============================================================================
// Equality and ordering
// ============================================================================

impl PartialEq for Value {
    /// Comparator equality.
    ///
    /// # Panics
    ///
    /// Panics on an unsupported kind pairing (e.g. text vs. int). Use
    /// [`crate::compare::try_eq`] when the pairing is not known to be
    /// compatible.
    fn eq(&self, other: &Self) -> bool {
        compare::eq_or_fault(self, other)
    }
}

impl PartialOrd for Value {
    /// Comparator ordering. The absent marker sorts as least.
    ///
    /// # Panics
    ///
    /// Panics on an unsupported kind pairing. Use
    /// [`crate::compare::try_cmp`] when the pairing is not known to be
    /// compatible.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare::cmp_or_fault(self, other))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Uint(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Uint(u64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Tuple> for Value {
    fn from(t: Tuple) -> Self {
        Value::Tuple(Rc::new(t))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent() {
        let val = Value::absent();
        assert!(val.is_absent());
        assert_eq!(format!("{}", val), "nil");
    }

    #[test]
    fn test_int() {
        let val = Value::int(42);
        assert!(!val.is_absent());
        assert_eq!(format!("{}", val), "42");
    }

    #[test]
    fn test_uint() {
        let val = Value::uint(7);
        assert_eq!(format!("{}", val), "7");
        assert_eq!(val.type_name(), "uint");
    }

    #[test]
    fn test_float() {
        let val = Value::float(3.25);
        assert_eq!(format!("{}", val), "3.25");

        let whole = Value::float(42.0);
        assert_eq!(format!("{}", whole), "42.0");

        let inf = Value::float(f64::INFINITY);
        assert_eq!(format!("{}", inf), "inf");

        let nan = Value::float(f64::NAN);
        assert_eq!(format!("{}", nan), "NaN");
    }

    #[test]
    fn test_string() {
        let val = Value::string("hello");
        assert_eq!(format!("{}", val), "\"hello\"");

        let escaped = Value::string("hello\nworld");
        assert_eq!(format!("{}", escaped), "\"hello\\nworld\"");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::absent().type_name(), "nil");
        assert_eq!(Value::string("a").type_name(), "string");
        assert_eq!(Value::int(1).type_name(), "int");
        assert_eq!(Value::float(1.0).type_name(), "float");
        assert_eq!(Value::tuple(Tuple::new(0)).type_name(), "tuple");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::int(42), Value::int(42));
        assert_ne!(Value::int(42), Value::int(43));
        assert_eq!(Value::absent(), Value::absent());
        assert_ne!(Value::absent(), Value::int(0));
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(5i64), Value::int(5));
        assert_eq!(Value::from(5i32), Value::int(5));
        assert_eq!(Value::from(5u64), Value::uint(5));
        assert_eq!(Value::from(2.5f64), Value::float(2.5));
        assert_eq!(Value::from("abc"), Value::string("abc"));
        assert_eq!(Value::from(String::from("abc")), Value::string("abc"));
    }
}
