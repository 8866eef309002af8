// pytuple - Common test utilities
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! Shared helpers for integration tests.
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

#[allow(unused_imports)]
pub use pytuple::{Tuple, TupleList, Value, tuple};

/// Build a tuple of signed integers.
#[allow(dead_code)]
pub fn ints(xs: &[i64]) -> Tuple {
    xs.iter().map(|&n| Value::int(n)).collect()
}

/// Build a tuple of text values.
#[allow(dead_code)]
pub fn strs(xs: &[&str]) -> Tuple {
    xs.iter().map(|&s| Value::string(s)).collect()
}
