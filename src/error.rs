// pytuple - Error types for tuple comparison
// Copyright (c) 2025 The pytuple authors. MIT licensed.

//! Error types for comparison over runtime-typed values.

use crate::value::Value;

/// Result type for fallible comparisons.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when comparing runtime-typed values.
///
/// There is deliberately no user-extensible comparator hook: a pairing
/// outside the supported kind families is an error, never a silent
/// "not equal".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The two values' runtime kinds cannot be compared. Only same-family
    /// pairings (text/text, int/int, uint/uint, float/float, tuple/tuple)
    /// are defined.
    #[error("unsupported comparison: {lhs} ({lhs_type}) vs {rhs} ({rhs_type})")]
    Incomparable {
        lhs_type: &'static str,
        rhs_type: &'static str,
        lhs: String,
        rhs: String,
    },
}

impl Error {
    /// Create an incomparable-kinds error carrying both offending values.
    pub(crate) fn incomparable(lhs: &Value, rhs: &Value) -> Self {
        Error::Incomparable {
            lhs_type: lhs.type_name(),
            rhs_type: rhs.type_name(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}
