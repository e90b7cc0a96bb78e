//! Custom assertions for normalizer testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use fieldnorm::{ErrorKind, NormalizeResult};
use std::fmt::Debug;

/// Asserts that a result failed with the given error kind.
///
/// # Panics
/// Panics if the result is `Ok` or carries a different kind.
pub fn assert_error_kind<T: Debug>(result: NormalizeResult<T>, kind: ErrorKind) {
    match result {
        Ok(value) => panic!("expected {:?} error, got Ok({:?})", kind, value),
        Err(err) => assert_eq!(
            err.kind(),
            kind,
            "expected {:?} error, got {:?} ({})",
            kind,
            err.kind(),
            err
        ),
    }
}

/// Asserts that a strict parse returned the canonical empty value.
///
/// # Panics
/// Panics if the result is an error or carries a value.
pub fn assert_parses_empty<T: Debug>(result: NormalizeResult<Option<T>>) {
    match result {
        Ok(None) => {}
        other => panic!("expected Ok(None), got {:?}", other),
    }
}
