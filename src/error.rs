//! Library error type.
//!
//! Only a missing file reference is an error the caller sees. I/O failures
//! are recovered inside the validator (one diagnostic, verdict `false`), and
//! short buffers or fully-excluded categories are ordinary `false` outcomes.

use thiserror::Error;

/// The file reference passed to a validator was absent (`None`). This is a
/// programmer error and is never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The input value cannot be null.")]
pub struct InvalidArgument;
