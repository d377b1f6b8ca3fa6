//! Standard errors that may occur when working with the Golay codec.

use std;

/// Golay codec runtime errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GolayError {
    /// Encode was given data wider than the 12-bit payload.
    InvalidInput,
}

/// Standard result using `GolayError`.
pub type Result<T> = std::result::Result<T, GolayError>;
