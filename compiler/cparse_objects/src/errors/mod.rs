//! Error types for the object model.
//!
//! Only structural failures are errors. A missing key is reported as `None`
//! by the lookup operations and never reaches this module.

use thiserror::Error;

use crate::token::TokType;

/// Result of a fallible object-model operation.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Failure raised by `Tuple`, `TokenList` and the conversions between them.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ObjectError {
    /// A list can only be built from a tuple.
    #[error("invalid conversion: cannot build a list from a {found} token")]
    InvalidConversion { found: TokType },

    /// List position outside `0..len`, or a floating index that does not name
    /// a position at all (negative, NaN, infinite).
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: f64, len: usize },

    /// `pop_front` on a tuple with no elements.
    #[error("cannot pop front of an empty tuple")]
    EmptyTuple,
}

impl ObjectError {
    /// Returns `true` for the out-of-range family (bad index or empty pop).
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ObjectError::IndexOutOfRange { .. } | ObjectError::EmptyTuple
        )
    }
}

/// Create an invalid conversion error.
#[cold]
pub fn invalid_conversion(found: TokType) -> ObjectError {
    tracing::debug!(%found, "rejected list conversion");
    ObjectError::InvalidConversion { found }
}

/// Create an index out of range error.
#[cold]
pub fn index_out_of_range(index: f64, len: usize) -> ObjectError {
    ObjectError::IndexOutOfRange { index, len }
}

#[cfg(test)]
mod tests;
