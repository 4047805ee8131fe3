//! Error types for bit vector operations.
//!
//! This module provides a unified error type for every fallible operation in
//! the crate, using the `thiserror` crate for ergonomic error handling.

use std::collections::TryReserveError;
use thiserror::Error;

/// The main error type for bit vector operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitVectorError {
    /// Backing word storage could not be allocated or grown
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Single bit position outside the addressable span
    #[error("Invalid position: {pos} (num_bits: {num_bits})")]
    PositionInvalid {
        /// The position that was accessed
        pos: usize,
        /// Logical size at the time of access
        num_bits: usize,
    },

    /// Inclusive range outside the addressable span, or given out of order
    #[error("Invalid range: [{from}, {to}] (num_bits: {num_bits})")]
    RangeInvalid {
        /// First position of the range
        from: usize,
        /// Last position of the range (inclusive)
        to: usize,
        /// Logical size at the time of access
        num_bits: usize,
    },

    /// Requested size does not fit in `usize`
    #[error("Capacity overflow: position {requested} cannot be addressed")]
    CapacityOverflow {
        /// The position that triggered the overflow
        requested: usize,
    },
}

/// A specialized `Result` type for bit vector operations.
///
/// This is a type alias for `Result<T, BitVectorError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, BitVectorError>;
