//! Bitvector - Growable Bit Vector Packed into Machine Words
//!
//! A compact sequence of single-bit flags packed into 64-bit words, with point
//! and range get/set/clear, automatic growth, and two scans (first zero bit,
//! first set bit). Intended as a building block for membership sets,
//! allocation bitmaps and flag arrays.
//!
//! # Architecture
//!
//! - **utils**: word arithmetic (word count for a bit length, trailing slack
//!   mask, in-word range masks)
//! - **BitVector**: the engine; strict operations over `[0, num_bits)`
//! - **growing**: forgiving operations that grow, clamp or swap bounds
//!
//! # Examples
//!
//! ## Allocation Bitmap
//!
//! ```
//! use bitvector::BitVector;
//!
//! let mut slots = BitVector::default();
//! slots.set_range(0, 63).unwrap();
//!
//! // Full: the scan grows by one word and hands out the next slot
//! let slot = slots.find_first_zero_or_grow().unwrap();
//! assert_eq!(slot, Some(64));
//! slots.set(64).unwrap();
//!
//! // Release a slot and find it again
//! slots.unset(17).unwrap();
//! assert_eq!(slots.find_first_zero(), Some(17));
//! ```
//!
//! ## Strict vs. Growing Access
//!
//! ```
//! use bitvector::{BitVector, BitVectorError};
//!
//! let mut bv = BitVector::new(10);
//! assert!(matches!(bv.set(10), Err(BitVectorError::PositionInvalid { .. })));
//!
//! bv.set_or_grow(10).unwrap();
//! assert_eq!(bv.num_bits(), 64);
//! assert_eq!(bv.first_set_bit(), Some(10));
//! ```
//!
//! # Safety
//!
//! No `unsafe` code. Out-of-range positions are reported as errors instead of
//! panicking, and allocation failures surface as
//! [`BitVectorError::Allocation`] with the vector left unchanged.

// Module declarations
pub mod bitvector;
pub mod error;
pub mod growing;
pub mod utils;

// Re-exports for convenient access
pub use bitvector::{BitVector, DEFAULT_BITS};
pub use error::{BitVectorError, Result};
pub use utils::{Word, BITS_PER_WORD, WORD_MAX};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "Bitvector";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
