//! Auto-growing and clamping operations on top of the core `BitVector`.
//!
//! The core operations reject anything outside `[0, num_bits)`. The methods
//! here give callers the forgiving contract instead: setting past the end
//! grows the vector, clearing past the end is ignored or clamped, reversed
//! range bounds are swapped, and the first-zero scan makes room when the
//! vector is full.
//!
//! Growth always happens before any bit is written, so an allocation failure
//! leaves every bit unchanged.
//!
//! # Examples
//!
//! ```
//! use bitvector::BitVector;
//!
//! let mut bv = BitVector::default();
//! bv.set_or_grow(100).unwrap();
//! assert_eq!(bv.num_bits(), 128);
//!
//! bv.set_range_or_grow(150, 140).unwrap();
//! assert_eq!(bv.num_bits(), 151);
//!
//! bv.unset_range_clamped(145, 10_000);
//! assert_eq!(bv.set_positions(), vec![100, 140, 141, 142, 143, 144]);
//! ```

use crate::bitvector::BitVector;
use crate::error::{BitVectorError, Result};
use crate::utils::{round_up_past, BITS_PER_WORD};

#[inline]
fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl BitVector {
    /// Set bit `pos`, growing the vector first if `pos` is past the end.
    ///
    /// Growth goes to the next word boundary above `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] if growing fails, or
    /// [`BitVectorError::CapacityOverflow`] if the grown size does not fit in
    /// `usize`. The vector is unchanged in both cases.
    pub fn set_or_grow(&mut self, pos: usize) -> Result<()> {
        if pos >= self.num_bits() {
            let n = round_up_past(pos).ok_or(BitVectorError::CapacityOverflow { requested: pos })?;
            self.resize(n)?;
        }
        self.set(pos)
    }

    /// Clear bit `pos` if it is addressable; positions past the end are
    /// ignored.
    #[inline]
    pub fn unset_if_present(&mut self, pos: usize) {
        if pos < self.num_bits() {
            let _ = self.unset(pos);
        }
    }

    /// Set every bit between `a` and `b` inclusive, in either order, growing
    /// the vector so the upper bound is addressable.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] or
    /// [`BitVectorError::CapacityOverflow`] if growing fails. No bit is
    /// modified in that case.
    pub fn set_range_or_grow(&mut self, a: usize, b: usize) -> Result<()> {
        let (from, to) = ordered(a, b);
        if to >= self.num_bits() {
            let n = to
                .checked_add(1)
                .ok_or(BitVectorError::CapacityOverflow { requested: to })?;
            self.resize(n)?;
        }
        self.set_range(from, to)
    }

    /// Clear every bit between `a` and `b` inclusive, in either order.
    ///
    /// The upper bound is clamped to the last addressable position, and the
    /// call does nothing when the lower bound is already past the end. Never
    /// grows.
    pub fn unset_range_clamped(&mut self, a: usize, b: usize) {
        let (from, to) = ordered(a, b);
        let num_bits = self.num_bits();
        if from >= num_bits {
            return;
        }
        let _ = self.unset_range(from, to.min(num_bits - 1));
    }

    /// Find the first zero bit, growing by one word and retrying once when
    /// every bit is set.
    ///
    /// Returns `Ok(None)` only if the vector is full and cannot grow without
    /// overflowing `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] if the retry growth fails.
    pub fn find_first_zero_or_grow(&mut self) -> Result<Option<usize>> {
        if let Some(pos) = self.find_first_zero() {
            return Ok(Some(pos));
        }

        match self.num_bits().checked_add(BITS_PER_WORD) {
            Some(n) => {
                self.resize(n)?;
                Ok(self.find_first_zero())
            }
            None => Ok(None),
        }
    }

    /// Reset to exactly one word with every bit cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] if storage has to be
    /// reallocated (after [`dispose`]) and that fails.
    ///
    /// [`dispose`]: BitVector::dispose
    pub fn clear(&mut self) -> Result<()> {
        self.resize(BITS_PER_WORD)?;
        self.unset_range(0, BITS_PER_WORD - 1)
    }
}
