//! BitVector - Growable bit vector packed into 64-bit words.
//!
//! # Design
//!
//! - Uses `Vec<u64>` for storage (64-bit words, LSB-first within each word)
//! - Bit indexing: word_idx = bit_idx / 64, bit_offset = bit_idx % 64
//! - Logical length (`num_bits`) is tracked separately from the physical
//!   word count, which is always `words_for_bits(num_bits)`
//! - Bits at positions `>= num_bits` in the last word are always zero, so the
//!   scans never need to mask them out
//!
//! Addressable positions are `[0, num_bits)`.
//!
//! # Examples
//!
//! ```
//! use bitvector::BitVector;
//!
//! let mut bv = BitVector::new(10);
//! bv.set(5).unwrap();
//! assert_eq!(bv.get(5), Ok(true));
//!
//! bv.resize(130).unwrap();
//! assert_eq!(bv.num_words(), 3);
//!
//! bv.set_range(60, 70).unwrap();
//! assert_eq!(bv.set_positions().len(), 12);
//! ```

use crate::error::{BitVectorError, Result};
use crate::utils::{
    bit_idx, range_mask, trailing_mask, word_idx, words_for_bits, Word, BITS_PER_WORD, WORD_MAX,
};
use std::fmt;

/// Logical size of a vector built with `Default`: one full word.
pub const DEFAULT_BITS: usize = BITS_PER_WORD;

/// Growable bit vector with word-level range operations.
///
/// All bit indices are 0-based.
#[derive(Clone)]
pub struct BitVector {
    /// Storage words, always `words_for_bits(num_bits)` long until disposed
    words: Vec<Word>,
    /// Logical number of bits
    num_bits: usize,
}

impl BitVector {
    /// Create a new BitVector with `n` bits, all initialized to 0.
    ///
    /// Aborts on allocation failure like any `Vec`; use [`try_new`] to
    /// handle it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitvector::BitVector;
    ///
    /// let bv = BitVector::new(10);
    /// assert_eq!(bv.num_bits(), 10);
    /// assert_eq!(bv.num_words(), 1);
    /// ```
    ///
    /// [`try_new`]: BitVector::try_new
    pub fn new(n: usize) -> Self {
        Self {
            words: vec![0; words_for_bits(n)],
            num_bits: n,
        }
    }

    /// Create a new BitVector with `n` bits, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] if the word storage cannot be
    /// obtained. No vector is produced in that case.
    pub fn try_new(n: usize) -> Result<Self> {
        let num_words = words_for_bits(n);
        let mut words = Vec::new();
        words.try_reserve_exact(num_words)?;
        words.resize(num_words, 0);
        Ok(Self { words, num_bits: n })
    }

    /// Resize the BitVector to contain `n` bits.
    ///
    /// Bits below `min(old, n)` are preserved and new bits read 0. When
    /// shrinking, bits at positions `>= n` are discarded and cleared, so
    /// growing again later exposes zeros.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::Allocation`] if growing the storage fails.
    /// The vector is left exactly as it was.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        if n == self.num_bits && !self.words.is_empty() {
            return Ok(());
        }

        let num_words = words_for_bits(n);
        let cur_words = self.words.len();

        if num_words > cur_words {
            self.words.try_reserve_exact(num_words - cur_words)?;
            self.words.resize(num_words, 0);
        } else if num_words < cur_words {
            self.words.truncate(num_words);
            self.words.shrink_to_fit();
        }

        // Same or fewer words: the last retained word may carry bits past n
        self.words[num_words - 1] &= trailing_mask(n);
        self.num_bits = n;
        Ok(())
    }

    /// Release the word storage and reset the size to 0.
    ///
    /// Disposing an already disposed vector does nothing. Every position is
    /// invalid afterwards; [`resize`] brings storage back.
    ///
    /// [`resize`]: BitVector::resize
    pub fn dispose(&mut self) {
        if !self.words.is_empty() {
            self.words = Vec::new();
            self.num_bits = 0;
        }
    }

    /// Whether the storage has been released by [`dispose`].
    ///
    /// [`dispose`]: BitVector::dispose
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.words.is_empty()
    }

    /// Get total number of addressable bits.
    #[inline(always)]
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get number of storage words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Whether the vector has no addressable bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    #[inline(always)]
    fn check_pos(&self, pos: usize) -> Result<()> {
        if pos < self.num_bits {
            Ok(())
        } else {
            Err(BitVectorError::PositionInvalid {
                pos,
                num_bits: self.num_bits,
            })
        }
    }

    /// Get bit at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::PositionInvalid`] if `pos >= num_bits`.
    #[inline]
    pub fn get(&self, pos: usize) -> Result<bool> {
        self.check_pos(pos)?;
        Ok((self.words[word_idx(pos)] >> bit_idx(pos)) & 1 == 1)
    }

    /// Set bit at position `pos` to 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::PositionInvalid`] if `pos >= num_bits`.
    #[inline]
    pub fn set(&mut self, pos: usize) -> Result<()> {
        self.check_pos(pos)?;
        self.words[word_idx(pos)] |= 1 << bit_idx(pos);
        Ok(())
    }

    /// Clear bit at position `pos` (set to 0).
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::PositionInvalid`] if `pos >= num_bits`.
    #[inline]
    pub fn unset(&mut self, pos: usize) -> Result<()> {
        self.check_pos(pos)?;
        self.words[word_idx(pos)] &= !(1 << bit_idx(pos));
        Ok(())
    }

    // =========================================================================
    // Range Operations
    // =========================================================================

    fn check_range(&self, from: usize, to: usize) -> Result<()> {
        if from <= to && to < self.num_bits {
            Ok(())
        } else {
            Err(BitVectorError::RangeInvalid {
                from,
                to,
                num_bits: self.num_bits,
            })
        }
    }

    /// Set every bit in the inclusive range `[from, to]` to 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::RangeInvalid`] if `from > to` or
    /// `to >= num_bits`. No bit is modified in that case.
    pub fn set_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_range(from, to)?;

        let beg_word = word_idx(from);
        let end_word = word_idx(to);

        if beg_word == end_word {
            self.words[beg_word] |= range_mask(bit_idx(from), bit_idx(to));
            return Ok(());
        }

        self.words[beg_word] |= range_mask(bit_idx(from), BITS_PER_WORD - 1);
        self.words[beg_word + 1..end_word].fill(WORD_MAX);
        self.words[end_word] |= range_mask(0, bit_idx(to));
        Ok(())
    }

    /// Clear every bit in the inclusive range `[from, to]` to 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::RangeInvalid`] if `from > to` or
    /// `to >= num_bits`. No bit is modified in that case.
    pub fn unset_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_range(from, to)?;

        let beg_word = word_idx(from);
        let end_word = word_idx(to);

        if beg_word == end_word {
            self.words[beg_word] &= !range_mask(bit_idx(from), bit_idx(to));
            return Ok(());
        }

        self.words[beg_word] &= !range_mask(bit_idx(from), BITS_PER_WORD - 1);
        self.words[beg_word + 1..end_word].fill(0);
        self.words[end_word] &= !range_mask(0, bit_idx(to));
        Ok(())
    }

    // =========================================================================
    // Search Operations
    // =========================================================================

    /// Find the lowest position in `[0, num_bits)` holding a 0.
    ///
    /// Returns `None` if every addressable bit is 1 (including the empty
    /// vector).
    pub fn find_first_zero(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|&(_, &word)| word != WORD_MAX)
            .map(|(i, &word)| i * BITS_PER_WORD + (!word).trailing_zeros() as usize)
            // Slack bits are zero, so a hit past the logical end means "full"
            .filter(|&pos| pos < self.num_bits)
    }

    /// Find the lowest position holding a 1 (count of trailing zeros).
    ///
    /// Returns `None` if no bit is set.
    pub fn first_set_bit(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|&(_, &word)| word != 0)
            .map(|(i, &word)| i * BITS_PER_WORD + word.trailing_zeros() as usize)
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn num_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count number of cleared bits within `[0, num_bits)`.
    #[inline]
    pub fn num_cleared(&self) -> usize {
        self.num_bits - self.num_set()
    }

    /// Get indices of all set bits, in ascending order.
    pub fn set_positions(&self) -> Vec<usize> {
        let mut acts = Vec::with_capacity(self.num_set());

        for (i, &word) in self.words.iter().enumerate() {
            let mut rest = word;
            while rest != 0 {
                acts.push(i * BITS_PER_WORD + rest.trailing_zeros() as usize);
                rest &= rest - 1;
            }
        }

        acts
    }

    // =========================================================================
    // Word-Level Access
    // =========================================================================

    /// Get read-only access to word storage.
    ///
    /// The borrow ends before any resize, so stale views cannot outlive a
    /// reallocation.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Estimate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.words.capacity() * std::mem::size_of::<Word>()
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new(DEFAULT_BITS)
    }
}

impl PartialEq for BitVector {
    /// Word-level comparison; slack bits are always zero so this is exact.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.num_bits == other.num_bits && self.words == other.words
    }
}

impl Eq for BitVector {}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("num_bits", &self.num_bits)
            .field("num_words", &self.words.len())
            .field("set", &self.set_positions())
            .finish()
    }
}
