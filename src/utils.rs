//! Word arithmetic shared by every bit vector operation.
//!
//! All conversions between bit positions and word storage live here so the
//! boundary cases (empty vectors, exact word multiples, full-width shifts) are
//! handled and tested in one place.

/// Word type for bit storage (64-bit unsigned integer)
pub type Word = u64;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 64;

/// Maximum word value (all bits set)
pub const WORD_MAX: Word = Word::MAX;

/// Get word index from bit position
#[inline(always)]
pub const fn word_idx(bit_pos: usize) -> usize {
    bit_pos >> 6 // bit_pos / 64
}

/// Get bit index within word from bit position
#[inline(always)]
pub const fn bit_idx(bit_pos: usize) -> usize {
    bit_pos & 63 // bit_pos % 64
}

/// Number of words needed to back `num_bits` bits.
///
/// Fewer than one full word, including zero bits, always yields one word.
///
/// # Examples
///
/// ```
/// use bitvector::utils::words_for_bits;
///
/// assert_eq!(words_for_bits(0), 1);
/// assert_eq!(words_for_bits(64), 1);
/// assert_eq!(words_for_bits(65), 2);
/// ```
#[inline]
pub const fn words_for_bits(num_bits: usize) -> usize {
    if num_bits < BITS_PER_WORD {
        1
    } else {
        num_bits.div_ceil(BITS_PER_WORD)
    }
}

/// Mask of the bits of the last word that lie inside `[0, num_bits)`.
///
/// ANDing the last word with this mask clears its trailing slack bits.
///
/// # Examples
///
/// ```
/// use bitvector::utils::trailing_mask;
///
/// assert_eq!(trailing_mask(0), 0);
/// assert_eq!(trailing_mask(3), 0b111);
/// assert_eq!(trailing_mask(128), u64::MAX);
/// ```
#[inline]
pub const fn trailing_mask(num_bits: usize) -> Word {
    let used = bit_idx(num_bits);
    if used != 0 {
        WORD_MAX >> (BITS_PER_WORD - used)
    } else if num_bits == 0 {
        0
    } else {
        WORD_MAX
    }
}

/// Mask with in-word bits `[lo, hi]` (inclusive) set.
///
/// Both bounds must be below `BITS_PER_WORD` and `lo <= hi`.
#[inline(always)]
pub const fn range_mask(lo: usize, hi: usize) -> Word {
    debug_assert!(lo <= hi && hi < BITS_PER_WORD);
    (WORD_MAX << lo) & (WORD_MAX >> (BITS_PER_WORD - 1 - hi))
}

/// Smallest multiple of `BITS_PER_WORD` strictly greater than `pos`.
///
/// Returns `None` if the result does not fit in `usize`.
#[inline]
pub const fn round_up_past(pos: usize) -> Option<usize> {
    match (word_idx(pos) + 1).checked_mul(BITS_PER_WORD) {
        Some(n) => Some(n),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_split() {
        assert_eq!(word_idx(0), 0);
        assert_eq!(bit_idx(0), 0);
        assert_eq!(word_idx(63), 0);
        assert_eq!(bit_idx(63), 63);
        assert_eq!(word_idx(64), 1);
        assert_eq!(bit_idx(64), 0);
        assert_eq!(word_idx(130), 2);
        assert_eq!(bit_idx(130), 2);
    }

    #[test]
    fn test_words_for_bits() {
        assert_eq!(words_for_bits(0), 1);
        assert_eq!(words_for_bits(1), 1);
        assert_eq!(words_for_bits(10), 1);
        assert_eq!(words_for_bits(63), 1);
        assert_eq!(words_for_bits(64), 1);
        assert_eq!(words_for_bits(65), 2);
        assert_eq!(words_for_bits(128), 2);
        assert_eq!(words_for_bits(130), 3);
        assert_eq!(words_for_bits(usize::MAX), usize::MAX / 64 + 1);
    }

    #[test]
    fn test_trailing_mask() {
        assert_eq!(trailing_mask(0), 0);
        assert_eq!(trailing_mask(1), 1);
        assert_eq!(trailing_mask(10), 0x3ff);
        assert_eq!(trailing_mask(63), WORD_MAX >> 1);
        assert_eq!(trailing_mask(64), WORD_MAX);
        assert_eq!(trailing_mask(65), 1);
        assert_eq!(trailing_mask(130), 0b11);
    }

    #[test]
    fn test_range_mask() {
        assert_eq!(range_mask(0, 0), 1);
        assert_eq!(range_mask(0, 63), WORD_MAX);
        assert_eq!(range_mask(63, 63), 1 << 63);
        assert_eq!(range_mask(2, 5), 0b111100);
        assert_eq!(range_mask(60, 63), 0xf << 60);
    }

    #[test]
    fn test_round_up_past() {
        assert_eq!(round_up_past(0), Some(64));
        assert_eq!(round_up_past(63), Some(64));
        assert_eq!(round_up_past(64), Some(128));
        assert_eq!(round_up_past(100), Some(128));
        assert_eq!(round_up_past(usize::MAX), None);
    }
}
