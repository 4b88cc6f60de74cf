#![forbid(unsafe_code)]

//! Ring geometry.
//!
//! A bracelet is modelled as a fixed ring of [`TOTAL_SEGMENTS`] positions,
//! numbered from 0. Position numbers only order the ring; there is no
//! wraparound arithmetic anywhere in the layout.

/// Number of positions on every bracelet, regardless of input size.
pub const TOTAL_SEGMENTS: usize = 28;

/// Smallest gap allowed between two consecutive bead positions.
pub const MIN_BEAD_SPACING: usize = 2;

/// Color encoding used for bands when no pattern colors are chosen.
pub const FALLBACK_BAND: &str = "#ddd";

/// Index into a repeating pattern of `pattern_len` colors for a ring position.
///
/// Returns `None` for an empty pattern, where callers fall back to
/// [`FALLBACK_BAND`].
#[inline]
#[must_use]
pub const fn band_index(position: usize, pattern_len: usize) -> Option<usize> {
    if pattern_len == 0 {
        None
    } else {
        Some(position % pattern_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_has_no_band_index() {
        assert_eq!(band_index(0, 0), None);
        assert_eq!(band_index(27, 0), None);
    }

    #[test]
    fn band_index_cycles() {
        assert_eq!(band_index(0, 3), Some(0));
        assert_eq!(band_index(2, 3), Some(2));
        assert_eq!(band_index(3, 3), Some(0));
        assert_eq!(band_index(27, 3), Some(0));
        assert_eq!(band_index(27, 1), Some(0));
    }

    #[test]
    fn pattern_longer_than_ring_never_wraps() {
        for position in 0..TOTAL_SEGMENTS {
            assert_eq!(band_index(position, 40), Some(position));
        }
    }
}
