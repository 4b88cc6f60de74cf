#![forbid(unsafe_code)]

//! Bead and band layout around a bracelet ring.
//!
//! The ring always has [`TOTAL_SEGMENTS`] positions. Message characters
//! become beads spread evenly across the ring, and every other position is a
//! band colored by cycling through the chosen pattern.
//!
//! # Bead placement
//!
//! For a trimmed message of `n` characters the gap between beads is
//!
//! ```text
//! spacing = max(MIN_BEAD_SPACING, TOTAL_SEGMENTS / (n + 1))
//! ```
//!
//! and character `i` targets position `(i + 1) * spacing`. Targets are never
//! wrapped or clamped: a target at or past the end of the ring places no
//! bead, and that character is simply absent from the layout. Callers that
//! care can ask [`Layout::dropped_glyphs`].
//!
//! # Example
//! ```
//! use loom_layout::{compute_layout, SegmentKind};
//!
//! let layout = compute_layout(&[], "Hi");
//! assert_eq!(layout.len(), 28);
//! assert_eq!(layout[9].kind, SegmentKind::Bead { glyph: "H" });
//! assert_eq!(layout[18].kind, SegmentKind::Bead { glyph: "i" });
//! assert_eq!(layout[0].kind, SegmentKind::Band { color: "#ddd" });
//! ```

pub mod segment;

pub use loom_core::{FALLBACK_BAND, MIN_BEAD_SPACING, TOTAL_SEGMENTS};
pub use segment::{Segment, SegmentKind};

use std::ops::Index;

use loom_core::{Message, band_index};
use loom_style::Swatch;

/// Gap between consecutive beads for a message of `glyph_count` characters.
///
/// Returns `None` when there is nothing to place.
#[must_use]
pub const fn bead_spacing(glyph_count: usize) -> Option<usize> {
    if glyph_count == 0 {
        return None;
    }
    let even = TOTAL_SEGMENTS / (glyph_count + 1);
    Some(if even < MIN_BEAD_SPACING {
        MIN_BEAD_SPACING
    } else {
        even
    })
}

/// Target ring position of every character, in message order.
///
/// Targets at or past [`TOTAL_SEGMENTS`] are included; they are the ones the
/// layout drops.
pub fn bead_targets(glyph_count: usize) -> impl Iterator<Item = usize> {
    bead_spacing(glyph_count)
        .into_iter()
        .flat_map(move |spacing| (1..=glyph_count).map(move |slot| slot * spacing))
}

/// Message index whose bead targets `position`, if the position is a
/// multiple of `spacing`. The index may still be past the end of the message.
#[inline]
const fn bead_slot(position: usize, spacing: usize) -> Option<usize> {
    if position >= spacing && position % spacing == 0 {
        Some(position / spacing - 1)
    } else {
        None
    }
}

/// Color encoding of the band at `position`.
#[inline]
fn band_color(pattern: &[Swatch], position: usize) -> &str {
    match band_index(position, pattern.len()) {
        Some(idx) => pattern[idx].value(),
        None => FALLBACK_BAND,
    }
}

/// A full ring of segments.
///
/// Borrows the message text and pattern color encodings it was computed
/// from; the length is fixed by the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Layout<'a> {
    segments: [Segment<'a>; TOTAL_SEGMENTS],
    spacing: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    glyphs: Vec<&'a str>,
}

/// Lay out beads and bands for a pattern snapshot and a message.
///
/// The message is trimmed first. Pure and deterministic; never fails.
#[must_use]
pub fn compute_layout<'a>(pattern: &'a [Swatch], message: &'a str) -> Layout<'a> {
    let glyphs = Message::new(message).glyphs();
    let spacing = bead_spacing(glyphs.len());
    let _span = loom_core::debug_span!(
        "compute_layout",
        pattern_len = pattern.len(),
        glyphs = glyphs.len(),
        spacing = spacing.unwrap_or(0)
    )
    .entered();

    let segments = std::array::from_fn(|position| {
        let bead = spacing
            .and_then(|spacing| bead_slot(position, spacing))
            .and_then(|slot| glyphs.get(slot).copied());
        let kind = match bead {
            Some(glyph) => SegmentKind::Bead { glyph },
            None => SegmentKind::Band {
                color: band_color(pattern, position),
            },
        };
        Segment { position, kind }
    });

    let layout = Layout {
        segments,
        spacing,
        glyphs,
    };

    let dropped = layout.dropped_glyphs().len();
    if dropped > 0 {
        loom_core::debug!(
            dropped,
            placed = layout.placed_glyphs().len(),
            "message longer than the ring can hold; trailing beads dropped"
        );
    }
    loom_core::trace!(beads = layout.beads().count(), "layout computed");

    layout
}

impl<'a> Layout<'a> {
    /// Number of segments (always [`TOTAL_SEGMENTS`]).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        TOTAL_SEGMENTS
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Segments in ring order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Segment at `position`, if on the ring.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Segment<'a>> {
        self.segments.get(position)
    }

    /// Iterate segments in ring order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<'a>> {
        self.segments.iter()
    }

    /// Bead gap used for this layout, or `None` for an empty message.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> Option<usize> {
        self.spacing
    }

    /// `(position, glyph)` for every bead on the ring.
    pub fn beads(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.segments
            .iter()
            .filter_map(|seg| seg.glyph().map(|glyph| (seg.position, glyph)))
    }

    /// `(position, color)` for every band on the ring.
    pub fn bands(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.segments
            .iter()
            .filter_map(|seg| seg.color().map(|color| (seg.position, color)))
    }

    /// Message characters that landed on the ring, in message order.
    #[must_use]
    pub fn placed_glyphs(&self) -> &[&'a str] {
        &self.glyphs[..self.placed_count()]
    }

    /// Message characters whose target fell past the end of the ring.
    #[must_use]
    pub fn dropped_glyphs(&self) -> &[&'a str] {
        &self.glyphs[self.placed_count()..]
    }

    fn placed_count(&self) -> usize {
        match self.spacing {
            // Targets are spacing, 2*spacing, ...; keep those below the ring end.
            Some(spacing) => ((TOTAL_SEGMENTS - 1) / spacing).min(self.glyphs.len()),
            None => 0,
        }
    }
}

impl<'a> Index<usize> for Layout<'a> {
    type Output = Segment<'a>;

    fn index(&self, position: usize) -> &Segment<'a> {
        &self.segments[position]
    }
}

impl<'l, 'a> IntoIterator for &'l Layout<'a> {
    type Item = &'l Segment<'a>;
    type IntoIter = std::slice::Iter<'l, Segment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_style::PALETTE;

    #[test]
    fn spacing_for_common_lengths() {
        assert_eq!(bead_spacing(0), None);
        assert_eq!(bead_spacing(1), Some(14));
        assert_eq!(bead_spacing(2), Some(9));
        assert_eq!(bead_spacing(6), Some(4));
        assert_eq!(bead_spacing(13), Some(2));
        assert_eq!(bead_spacing(20), Some(2));
        assert_eq!(bead_spacing(100), Some(2));
    }

    #[test]
    fn targets_include_dropped_positions() {
        assert_eq!(bead_targets(0).count(), 0);
        assert_eq!(bead_targets(2).collect::<Vec<_>>(), vec![9, 18]);
        let long: Vec<_> = bead_targets(20).collect();
        assert_eq!(long.first(), Some(&2));
        assert_eq!(long.last(), Some(&40));
    }

    #[test]
    fn bead_slot_skips_position_zero() {
        assert_eq!(bead_slot(0, 9), None);
        assert_eq!(bead_slot(9, 9), Some(0));
        assert_eq!(bead_slot(10, 9), None);
        assert_eq!(bead_slot(27, 9), Some(2));
    }

    #[test]
    fn single_glyph_sits_in_the_middle() {
        let layout = compute_layout(&[], "A");
        assert_eq!(layout.beads().collect::<Vec<_>>(), vec![(14, "A")]);
    }

    #[test]
    fn three_glyphs_use_every_seventh_position() {
        let layout = compute_layout(&[], "abc");
        assert_eq!(layout.spacing(), Some(7));
        assert_eq!(
            layout.beads().collect::<Vec<_>>(),
            vec![(7, "a"), (14, "b"), (21, "c")]
        );
        assert!(layout.dropped_glyphs().is_empty());
    }

    #[test]
    fn bands_cycle_around_beads() {
        let pattern = [PALETTE[0].clone(), PALETTE[6].clone(), PALETTE[2].clone()];
        let layout = compute_layout(&pattern, "A");
        // Position 14 is the bead; its pattern color is skipped, not shifted.
        assert_eq!(layout[13].color(), Some(pattern[13 % 3].value()));
        assert_eq!(layout[14].glyph(), Some("A"));
        assert_eq!(layout[15].color(), Some(pattern[15 % 3].value()));
    }

    #[test]
    fn thirteen_glyphs_all_fit() {
        let layout = compute_layout(&[], "abcdefghijklm");
        assert_eq!(layout.spacing(), Some(2));
        assert_eq!(layout.placed_glyphs().len(), 13);
        assert!(layout.dropped_glyphs().is_empty());
        assert_eq!(layout[26].glyph(), Some("m"));
    }

    #[test]
    fn fourteenth_glyph_is_the_first_dropped() {
        let layout = compute_layout(&[], "abcdefghijklmn");
        assert_eq!(layout.dropped_glyphs(), &["n"]);
        assert_eq!(layout.beads().count(), 13);
    }

    #[test]
    fn layout_borrows_without_copying() {
        let message = String::from("  ok ");
        let pattern = vec![PALETTE[4].clone()];
        let layout = compute_layout(&pattern, &message);
        let glyph = layout[9].glyph().unwrap();
        assert!(std::ptr::eq(glyph.as_ptr(), message[2..].as_ptr()));
    }

    #[test]
    fn indexing_and_get_agree() {
        let layout = compute_layout(&[], "");
        assert_eq!(layout.get(0), Some(&layout[0]));
        assert_eq!(layout.get(TOTAL_SEGMENTS), None);
        assert_eq!((&layout).into_iter().count(), TOTAL_SEGMENTS);
        assert_eq!(layout.as_slice().len(), layout.len());
        assert!(!layout.is_empty());
    }
}
