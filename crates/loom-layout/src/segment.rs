#![forbid(unsafe_code)]

//! Ring segments.

use std::fmt;

/// What occupies one ring position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum SegmentKind<'a> {
    /// A letter bead carrying one message character.
    Bead {
        /// The character, as a grapheme cluster.
        glyph: &'a str,
    },
    /// A plain band in a pattern (or fallback) color.
    Band {
        /// Color encoding, verbatim from the swatch.
        color: &'a str,
    },
}

/// One position on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<'a> {
    /// 0-based ring position. Only meaningful as an ordering/render key.
    pub position: usize,
    /// Bead or band payload.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: SegmentKind<'a>,
}

impl<'a> Segment<'a> {
    /// Whether this segment is a letter bead.
    #[inline]
    #[must_use]
    pub const fn is_bead(&self) -> bool {
        matches!(self.kind, SegmentKind::Bead { .. })
    }

    /// The bead character, if this is a bead.
    #[inline]
    #[must_use]
    pub const fn glyph(&self) -> Option<&'a str> {
        match self.kind {
            SegmentKind::Bead { glyph } => Some(glyph),
            SegmentKind::Band { .. } => None,
        }
    }

    /// The band color encoding, if this is a band.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<&'a str> {
        match self.kind {
            SegmentKind::Band { color } => Some(color),
            SegmentKind::Bead { .. } => None,
        }
    }

    /// Stable render key such as `bead-9` or `band-0`.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.is_bead() { "bead" } else { "band" };
        write!(f, "{tag}-{}", self.position)
    }
}
