#![forbid(unsafe_code)]

//! Bead messages.
//!
//! A message is the short word or name spelled out in letter beads. Every
//! consumer sees the *trimmed* text; surrounding whitespace never becomes a
//! bead and never shows up in instructions.
//!
//! A "character" here is an extended grapheme cluster, so `"é"` written with
//! a combining accent or an emoji with a skin-tone modifier is one bead.
//!
//! # Example
//! ```
//! use loom_core::Message;
//!
//! let msg = Message::new("  Hi!  ");
//! assert_eq!(msg.as_str(), "Hi!");
//! assert_eq!(msg.glyphs(), vec!["H", "i", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Longest message the input surface accepts, in characters.
///
/// The layout itself has no upper bound; this cap belongs to whatever edits
/// the message, see [`Message::capped`].
pub const MAX_MESSAGE_CHARS: usize = 20;

/// Split text into user-perceived characters, in order.
#[must_use]
pub fn glyphs(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// A trimmed bead message borrowed from caller-owned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Message<'a> {
    text: &'a str,
}

impl<'a> Message<'a> {
    /// Trim `raw` and wrap it. No length cap is applied.
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { text: raw.trim() }
    }

    /// Keep at most [`MAX_MESSAGE_CHARS`] characters of `raw`, then trim.
    ///
    /// The cap applies to the raw input, as a `maxlength` text field would,
    /// so leading spaces count against it.
    #[must_use]
    pub fn capped(raw: &'a str) -> Self {
        let end = raw
            .grapheme_indices(true)
            .nth(MAX_MESSAGE_CHARS)
            .map_or(raw.len(), |(idx, _)| idx);
        Self::new(&raw[..end])
    }

    /// The trimmed text.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Whether the trimmed message is empty (no beads).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The message's characters in order.
    #[must_use]
    pub fn glyphs(&self) -> Vec<&'a str> {
        glyphs(self.text)
    }

    /// Number of characters in the trimmed message.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.text.graphemes(true).count()
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
