#![forbid(unsafe_code)]

//! Owned design snapshot.

use loom_layout::{Layout, compute_layout};
use loom_style::{Pattern, Swatch};
use loom_text::{compute_instructions, pattern_summary, preview_placeholder};

/// Everything a user has entered: pattern, bead message, and note.
///
/// Each accessor recomputes from scratch; nothing is cached, so editing a
/// field is always reflected on the next call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Design {
    /// Chosen band colors, in order.
    pub pattern: Pattern,
    /// Raw bead message (trimmed on use).
    pub message: String,
    /// Raw free-text note (trimmed on use).
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl Design {
    /// Create an empty design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<Pattern>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Append one swatch to the pattern.
    #[must_use]
    pub fn swatch(mut self, swatch: Swatch) -> Self {
        self.pattern.push(swatch);
        self
    }

    /// Set the bead message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Ring layout for the current pattern and message.
    #[must_use]
    pub fn layout(&self) -> Layout<'_> {
        compute_layout(&self.pattern, &self.message)
    }

    /// Instruction text for the current pattern, message, and note.
    #[must_use]
    pub fn instructions(&self) -> String {
        compute_instructions(&self.pattern, &self.message, &self.note)
    }

    /// Text to show instead of the ring, if the design is blank.
    #[must_use]
    pub fn preview_placeholder(&self) -> Option<&'static str> {
        preview_placeholder(&self.pattern, &self.message)
    }

    /// One-line pattern description.
    #[must_use]
    pub fn pattern_summary(&self) -> String {
        pattern_summary(&self.pattern)
    }
}
