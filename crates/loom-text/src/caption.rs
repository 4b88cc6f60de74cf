#![forbid(unsafe_code)]

//! Short captions shown around the bracelet preview.

use loom_core::Message;
use loom_style::Swatch;

/// Shown in place of the ring when there is nothing to preview.
pub const EMPTY_PREVIEW: &str = "Add colors and a message to see your bracelet!";

const NO_COLORS: &str = "No colors yet. Click a color above to start your pattern.";

/// Placeholder to show instead of the ring, if the design is blank.
///
/// A note alone does not count; it never appears on the bracelet.
#[must_use]
pub fn preview_placeholder(pattern: &[Swatch], message: &str) -> Option<&'static str> {
    (pattern.is_empty() && Message::new(message).is_empty()).then_some(EMPTY_PREVIEW)
}

/// One-line description of the chosen pattern.
#[must_use]
pub fn pattern_summary(pattern: &[Swatch]) -> String {
    match pattern.len() {
        0 => NO_COLORS.to_string(),
        len => format!("Pattern length: {len} colors (they'll just repeat along the bracelet)."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_style::PALETTE;

    #[test]
    fn placeholder_only_for_blank_designs() {
        assert_eq!(preview_placeholder(&[], ""), Some(EMPTY_PREVIEW));
        assert_eq!(preview_placeholder(&[], "   "), Some(EMPTY_PREVIEW));
        assert_eq!(preview_placeholder(&[], "Hi"), None);
        assert_eq!(preview_placeholder(&PALETTE[..1], ""), None);
    }

    #[test]
    fn summary_for_empty_pattern() {
        assert_eq!(pattern_summary(&[]), NO_COLORS);
    }

    #[test]
    fn summary_counts_duplicates() {
        let pattern = vec![PALETTE[3].clone(), PALETTE[3].clone()];
        assert_eq!(
            pattern_summary(&pattern),
            "Pattern length: 2 colors (they'll just repeat along the bracelet)."
        );
    }

    #[test]
    fn summary_keeps_plural_for_one_color() {
        assert_eq!(
            pattern_summary(&PALETTE[..1]),
            "Pattern length: 1 colors (they'll just repeat along the bracelet)."
        );
    }
}
