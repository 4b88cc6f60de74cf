#![forbid(unsafe_code)]

//! Numbered loom instructions.
//!
//! The text is assembled from fixed lines in a fixed order:
//!
//! ```text
//! 1. <band pattern, or a prompt to pick colors>
//! 2. <spell the message>        | 2. <optional-beads hint>
//! 3. <space beads evenly>       |
//!
//! Extra Notes:                  (only with a note)
//! <note>
//! ```
//!
//! Step "2." is shared by the two message branches; exactly one of them is
//! emitted.

use std::fmt::Write as _;

use loom_core::Message;
use loom_style::Swatch;

/// Returned when there are no colors, no message, and no note.
pub const PLACEHOLDER: &str =
    "Add some colors and a bead message to see easy loom instructions here.";

/// Joins color names in the band step.
pub const NAME_SEPARATOR: &str = " → ";

const CHOOSE_COLORS: &str = "1. Choose some band colors above to create your pattern.\n";
const SPACE_EVENLY: &str =
    "3. Space the beads evenly along the bracelet so the word is centered on the wrist.\n";
const OPTIONAL_BEADS: &str = "2. Add letter beads if you want to spell a name or message.\n";
const NOTES_HEADER: &str = "\nExtra Notes:\n";

/// Build the instruction text for a design.
///
/// `message` and `note` are trimmed independently. Never fails; the note is
/// appended verbatim after trimming, so it may itself contain line breaks.
#[must_use]
pub fn compute_instructions(pattern: &[Swatch], message: &str, note: &str) -> String {
    let message = Message::new(message);
    let note = note.trim();

    if pattern.is_empty() && message.is_empty() && note.is_empty() {
        tracing::trace!("no inputs; returning placeholder");
        return PLACEHOLDER.to_string();
    }

    let mut text = String::new();

    if pattern.is_empty() {
        text.push_str(CHOOSE_COLORS);
    } else {
        text.push_str("1. Make your band pattern by repeating: ");
        for (idx, swatch) in pattern.iter().enumerate() {
            if idx > 0 {
                text.push_str(NAME_SEPARATOR);
            }
            text.push_str(swatch.name());
        }
        text.push_str(".\n");
    }

    if message.is_empty() {
        text.push_str(OPTIONAL_BEADS);
    } else {
        // Writing to a String cannot fail.
        let _ = writeln!(
            text,
            "2. Spell out the bead message \"{message}\" using letter beads."
        );
        text.push_str(SPACE_EVENLY);
    }

    if !note.is_empty() {
        text.push_str(NOTES_HEADER);
        text.push_str(note);
    }

    tracing::debug!(
        colors = pattern.len(),
        has_message = !message.is_empty(),
        has_note = !note.is_empty(),
        bytes = text.len(),
        "instructions built"
    );
    text
}
