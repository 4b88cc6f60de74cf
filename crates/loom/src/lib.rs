#![forbid(unsafe_code)]

//! Rainbow loom public facade.
//!
//! Re-exports the layout engine, the instruction generator, and the color
//! types, and adds [`Design`], an owned snapshot of everything a user has
//! entered.
//!
//! # Example
//! ```
//! use loom::prelude::*;
//!
//! let mut design = Design::new();
//! design.pattern.push(PALETTE[0].clone());
//! design.message = "Hi".into();
//!
//! let layout = design.layout();
//! assert_eq!(layout.beads().count(), 2);
//! assert!(design.instructions().contains("Hot Pink"));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use loom_core::{
    FALLBACK_BAND, MAX_MESSAGE_CHARS, MIN_BEAD_SPACING, Message, TOTAL_SEGMENTS, glyphs,
};

// --- Style re-exports ------------------------------------------------------

pub use loom_style::{
    Color, ColorParseError, ColorProfile, PALETTE, Pattern, PatternError, Rgb, Swatch, find_swatch,
};

// --- Layout and text re-exports --------------------------------------------

pub use loom_layout::{Layout, Segment, SegmentKind, bead_spacing, bead_targets, compute_layout};
pub use loom_text::{PLACEHOLDER, compute_instructions, pattern_summary, preview_placeholder};

mod design;

pub use design::Design;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for loom front ends.
///
/// The layout and instruction functions never fail; these come from the
/// edges: parsing colors, editing patterns, looking up catalog names, and
/// writing output.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing output.
    Io(std::io::Error),
    /// A color encoding could not be parsed.
    Color(ColorParseError),
    /// A pattern edit was rejected.
    Pattern(PatternError),
    /// No catalog swatch has this name.
    UnknownSwatch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Color(err) => write!(f, "{err}"),
            Self::Pattern(err) => write!(f, "{err}"),
            Self::UnknownSwatch(name) => write!(f, "unknown color: {name:?}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Pattern(err) => Some(err),
            Self::UnknownSwatch(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

/// Standard result type for loom APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Look up a catalog swatch, turning a miss into [`Error::UnknownSwatch`].
pub fn swatch_named(name: &str) -> Result<&'static Swatch> {
    find_swatch(name).ok_or_else(|| Error::UnknownSwatch(name.trim().to_string()))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Design, Error, Layout, PALETTE, Pattern, Result, Segment, SegmentKind, Swatch,
        TOTAL_SEGMENTS, compute_instructions, compute_layout, find_swatch,
    };

    pub use crate::{core, layout, style, text};
}

pub use loom_core as core;
pub use loom_layout as layout;
pub use loom_style as style;
pub use loom_text as text;
