#![forbid(unsafe_code)]

//! Core: ring geometry, bead message handling, and logging shims.

pub mod logging;
pub mod message;
pub mod ring;

pub use message::{MAX_MESSAGE_CHARS, Message, glyphs};
pub use ring::{FALLBACK_BAND, MIN_BEAD_SPACING, TOTAL_SEGMENTS, band_index};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace};
