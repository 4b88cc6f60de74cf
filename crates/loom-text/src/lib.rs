#![forbid(unsafe_code)]

//! Human-readable text for loom bracelets.
//!
//! - [`compute_instructions`] - numbered steps to reproduce a design by hand
//! - [`preview_placeholder`] - what to show instead of an empty preview
//! - [`pattern_summary`] - one-line description of the chosen pattern
//!
//! None of these look at the computed layout; they read the same inputs
//! the layout is built from.
//!
//! # Example
//! ```
//! use loom_style::PALETTE;
//! use loom_text::compute_instructions;
//!
//! let text = compute_instructions(&PALETTE[..2], "Hi", "");
//! assert!(text.starts_with("1. Make your band pattern by repeating: Hot Pink → Bubblegum.\n"));
//! assert!(text.contains("\"Hi\""));
//! ```

pub mod caption;
pub mod instructions;

pub use caption::{EMPTY_PREVIEW, pattern_summary, preview_placeholder};
pub use instructions::{NAME_SEPARATOR, PLACEHOLDER, compute_instructions};
