#![forbid(unsafe_code)]

//! Band colors for loom bracelets.
//!
//! - [`Swatch`] - a named color encoding, the unit a pattern is built from
//! - [`PALETTE`] - the built-in swatch catalog
//! - [`Pattern`] - an editable, ordered list of chosen swatches
//! - [`Rgb`] / [`Color`] - parsed colors and terminal downgrade helpers
//!
//! # Example
//! ```
//! use loom_style::{Pattern, find_swatch};
//!
//! let mut pattern = Pattern::new();
//! pattern.push(find_swatch("hot pink").unwrap().clone());
//! pattern.push(find_swatch("Sky").unwrap().clone());
//! assert_eq!(pattern.names().collect::<Vec<_>>(), ["Hot Pink", "Sky"]);
//! ```

pub mod color;
pub mod palette;
pub mod pattern;
pub mod swatch;

pub use color::{Ansi16, Color, ColorParseError, ColorProfile, MonoColor, Rgb};
pub use palette::{FALLBACK_BAND, PALETTE, find_swatch};
pub use pattern::{Pattern, PatternError};
pub use swatch::Swatch;
