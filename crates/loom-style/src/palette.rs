#![forbid(unsafe_code)]

//! Built-in swatch catalog.

use crate::swatch::Swatch;

pub use loom_core::FALLBACK_BAND;

/// The selectable band colors, in display order.
pub static PALETTE: [Swatch; 12] = [
    Swatch::from_static("Hot Pink", "#ff4f9a"),
    Swatch::from_static("Bubblegum", "#ff8ad9"),
    Swatch::from_static("Sunshine", "#ffd54a"),
    Swatch::from_static("Peach", "#ffb26b"),
    Swatch::from_static("Lime", "#a8e676"),
    Swatch::from_static("Mint", "#74e0c4"),
    Swatch::from_static("Sky", "#7ecbff"),
    Swatch::from_static("Lilac", "#b39dff"),
    Swatch::from_static("Purple", "#9b5bff"),
    Swatch::from_static("Midnight", "#2c3e50"),
    Swatch::from_static("White", "#ffffff"),
    Swatch::from_static("Black", "#000000"),
];

/// Look up a catalog swatch by name, ignoring case and surrounding spaces.
#[must_use]
pub fn find_swatch(name: &str) -> Option<&'static Swatch> {
    let name = name.trim();
    PALETTE
        .iter()
        .find(|swatch| swatch.name().eq_ignore_ascii_case(name))
}
