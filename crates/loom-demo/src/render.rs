#![forbid(unsafe_code)]

//! Terminal and JSON output for a [`Design`].
//!
//! Every ring position is drawn as a two-column cell: bands as a colored
//! block, beads as their glyph padded to the cell width. In monochrome the
//! band's lightness picks between two shade characters instead.

use std::io::{self, Write};

use loom::style::MonoColor;
use loom::{Color, ColorProfile, Design, Layout, PALETTE, Segment, SegmentKind, Swatch};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::ansi;

/// Columns taken by one ring position.
pub const CELL_WIDTH: usize = 2;

const BLOCK: &str = "██";
const SHADE_DARK: &str = "▓▓";
const SHADE_LIGHT: &str = "░░";

/// Parsed form of the fallback band color.
const FALLBACK_COLOR: Color = Color::rgb(0xdd, 0xdd, 0xdd);

/// Parse a band color encoding, falling back to the neutral band color.
pub fn band_color(encoding: &str) -> Color {
    Color::from_hex(encoding).unwrap_or_else(|err| {
        tracing::warn!(encoding, %err, "unparseable band color; using fallback");
        FALLBACK_COLOR
    })
}

fn write_band<W: Write>(w: &mut W, color: Color, profile: ColorProfile) -> io::Result<()> {
    match color.downgrade(profile) {
        Color::Mono(MonoColor::Black) => w.write_all(SHADE_DARK.as_bytes()),
        Color::Mono(MonoColor::White) => w.write_all(SHADE_LIGHT.as_bytes()),
        color => {
            ansi::sgr_fg(w, color)?;
            w.write_all(BLOCK.as_bytes())?;
            ansi::sgr_reset(w)
        }
    }
}

fn write_bead<W: Write>(w: &mut W, glyph: &str) -> io::Result<()> {
    let pad = CELL_WIDTH.saturating_sub(glyph.width());
    write!(w, "{glyph}{:pad$}", "")
}

/// Write one ring position.
pub fn write_segment<W: Write>(
    w: &mut W,
    segment: &Segment<'_>,
    profile: ColorProfile,
) -> io::Result<()> {
    match segment.kind {
        SegmentKind::Bead { glyph } => write_bead(w, glyph),
        SegmentKind::Band { color } => write_band(w, band_color(color), profile),
    }
}

/// Write the whole ring on one line, in position order.
pub fn write_ring<W: Write>(w: &mut W, layout: &Layout<'_>, profile: ColorProfile) -> io::Result<()> {
    for segment in layout {
        write_segment(w, segment, profile)?;
    }
    writeln!(w)
}

/// Write the preview (or its placeholder), pattern summary, and instructions.
pub fn write_design<W: Write>(w: &mut W, design: &Design, profile: ColorProfile) -> io::Result<()> {
    let layout = design.layout();
    match design.preview_placeholder() {
        Some(placeholder) => writeln!(w, "{placeholder}")?,
        None => write_ring(w, &layout, profile)?,
    }
    let dropped = layout.dropped_glyphs();
    if !dropped.is_empty() {
        tracing::info!(
            dropped = dropped.len(),
            "message is longer than the ring has room for; trailing beads left off"
        );
    }
    writeln!(w, "{}", design.pattern_summary())?;
    writeln!(w)?;
    writeln!(w, "{}", design.instructions())
}

fn write_swatch_row<W: Write>(w: &mut W, swatch: &Swatch, profile: ColorProfile) -> io::Result<()> {
    write_band(w, band_color(swatch.value()), profile)?;
    writeln!(w, " {:<10} {}", swatch.name(), swatch.value())
}

/// List the catalog, one swatch per line.
pub fn write_palette<W: Write>(w: &mut W, profile: ColorProfile) -> io::Result<()> {
    for swatch in &PALETTE {
        write_swatch_row(w, swatch, profile)?;
    }
    Ok(())
}

/// Machine-readable view of a design.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub design: &'a Design,
    pub layout: Layout<'a>,
    pub dropped: Vec<&'a str>,
    pub preview_placeholder: Option<&'static str>,
    pub pattern_summary: String,
    pub instructions: String,
}

impl<'a> Report<'a> {
    /// Compute every derived view of `design`.
    #[must_use]
    pub fn new(design: &'a Design) -> Self {
        let layout = design.layout();
        let dropped = layout.dropped_glyphs().to_vec();
        Self {
            design,
            layout,
            dropped,
            preview_placeholder: design.preview_placeholder(),
            pattern_summary: design.pattern_summary(),
            instructions: design.instructions(),
        }
    }
}

/// Write `design` as one pretty-printed JSON document.
pub fn write_json<W: Write>(w: &mut W, design: &Design) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &Report::new(design))?;
    writeln!(w)
}
