#![forbid(unsafe_code)]

//! SGR escape helpers for colored band cells.
//!
//! Pure byte generation; no state tracking. Callers pick the sequence that
//! matches the downgraded [`Color`] variant.

use std::io::{self, Write};

use loom::Color;
use loom::style::MonoColor;

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Write SGR sequence for true color foreground: `CSI 38;2;r;g;b m`
pub fn sgr_fg_rgb<W: Write>(w: &mut W, r: u8, g: u8, b: u8) -> io::Result<()> {
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Write SGR sequence for 256-color foreground: `CSI 38;5;n m`
pub fn sgr_fg_256<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    write!(w, "\x1b[38;5;{index}m")
}

/// Write SGR sequence for 16-color foreground.
///
/// Uses codes 30-37 for normal colors, 90-97 for bright colors.
pub fn sgr_fg_16<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    let code = if index < 8 { 30 + index } else { 90 + index - 8 };
    write!(w, "\x1b[{code}m")
}

/// Write the foreground sequence for `color`.
///
/// Monochrome colors emit nothing: mono output is expressed through glyph
/// choice, not escapes.
pub fn sgr_fg<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    match color {
        Color::Rgb(rgb) => sgr_fg_rgb(w, rgb.r, rgb.g, rgb.b),
        Color::Ansi256(index) => sgr_fg_256(w, index),
        Color::Ansi16(ansi) => sgr_fg_16(w, ansi.as_u8()),
        Color::Mono(MonoColor::Black | MonoColor::White) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom::style::Ansi16;

    fn bytes(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn reset() {
        assert_eq!(bytes(|w| sgr_reset(w)), "\x1b[0m");
    }

    #[test]
    fn truecolor_foreground() {
        assert_eq!(
            bytes(|w| sgr_fg(w, Color::rgb(255, 79, 154))),
            "\x1b[38;2;255;79;154m"
        );
    }

    #[test]
    fn palette_foregrounds() {
        assert_eq!(bytes(|w| sgr_fg(w, Color::Ansi256(204))), "\x1b[38;5;204m");
        assert_eq!(bytes(|w| sgr_fg(w, Color::Ansi16(Ansi16::Red))), "\x1b[31m");
        assert_eq!(
            bytes(|w| sgr_fg(w, Color::Ansi16(Ansi16::BrightWhite))),
            "\x1b[97m"
        );
    }

    #[test]
    fn mono_emits_nothing() {
        assert_eq!(bytes(|w| sgr_fg(w, Color::Mono(MonoColor::White))), "");
    }
}
