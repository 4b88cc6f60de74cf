#![forbid(unsafe_code)]

//! Color parsing, profiles, and downgrade utilities.
//!
//! Band colors travel through layouts as encoding strings. Renderers parse
//! them here and downgrade to whatever the output device supports.

use std::fmt;

/// Error returned when a color encoding cannot be parsed as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// The encoding was empty (or just `#`).
    Empty,
    /// Hex digits present, but not 3 or 6 of them.
    InvalidLength,
    /// A character outside `0-9a-fA-F`.
    InvalidHex,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "empty color encoding",
            Self::InvalidLength => "hex color must have 3 or 6 digits",
            Self::InvalidHex => "invalid hex digit in color encoding",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Output color profile used for downgrade decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
    /// Full 24-bit RGB color.
    TrueColor,
}

impl ColorProfile {
    /// Choose the best available profile from detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. NO_COLOR).
    #[must_use]
    pub const fn from_flags(true_color: bool, colors_256: bool, no_color: bool) -> Self {
        if no_color {
            Self::Mono
        } else if true_color {
            Self::TrueColor
        } else if colors_256 {
            Self::Ansi256
        } else {
            Self::Ansi16
        }
    }

    /// Parse a profile name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mono" | "none" => Some(Self::Mono),
            "16" | "ansi16" => Some(Self::Ansi16),
            "256" | "ansi256" => Some(Self::Ansi256),
            "truecolor" | "24bit" | "rgb" => Some(Self::TrueColor),
            _ => None,
        }
    }
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb`, or either form without the leading `#`.
    pub fn from_hex(encoding: &str) -> Result<Self, ColorParseError> {
        let digits = encoding.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let nibbles = digits
            .bytes()
            .map(|c| hex_nibble(c).ok_or(ColorParseError::InvalidHex))
            .collect::<Result<Vec<u8>, _>>()?;

        match nibbles.as_slice() {
            // #rgb expands each digit: 0xd -> 0xdd
            &[r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        let luma = 2126 * self.r as u32 + 7152 * self.g as u32 + 722 * self.b as u32;
        ((luma + 5000) / 10_000) as u8
    }
}

const fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    /// Black (index 0).
    Black = 0,
    /// Red (index 1).
    Red = 1,
    /// Green (index 2).
    Green = 2,
    /// Yellow (index 3).
    Yellow = 3,
    /// Blue (index 4).
    Blue = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Cyan (index 6).
    Cyan = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright red (index 9).
    BrightRed = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright yellow (index 11).
    BrightYellow = 11,
    /// Bright blue (index 12).
    BrightBlue = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright cyan (index 14).
    BrightCyan = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

impl Ansi16 {
    const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }
}

/// Monochrome output selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonoColor {
    /// Black (dark).
    Black,
    /// White (light).
    White,
}

/// A color value at varying fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// True-color RGB value.
    Rgb(Rgb),
    /// 256-color palette index.
    Ansi256(u8),
    /// Standard 16-color ANSI value.
    Ansi16(Ansi16),
    /// Monochrome (black or white).
    Mono(MonoColor),
}

impl Color {
    /// Create a true-color RGB value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Parse a hex encoding into a true-color value.
    pub fn from_hex(encoding: &str) -> Result<Self, ColorParseError> {
        Rgb::from_hex(encoding).map(Self::Rgb)
    }

    /// Convert this color to an RGB triplet regardless of its fidelity level.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Ansi256(idx) => ansi256_to_rgb(idx),
            Self::Ansi16(color) => ANSI16_PALETTE[color.as_u8() as usize],
            Self::Mono(MonoColor::Black) => Rgb::new(0, 0, 0),
            Self::Mono(MonoColor::White) => Rgb::new(255, 255, 255),
        }
    }

    /// Downgrade this color to fit the given color profile.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> Self {
        let rgb = self.to_rgb();
        match (profile, self) {
            (ColorProfile::TrueColor, _) => self,
            (_, Self::Mono(_)) => self,
            (ColorProfile::Ansi256, Self::Rgb(_)) => Self::Ansi256(rgb_to_256(rgb.r, rgb.g, rgb.b)),
            (ColorProfile::Ansi256, _) => self,
            (ColorProfile::Ansi16, Self::Ansi16(_)) => self,
            (ColorProfile::Ansi16, _) => Self::Ansi16(rgb_to_ansi16(rgb.r, rgb.g, rgb.b)),
            (ColorProfile::Mono, _) => Self::Mono(rgb_to_mono(rgb.r, rgb.g, rgb.b)),
        }
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(205, 0, 0),     // Red
    Rgb::new(0, 205, 0),     // Green
    Rgb::new(205, 205, 0),   // Yellow
    Rgb::new(0, 0, 238),     // Blue
    Rgb::new(205, 0, 205),   // Magenta
    Rgb::new(0, 205, 205),   // Cyan
    Rgb::new(229, 229, 229), // White
    Rgb::new(127, 127, 127), // Bright Black
    Rgb::new(255, 0, 0),     // Bright Red
    Rgb::new(0, 255, 0),     // Bright Green
    Rgb::new(255, 255, 0),   // Bright Yellow
    Rgb::new(92, 92, 255),   // Bright Blue
    Rgb::new(255, 0, 255),   // Bright Magenta
    Rgb::new(0, 255, 255),   // Bright Cyan
    Rgb::new(255, 255, 255), // Bright White
];

/// Convert an RGB color to the nearest ANSI 256-color index.
#[must_use]
pub fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r - 8) / 10).min(23),
        };
    }

    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Nearest level of the 6×6×6 cube `[0, 95, 135, 175, 215, 255]`, split at
/// the midpoints between levels.
fn cube_index(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => (v - 35) / 40,
    }
}

/// Convert an ANSI 256-color index to its RGB representation.
#[must_use]
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    match index {
        0..=15 => ANSI16_PALETTE[index as usize],
        232..=255 => {
            let gray = 8 + 10 * (index - 232);
            Rgb::new(gray, gray, gray)
        }
        _ => {
            let idx = index - 16;
            Rgb::new(
                LEVELS[(idx / 36) as usize],
                LEVELS[((idx / 6) % 6) as usize],
                LEVELS[(idx % 6) as usize],
            )
        }
    }
}

/// Convert an RGB color to the nearest ANSI 16-color value.
#[must_use]
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> Ansi16 {
    let target = Rgb::new(r, g, b);
    let nearest = ANSI16_PALETTE
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| weighted_distance(target, **candidate))
        .map_or(0, |(idx, _)| idx);
    Ansi16::ALL[nearest]
}

/// Convert an RGB color to monochrome (black or white) based on luminance.
#[must_use]
pub fn rgb_to_mono(r: u8, g: u8, b: u8) -> MonoColor {
    if Rgb::new(r, g, b).luminance_u8() >= 128 {
        MonoColor::White
    } else {
        MonoColor::Black
    }
}

fn weighted_distance(a: Rgb, b: Rgb) -> u64 {
    let sq = |x: u8, y: u8| {
        let d = x as i64 - y as i64;
        (d * d) as u64
    };
    2126 * sq(a.r, b.r) + 7152 * sq(a.g, b.g) + 722 * sq(a.b, b.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Hex parsing ---

    #[test]
    fn parses_long_hex() {
        assert_eq!(Rgb::from_hex("#ff4f9a"), Ok(Rgb::new(255, 79, 154)));
        assert_eq!(Rgb::from_hex("2C3E50"), Ok(Rgb::new(0x2c, 0x3e, 0x50)));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Rgb::from_hex("#ddd"), Ok(Rgb::new(221, 221, 221)));
        assert_eq!(Rgb::from_hex("#f0a"), Ok(Rgb::new(255, 0, 170)));
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(Rgb::from_hex(""), Err(ColorParseError::Empty));
        assert_eq!(Rgb::from_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(Rgb::from_hex("#abcd"), Err(ColorParseError::InvalidLength));
        assert_eq!(Rgb::from_hex("#ggg"), Err(ColorParseError::InvalidHex));
        assert_eq!(Rgb::from_hex("pink"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn hex_round_trips_through_lowercase() {
        let rgb = Rgb::from_hex("#7ECBFF").unwrap();
        assert_eq!(rgb.to_hex(), "#7ecbff");
    }

    #[test]
    fn parse_error_messages() {
        assert_eq!(ColorParseError::Empty.to_string(), "empty color encoding");
        assert!(ColorParseError::InvalidLength.to_string().contains("3 or 6"));
    }

    // --- ColorProfile ---

    #[test]
    fn profile_from_flags_prefers_mono() {
        assert_eq!(ColorProfile::from_flags(true, true, true), ColorProfile::Mono);
        assert_eq!(
            ColorProfile::from_flags(true, false, false),
            ColorProfile::TrueColor
        );
        assert_eq!(
            ColorProfile::from_flags(false, true, false),
            ColorProfile::Ansi256
        );
        assert_eq!(
            ColorProfile::from_flags(false, false, false),
            ColorProfile::Ansi16
        );
    }

    #[test]
    fn profile_names() {
        assert_eq!(ColorProfile::from_name("TrueColor"), Some(ColorProfile::TrueColor));
        assert_eq!(ColorProfile::from_name("256"), Some(ColorProfile::Ansi256));
        assert_eq!(ColorProfile::from_name(" 16 "), Some(ColorProfile::Ansi16));
        assert_eq!(ColorProfile::from_name("mono"), Some(ColorProfile::Mono));
        assert_eq!(ColorProfile::from_name("sepia"), None);
    }

    // --- Downgrade ---

    #[test]
    fn truecolor_passthrough() {
        let color = Color::rgb(12, 34, 56);
        assert_eq!(color.downgrade(ColorProfile::TrueColor), color);
    }

    #[test]
    fn hot_pink_to_256_uses_cube() {
        assert_eq!(rgb_to_256(255, 79, 154), 16 + 36 * 5 + 6 + 2);
    }

    #[test]
    fn fallback_gray_to_256_uses_ramp() {
        assert_eq!(rgb_to_256(221, 221, 221), 253);
        assert_eq!(rgb_to_256(0, 0, 0), 16);
        assert_eq!(rgb_to_256(255, 255, 255), 231);
    }

    #[test]
    fn ansi256_to_rgb_matches_cube_and_ramp() {
        assert_eq!(ansi256_to_rgb(16), Rgb::new(0, 0, 0));
        assert_eq!(ansi256_to_rgb(231), Rgb::new(255, 255, 255));
        assert_eq!(ansi256_to_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(ansi256_to_rgb(9), Rgb::new(255, 0, 0));
    }

    #[test]
    fn rgb_to_ansi16_basics() {
        assert_eq!(rgb_to_ansi16(0, 0, 0), Ansi16::Black);
        assert_eq!(rgb_to_ansi16(255, 0, 0), Ansi16::BrightRed);
        assert_eq!(rgb_to_ansi16(255, 255, 255), Ansi16::BrightWhite);
    }

    #[test]
    fn mono_splits_on_luminance() {
        assert_eq!(rgb_to_mono(0x2c, 0x3e, 0x50), MonoColor::Black);
        assert_eq!(rgb_to_mono(0xdd, 0xdd, 0xdd), MonoColor::White);
    }

    #[test]
    fn downgrade_chain_never_climbs() {
        let pink = Color::rgb(255, 79, 154);
        let c256 = pink.downgrade(ColorProfile::Ansi256);
        assert!(matches!(c256, Color::Ansi256(_)));
        let c16 = c256.downgrade(ColorProfile::Ansi16);
        assert!(matches!(c16, Color::Ansi16(_)));
        assert_eq!(c16.downgrade(ColorProfile::Ansi256), c16);
        let mono = c16.downgrade(ColorProfile::Mono);
        assert!(matches!(mono, Color::Mono(_)));
        assert_eq!(mono.downgrade(ColorProfile::Ansi16), mono);
    }

    #[test]
    fn ansi16_from_u8_bounds() {
        assert_eq!(Ansi16::from_u8(0), Some(Ansi16::Black));
        assert_eq!(Ansi16::from_u8(15), Some(Ansi16::BrightWhite));
        assert_eq!(Ansi16::from_u8(16), None);
        for idx in 0..16 {
            assert_eq!(Ansi16::from_u8(idx).map(Ansi16::as_u8), Some(idx));
        }
    }
}
