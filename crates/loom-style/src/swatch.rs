#![forbid(unsafe_code)]

//! Named band colors.

use std::borrow::Cow;
use std::fmt;

use crate::color::{ColorParseError, Rgb};

/// A named color encoding offered for band selection.
///
/// The `value` is kept exactly as supplied (for example `#ff4f9a`); layouts
/// carry it through untouched, and only renderers ever parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    name: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl Swatch {
    /// Build a swatch from static strings (usable in constants).
    #[must_use]
    pub const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: Cow::Borrowed(value),
        }
    }

    /// Build a swatch from owned or borrowed strings.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Display label.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color encoding, verbatim.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse the color encoding as hex.
    pub fn rgb(&self) -> Result<Rgb, ColorParseError> {
        Rgb::from_hex(&self.value)
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}
