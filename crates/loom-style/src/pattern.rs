#![forbid(unsafe_code)]

//! Editable band pattern.
//!
//! A [`Pattern`] is the ordered list of swatches a user has picked. It only
//! supports the edits a picker needs: add to the end, remove one entry,
//! undo the last addition, and clear. Layout and instruction code never
//! edits it; they read a `&[Swatch]` snapshot through [`Pattern::as_slice`]
//! or `Deref`.

use std::fmt;
use std::ops::Deref;

use crate::swatch::Swatch;

/// Error returned by fallible pattern edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// `remove_at` was given an index past the end of the pattern.
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Pattern length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "no color at index {index} (pattern has {len})")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Ordered, repeatable sequence of chosen swatches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pattern {
    swatches: Vec<Swatch>,
}

impl Pattern {
    /// Create an empty pattern.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            swatches: Vec::new(),
        }
    }

    /// Append a swatch. Duplicates are allowed.
    pub fn push(&mut self, swatch: Swatch) {
        self.swatches.push(swatch);
    }

    /// Remove and return the swatch at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Swatch, PatternError> {
        let len = self.swatches.len();
        if index >= len {
            return Err(PatternError::IndexOutOfRange { index, len });
        }
        Ok(self.swatches.remove(index))
    }

    /// Drop the most recently added swatch, if any.
    pub fn undo_last(&mut self) -> Option<Swatch> {
        self.swatches.pop()
    }

    /// Remove every swatch.
    pub fn clear(&mut self) {
        self.swatches.clear();
    }

    /// Borrow the current snapshot.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Swatch names in pattern order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.swatches.iter().map(Swatch::name)
    }
}

impl Deref for Pattern {
    type Target = [Swatch];

    fn deref(&self) -> &[Swatch] {
        &self.swatches
    }
}

impl From<Vec<Swatch>> for Pattern {
    fn from(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }
}

impl FromIterator<Swatch> for Pattern {
    fn from_iter<I: IntoIterator<Item = Swatch>>(iter: I) -> Self {
        Self {
            swatches: iter.into_iter().collect(),
        }
    }
}

impl Extend<Swatch> for Pattern {
    fn extend<I: IntoIterator<Item = Swatch>>(&mut self, iter: I) {
        self.swatches.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}
