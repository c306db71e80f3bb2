//! Input validation errors.

use thiserror::Error;

/// Why a piece of text could not be read as a height sequence.
///
/// Every variant is user-correctable; the `Display` text is what the error
/// banner shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeightsError {
    /// The text is neither an array literal nor a comma-separated list.
    #[error("Invalid input: {reason}")]
    InvalidFormat {
        /// What the reader tripped over
        reason: String,
    },

    /// A value is not a finite number.
    #[error("All values must be numbers (found `{token}` at index {index})")]
    NonNumeric {
        /// Position in the sequence
        index: usize,
        /// The offending token as written
        token: String,
    },

    /// A value is below zero.
    #[error("Heights must be >= 0 (found {value} at index {index})")]
    NegativeHeight {
        /// Position in the sequence
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A value has a fractional part; the chart draws whole units only.
    #[error("Please use integer heights (units). Found {value} at index {index}")]
    NonIntegerHeight {
        /// Position in the sequence
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A whole number too large for a column height.
    #[error("Height {value} at index {index} exceeds the maximum of {max}")]
    HeightOutOfRange {
        /// Position in the sequence
        index: usize,
        /// The offending value
        value: f64,
        /// Largest accepted height
        max: u32,
    },
}

impl HeightsError {
    /// Index of the offending value, if the error is tied to one.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidFormat { .. } => None,
            Self::NonNumeric { index, .. }
            | Self::NegativeHeight { index, .. }
            | Self::NonIntegerHeight { index, .. }
            | Self::HeightOutOfRange { index, .. } => Some(*index),
        }
    }
}
