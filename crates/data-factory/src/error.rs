//! Error types for the data-factory crate.
//!
//! Every precondition failure raised by the generator is an
//! [`InvalidArgument`]. Checks run before any random draw, so a rejected call
//! leaves the random source untouched. Vocabulary loading has its own
//! [`VocabularyError`].

use std::path::PathBuf;

use thiserror::Error;

/// Which end of a length range failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    /// The lower bound.
    Min,
    /// The upper bound.
    Max,
}

impl std::fmt::Display for LengthBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Min => f.write_str("minimum"),
            Self::Max => f.write_str("maximum"),
        }
    }
}

/// A caller supplied arguments the generator cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A selection pool was empty.
    #[error("item list cannot be empty")]
    EmptyItems,

    /// A length bound was negative.
    #[error("{bound} length cannot be negative (got {value})")]
    NegativeLength {
        /// The offending bound.
        bound: LengthBound,
        /// The value supplied.
        value: i32,
    },

    /// A length range had its maximum below its minimum.
    #[error("maximum length {max} is less than minimum length {min}")]
    InvertedLengthRange {
        /// Requested minimum length.
        min: i32,
        /// Requested maximum length.
        max: i32,
    },

    /// A numeric range had its maximum below its minimum.
    #[error("maximum {max} is less than minimum {min}")]
    InvertedNumberRange {
        /// Requested minimum.
        min: i64,
        /// Requested maximum.
        max: i64,
    },

    /// A date range ended before it started.
    #[error("maximum date {max} is earlier than minimum date {min}")]
    InvertedDateRange {
        /// Requested earliest instant.
        min: String,
        /// Requested latest instant.
        max: String,
    },

    /// The year, month and day do not name a calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-based).
        month: u32,
        /// Requested day of month.
        day: u32,
    },

    /// Applying a day offset left the representable date range.
    #[error("offsetting by {days} days leaves the supported date range")]
    DateOutOfRange {
        /// Offset that overflowed.
        days: i64,
    },

    /// A digit count was negative.
    #[error("digit count cannot be negative (got {digits})")]
    NegativeDigits {
        /// The value supplied.
        digits: i32,
    },
}

/// Errors that can occur when loading a vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The vocabulary file could not be read.
    #[error("failed to read vocabulary file at '{path}': {message}")]
    IoError {
        /// Path to the vocabulary file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The vocabulary JSON is malformed or missing required fields.
    #[error("invalid vocabulary JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// A category the generator queries has no entries.
    #[error("vocabulary category '{category}' is empty")]
    EmptyCategory {
        /// Name of the empty category.
        category: &'static str,
    },

    /// An entry is blank or carries surrounding whitespace.
    #[error("vocabulary category '{category}' has an invalid entry at index {index}: {value:?}")]
    InvalidEntry {
        /// Name of the category holding the entry.
        category: &'static str,
        /// Index of the entry in the category.
        index: usize,
        /// The offending entry.
        value: String,
    },
}
