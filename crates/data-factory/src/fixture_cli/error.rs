//! Error types for the fixture generator binary.

use thiserror::Error;

use crate::error::VocabularyError;

/// Errors surfaced while configuring and running fixture generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Settings could not be loaded from flags, files or the environment.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// A replacement vocabulary table could not be loaded.
    #[error("vocabulary error: {source}")]
    Vocabulary {
        /// Underlying vocabulary error.
        #[from]
        #[source]
        source: VocabularyError,
    },
    /// A fixture could not be encoded as JSON.
    #[error("failed to serialise fixture: {message}")]
    Serialize {
        /// Description of the encoding failure.
        message: String,
    },
    /// Output could not be written.
    #[error("failed to write fixtures: {message}")]
    Output {
        /// Description of the I/O failure.
        message: String,
    },
}
