//! Error types for geohash operations.
//!
//! Only decoding can fail: encoding accepts any coordinate and any length.

use thiserror::Error;

/// Error type for geohash operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeohashError {
    /// A character outside the base-32 alphabet was found while decoding.
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index within the hash.
        position: usize,
    },
}

/// Result type alias for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;
