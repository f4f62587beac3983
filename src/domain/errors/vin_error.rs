//! VIN validation error types.

use thiserror::Error;

/// VIN validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VinError {
    /// Input does not have exactly 17 characters.
    #[error("VIN must be 17 characters, got {length}")]
    InvalidLength {
        /// Character count of the rejected input.
        length: usize,
    },

    /// Input contains a character that cannot appear in a VIN.
    #[error("VIN contains invalid character {character:?}")]
    InvalidCharacter {
        /// First offending character.
        character: char,
    },
}
