use thiserror::Error;

/// Errors from key agreement and key derivation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DhError {
    /// Group parameters failed validation.
    #[error("invalid group parameters: {reason}")]
    InvalidParameters {
        /// What the validation found.
        reason: &'static str,
    },

    /// A private or public value fell outside its permitted range.
    #[error("{role} value is out of range")]
    KeyOutOfRange {
        /// Which value was rejected.
        role: &'static str,
    },

    /// A derived key longer than the hash output was requested.
    #[error("derived key length {requested} exceeds the {max}-byte digest")]
    KeySizeTooLarge {
        /// Requested key length.
        requested: usize,
        /// Digest size in bytes.
        max: usize,
    },
}
