//! Error taxonomy shared by the cipher backends and the context engine.

use thiserror::Error;

/// Errors surfaced by cipher backends and by [`CipherContext`].
///
/// Configuration errors (`InvalidKeySize`, `InvalidIv`) are reported before
/// any data is touched. A padding mismatch on decryption is not an error:
/// the raw decrypted bytes are handed back unchanged.
///
/// [`CipherContext`]: crate::crypto::cipher_context::CipherContext
#[derive(Debug, Error)]
pub enum CipherError {
    /// Key length does not match what the chosen cipher accepts.
    #[error("{cipher} key must be {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Name of the rejecting cipher.
        cipher: &'static str,
        /// Accepted length(s), human readable.
        expected: &'static str,
        /// Length that was supplied.
        actual: usize,
    },

    /// IV missing for a mode that needs one, supplied for ECB, or of the
    /// wrong length.
    #[error("invalid iv: {reason}")]
    InvalidIv {
        /// What the validation found.
        reason: String,
    },

    /// Block argument length differs from the cipher block size.
    #[error("invalid block size: expected {expected} bytes, got {actual}")]
    InvalidBlockSize {
        /// The cipher's block size.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Ciphertext length is not a multiple of the block size.
    #[error("ciphertext length {len} is not a multiple of the {block_size}-byte block size")]
    LengthError {
        /// Offending input length.
        len: usize,
        /// The cipher's block size.
        block_size: usize,
    },

    /// A block operation was invoked before the key schedule was set.
    #[error("cipher key schedule has not been set")]
    StateError,

    /// Propagated reader/writer failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
