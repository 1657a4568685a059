//! Symmetric-cipher engine: pluggable block ciphers behind a
//! [`CipherContext`] that applies a mode of operation and a padding scheme
//! to byte buffers, readers and writers.
//!
//! The toolkit is educational. None of the constructions authenticate
//! their output, and no effort is made to resist side channels.

pub mod crypto;

pub use crypto::cipher_context::CipherContext;
pub use crypto::cipher_error::CipherError;
pub use crypto::cipher_traits::{BlockCipher, StreamCipher, SymmetricCipher};
pub use crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
