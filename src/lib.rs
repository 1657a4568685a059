//! cryptolab: a didactic cryptography toolkit.
//!
//! Re-exports the member crates and offers a constructor-time algorithm
//! selector for building keyed block-cipher backends. Everything here is
//! educational; nothing authenticates its output.

pub use dh_crypto;
pub use loki97_crypto;
pub use symmetric_cipher;

use loki97_crypto::Loki97Cipher;
use symmetric_cipher::crypto::deal::Deal;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDes;
use symmetric_cipher::{BlockCipher, CipherError, SymmetricCipher};

/// The block-cipher backends the toolkit ships.
///
/// Key length selects the DEAL and LOKI97 variants (16, 24 or 32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Des,
    TripleDes,
    Deal,
    Loki97,
}

/// Build a keyed backend for `algorithm`, ready to wrap in a
/// [`symmetric_cipher::CipherContext`].
pub fn create_cipher(
    algorithm: Algorithm,
    key: &[u8],
) -> Result<Box<dyn BlockCipher + Send + Sync>, CipherError> {
    match algorithm {
        Algorithm::Des => {
            let mut cipher = DES::default();
            cipher.set_key(key)?;
            Ok(Box::new(cipher))
        }
        Algorithm::TripleDes => {
            let mut cipher = TripleDes::new();
            cipher.set_key(key)?;
            Ok(Box::new(cipher))
        }
        Algorithm::Deal => {
            let mut cipher = Deal::new();
            cipher.set_key(key)?;
            Ok(Box::new(cipher))
        }
        Algorithm::Loki97 => {
            let mut cipher = Loki97Cipher::new();
            cipher.set_key(key)?;
            Ok(Box::new(cipher))
        }
    }
}
