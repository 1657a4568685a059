use crate::crypto::cipher_error::CipherError;

/// A cipher that is keyed once and then used repeatedly.
pub trait SymmetricCipher {
    /// Install the round-key schedule. The schedule is read-only after this
    /// call returns.
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

/// A keyed permutation over fixed-size blocks.
///
/// `encrypt_block` and `decrypt_block` are pure functions of the stored
/// schedule and their input, so a keyed instance may be shared across
/// threads. Calling either before [`SymmetricCipher::set_key`] yields
/// [`CipherError::StateError`]; a block whose length differs from
/// [`BlockCipher::block_size`] yields [`CipherError::InvalidBlockSize`].
pub trait BlockCipher: SymmetricCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn block_size(&self) -> usize;
}

/// A stateful keystream generator applied by XOR.
pub trait StreamCipher {
    /// Process `data`, advancing the internal state. Splitting the input
    /// across calls yields the same bytes as a single call.
    fn process(&mut self, data: &[u8]) -> Vec<u8>;
}
