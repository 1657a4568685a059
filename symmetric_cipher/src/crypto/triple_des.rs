use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use crate::crypto::des::{DES, DES_BLOCK_SIZE};

pub const TRIPLE_DES_KEY_SIZE: usize = 24;

/// EDE composition of three independently keyed [`DES`] instances.
///
/// The 24-byte key splits as K1 || K2 || K3;
/// `encrypt = E_K3 . D_K2 . E_K1` and `decrypt = D_K1 . E_K2 . D_K3`.
/// Keying all three layers identically collapses the chain to single DES.
#[derive(Clone, Default)]
pub struct TripleDes {
    inner: DES,
    middle: DES,
    outer: DES,
}

impl TripleDes {
    pub fn new() -> Self {
        TripleDes::default()
    }
}

impl SymmetricCipher for TripleDes {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != TRIPLE_DES_KEY_SIZE {
            return Err(CipherError::InvalidKeySize {
                cipher: "TripleDES",
                expected: "24",
                actual: key.len(),
            });
        }
        self.inner.set_key(&key[0..8])?;
        self.middle.set_key(&key[8..16])?;
        self.outer.set_key(&key[16..24])?;
        Ok(())
    }
}

impl BlockCipher for TripleDes {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stage = self.inner.encrypt_block(block)?;
        let stage = self.middle.decrypt_block(&stage)?;
        self.outer.encrypt_block(&stage)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let stage = self.outer.decrypt_block(block)?;
        let stage = self.middle.encrypt_block(&stage)?;
        self.inner.decrypt_block(&stage)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
