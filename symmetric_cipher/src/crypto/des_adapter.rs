use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use crate::crypto::des::DES;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use std::cell::RefCell;

thread_local! {
    // One DES instance per thread, re-keyed for each round transformation.
    static ROUND_DES: RefCell<DES> = RefCell::new(DES::default());
}

/// Uses DES encryption of a 64-bit half as a Feistel round transformation.
pub struct DesAdapter;

impl DesAdapter {
    pub fn new() -> Self {
        DesAdapter
    }
}

impl Default for DesAdapter {
    fn default() -> Self {
        DesAdapter::new()
    }
}

impl EncryptionTransformation for DesAdapter {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        ROUND_DES.with(|cell| {
            let mut des = cell.borrow_mut();
            des.set_key(round_key)?;
            des.encrypt_block(half_block)
        })
    }
}
