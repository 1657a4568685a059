use crate::crypto::cipher_error::CipherError;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// A balanced Feistel network over the supplied round transformation.
///
/// No swap is applied after the final round; decryption mirrors the rounds
/// in reverse, so `decrypt(encrypt(x)) == x` for any transformation.
#[derive(Clone)]
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
        }
    }

    pub fn encrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        debug_assert_eq!(block.len() % 2, 0, "block must split into equal halves");

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys.iter().take(self.num_rounds) {
            let feistel_out = self.transformation.transform(&right, round_key)?;
            let new_right = xor_bytes(&left, &feistel_out);
            left = right;
            right = new_right;
        }
        Ok([left, right].concat())
    }

    pub fn decrypt_with_round_keys(
        &self,
        block: &[u8],
        round_keys: &[Vec<u8>],
    ) -> Result<Vec<u8>, CipherError> {
        debug_assert_eq!(block.len() % 2, 0, "block must split into equal halves");

        let (left, right) = block.split_at(block.len() / 2);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round_key in round_keys.iter().take(self.num_rounds).rev() {
            let feistel_out = self.transformation.transform(&left, round_key)?;
            let new_left = xor_bytes(&right, &feistel_out);
            right = left;
            left = new_left;
        }
        Ok([left, right].concat())
    }
}
