use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use crate::crypto::deal_key_expansion::DealKeyExpansion;
use crate::crypto::des_adapter::DesAdapter;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

pub const DEAL_BLOCK_SIZE: usize = 16;

/// DEAL: a 128-bit Feistel cipher whose round transformation is DES
/// encryption of the 64-bit half under the round's 8-byte subkey.
///
/// Key sizes 16, 24 and 32 bytes select 6, 6 and 8 rounds.
pub struct Deal {
    feistel_network: FeistelNetwork,
    key_expansion: DealKeyExpansion,
    round_keys: Vec<Vec<u8>>,
}

impl Deal {
    pub fn new() -> Self {
        Deal {
            feistel_network: FeistelNetwork::new(0, Arc::new(DesAdapter::new())),
            key_expansion: DealKeyExpansion,
            round_keys: Vec::new(),
        }
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::StateError);
        }
        if block.len() != DEAL_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: DEAL_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl Default for Deal {
    fn default() -> Self {
        Deal::new()
    }
}

impl SymmetricCipher for Deal {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(CipherError::InvalidKeySize {
                cipher: "DEAL",
                expected: "16, 24 or 32",
                actual: key.len(),
            });
        }
        self.round_keys = self.key_expansion.generate_round_keys(key);
        self.feistel_network =
            FeistelNetwork::new(self.round_keys.len(), Arc::new(DesAdapter::new()));
        Ok(())
    }
}

impl BlockCipher for Deal {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.feistel_network
            .encrypt_with_round_keys(block, &self.round_keys)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        self.feistel_network
            .decrypt_with_round_keys(block, &self.round_keys)
    }

    fn block_size(&self) -> usize {
        DEAL_BLOCK_SIZE
    }
}
