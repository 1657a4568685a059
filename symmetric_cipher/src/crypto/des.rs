use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute_bits;
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_KEY_SIZE: usize = 8;

/// DES over the FIPS 46-3 tables: IP and FP around a 16-round Feistel
/// network. The key's parity bits are ignored (PC-1 drops them).
#[derive(Clone)]
pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<Vec<u8>>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        DES {
            feistel_network: FeistelNetwork::new(16, transformation),
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.round_keys.is_empty() {
            return Err(CipherError::StateError);
        }
        if block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: DES_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != DES_KEY_SIZE {
            return Err(CipherError::InvalidKeySize {
                cipher: "DES",
                expected: "8",
                actual: key.len(),
            });
        }
        self.round_keys = self.key_expansion.generate_round_keys(key);
        Ok(())
    }
}

impl BlockCipher for DES {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = permute_bits(block, &IP);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&result, &FP))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let permuted = permute_bits(block, &IP);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys)?;
        Ok(permute_bits(&result, &FP))
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
