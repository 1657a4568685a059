use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::{expand_key, NUM_ROUNDS};
use crate::crypto::sboxes::{SBoxes, DEFAULT_POLY};
use symmetric_cipher::crypto::cipher_error::CipherError;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, SymmetricCipher};

pub const LOKI97_BLOCK_SIZE: usize = 16;

fn be_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(bytes);
    u64::from_be_bytes(word)
}

/// Teaching variant of LOKI97: a 16-round Feistel cipher over two 64-bit
/// halves with three subkeys per round.
///
/// Per round, with wrapping 64-bit addition:
///
/// ```text
/// newR = L ^ F(R + K1, K2)
/// newL = R + K3
/// ```
///
/// and the ciphertext is `R || L` with no post-swap. Keys of 16, 24 or 32
/// bytes are accepted. Ciphertext is not compatible with the published
/// LOKI97.
#[derive(Clone)]
pub struct Loki97Cipher {
    sboxes: SBoxes,
    subkeys: Vec<u64>,
}

impl Loki97Cipher {
    pub fn new() -> Self {
        Self::with_polynomial(DEFAULT_POLY)
    }

    /// Derive the S-boxes over GF(2^8) modulo `0x100 | poly`.
    pub fn with_polynomial(poly: u8) -> Self {
        Loki97Cipher {
            sboxes: SBoxes::new(poly),
            subkeys: Vec::new(),
        }
    }

    /// Construct and key in one step.
    pub fn with_key(master_key: &[u8]) -> Result<Self, CipherError> {
        let mut cipher = Loki97Cipher::new();
        cipher.set_key(master_key)?;
        Ok(cipher)
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if self.subkeys.is_empty() {
            return Err(CipherError::StateError);
        }
        if block.len() != LOKI97_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: LOKI97_BLOCK_SIZE,
                actual: block.len(),
            });
        }
        Ok(())
    }

    fn encrypt_halves(&self, mut left: u64, mut right: u64) -> (u64, u64) {
        for round in 0..NUM_ROUNDS {
            let k1 = self.subkeys[3 * round];
            let k2 = self.subkeys[3 * round + 1];
            let k3 = self.subkeys[3 * round + 2];

            let f_out = round_function(right.wrapping_add(k1), k2, &self.sboxes);
            let new_right = left ^ f_out;
            let new_left = right.wrapping_add(k3);
            left = new_left;
            right = new_right;
        }
        (left, right)
    }

    fn decrypt_halves(&self, mut left: u64, mut right: u64) -> (u64, u64) {
        for round in (0..NUM_ROUNDS).rev() {
            let k1 = self.subkeys[3 * round];
            let k2 = self.subkeys[3 * round + 1];
            let k3 = self.subkeys[3 * round + 2];

            let prev_right = left.wrapping_sub(k3);
            let prev_left =
                right ^ round_function(prev_right.wrapping_add(k1), k2, &self.sboxes);
            left = prev_left;
            right = prev_right;
        }
        (left, right)
    }
}

impl Default for Loki97Cipher {
    fn default() -> Self {
        Loki97Cipher::new()
    }
}

impl SymmetricCipher for Loki97Cipher {
    fn set_key(&mut self, master_key: &[u8]) -> Result<(), CipherError> {
        if !matches!(master_key.len(), 16 | 24 | 32) {
            return Err(CipherError::InvalidKeySize {
                cipher: "LOKI97",
                expected: "16, 24 or 32",
                actual: master_key.len(),
            });
        }
        self.subkeys = expand_key(master_key, &self.sboxes);
        Ok(())
    }
}

impl BlockCipher for Loki97Cipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        let left = be_u64(&block[..8]);
        let right = be_u64(&block[8..]);
        let (left, right) = self.encrypt_halves(left, right);

        let mut out = Vec::with_capacity(LOKI97_BLOCK_SIZE);
        out.extend_from_slice(&right.to_be_bytes());
        out.extend_from_slice(&left.to_be_bytes());
        Ok(out)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(block)?;
        // Ciphertext carries R || L.
        let right = be_u64(&block[..8]);
        let left = be_u64(&block[8..]);
        let (left, right) = self.decrypt_halves(left, right);

        let mut out = Vec::with_capacity(LOKI97_BLOCK_SIZE);
        out.extend_from_slice(&left.to_be_bytes());
        out.extend_from_slice(&right.to_be_bytes());
        Ok(out)
    }

    fn block_size(&self) -> usize {
        LOKI97_BLOCK_SIZE
    }
}
