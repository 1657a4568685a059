use crate::crypto::cipher_error::CipherError;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute_bits, xor_bytes};
use bitvec::prelude::BitVec;

/// The DES round function: E-expansion, subkey XOR, S-boxes, P.
pub struct DesTransformation;

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, half_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if half_block.len() != 4 {
            return Err(CipherError::InvalidBlockSize {
                expected: 4,
                actual: half_block.len(),
            });
        }

        let expanded = permute_bits(half_block, &E);
        let mixed = xor_bytes(&expanded, round_key);
        let bits = bytes_to_bits(&mixed);

        let mut substituted = BitVec::with_capacity(32);
        for (box_index, six) in bits.chunks(6).enumerate() {
            // Row from the outer bits, column from the inner four.
            let row = (six[0] as usize) << 1 | six[5] as usize;
            let col = (six[1] as usize) << 3
                | (six[2] as usize) << 2
                | (six[3] as usize) << 1
                | six[4] as usize;
            let value = S_BOXES[box_index][row * 16 + col];
            for bit in (0..4).rev() {
                substituted.push((value >> bit) & 1 != 0);
            }
        }

        Ok(permute_bits(&bits_to_bytes(&substituted), &P))
    }
}
