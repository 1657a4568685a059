use crate::crypto::des_tables::{PC1, PC2};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute_bits};
use bitvec::prelude::BitVec;

/// Left-rotation amounts for the C/D halves, one entry per round.
const SHIFT_SCHEDULE: [usize; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        debug_assert_eq!(key.len(), 8, "DES key must be 8 bytes");

        // PC-1 drops the parity bits: 64 -> 56
        let permuted = permute_bits(key, &PC1);
        let bits = bytes_to_bits(&permuted);

        let mut c = bits.iter().by_vals().take(28).collect::<BitVec>();
        let mut d = bits.iter().by_vals().skip(28).take(28).collect::<BitVec>();

        let mut round_keys = Vec::with_capacity(16);
        for &shift in &SHIFT_SCHEDULE {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = BitVec::with_capacity(56);
            cd.extend(c.iter().by_vals());
            cd.extend(d.iter().by_vals());

            round_keys.push(permute_bits(&bits_to_bytes(&cd), &PC2));
        }

        round_keys
    }
}
