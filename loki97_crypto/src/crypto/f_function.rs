use crate::crypto::permutation::permute;
use crate::crypto::sboxes::SBoxes;

/// Which S-box handles each state byte, MSB first.
const SBOX_PATTERN: [u8; 8] = [1, 2, 1, 2, 2, 1, 2, 1];

/// The round function: substitute `a ^ b` bytewise through the alternating
/// S-boxes, then scatter the bits through the fixed permutation.
pub fn round_function(a: u64, b: u64, sboxes: &SBoxes) -> u64 {
    let state = a ^ b;

    let mut substituted = 0u64;
    for (byte_index, &which) in SBOX_PATTERN.iter().enumerate() {
        let shift = 56 - 8 * byte_index as u32;
        let byte = (state >> shift) as u8;
        let mapped = match which {
            1 => sboxes.s1(byte),
            _ => sboxes.s2(byte),
        };
        substituted |= (mapped as u64) << shift;
    }

    permute(substituted)
}
