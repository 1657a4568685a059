use crate::crypto::f_function::round_function;
use crate::crypto::sboxes::SBoxes;

pub const NUM_ROUNDS: usize = 16;
/// Three 64-bit subkeys per round.
pub const NUM_SUBKEYS: usize = 48;
/// Round-distinguishing additive constant.
pub const DELTA: u64 = 0x9E3779B97F4A7C15;

/// Derive the 48 subkeys: `K[i] = F(kVal ^ DELTA*(i+1), kVal)`, where
/// `kVal` is the big-endian 64-bit word read at wrapping byte offset
/// `(i*8) mod key_len` of the user key.
pub fn expand_key(master_key: &[u8], sboxes: &SBoxes) -> Vec<u64> {
    debug_assert!(matches!(master_key.len(), 16 | 24 | 32));

    let key_len = master_key.len();
    let mut subkeys = Vec::with_capacity(NUM_SUBKEYS);
    for i in 0..NUM_SUBKEYS as u64 {
        let offset = (i as usize * 8) % key_len;
        let mut word = [0u8; 8];
        for (j, slot) in word.iter_mut().enumerate() {
            *slot = master_key[(offset + j) % key_len];
        }
        let k_val = u64::from_be_bytes(word);
        subkeys.push(round_function(
            k_val ^ DELTA.wrapping_mul(i + 1),
            k_val,
            sboxes,
        ));
    }
    subkeys
}
