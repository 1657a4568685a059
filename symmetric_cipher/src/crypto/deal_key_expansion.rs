use crate::crypto::key_expansion::KeyExpansion;

/// Round-key schedule for DEAL: the user key's 8-byte words, cycled.
#[derive(Clone)]
pub struct DealKeyExpansion;

impl DealKeyExpansion {
    /// 6 rounds for 128/192-bit keys, 8 for 256-bit.
    pub fn rounds_for(key_len: usize) -> usize {
        if key_len == 32 {
            8
        } else {
            6
        }
    }
}

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        debug_assert!(matches!(key.len(), 16 | 24 | 32), "DEAL key must be 16, 24 or 32 bytes");

        let words: Vec<Vec<u8>> = key.chunks(8).map(|word| word.to_vec()).collect();
        (0..Self::rounds_for(key.len()))
            .map(|round| words[round % words.len()].clone())
            .collect()
    }
}
