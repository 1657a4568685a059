/// Derives the per-round subkeys from a user key.
pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>>;
}
