use crate::crypto::cipher_error::CipherError;

/// The round transformation of a Feistel network: maps one half-block
/// under a round key.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError>;
}
