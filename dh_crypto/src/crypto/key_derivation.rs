//! SHA-256 key derivation over the agreed secret.

use crate::crypto::error::DhError;
use num_bigint::{BigInt, BigUint};
use sha2::{Digest, Sha256};

/// Longest key [`derive_key`] can produce.
pub const MAX_DERIVED_KEY_BYTES: usize = 32;

/// Hash the secret's minimal two's-complement big-endian encoding and take
/// the first `len` bytes.
///
/// `derive_key(s, n)` is a prefix of `derive_key(s, m)` whenever `n <= m`.
pub fn derive_key(secret: &BigUint, len: usize) -> Result<Vec<u8>, DhError> {
    if len > MAX_DERIVED_KEY_BYTES {
        return Err(DhError::KeySizeTooLarge {
            requested: len,
            max: MAX_DERIVED_KEY_BYTES,
        });
    }

    let encoded = BigInt::from(secret.clone()).to_signed_bytes_be();
    let digest = Sha256::digest(&encoded);
    Ok(digest[..len].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_property_holds() {
        let secret = BigUint::from(0x1234_5678_9ABC_DEF0u64);
        let full = derive_key(&secret, 32).unwrap();
        for len in 0..=32 {
            assert_eq!(derive_key(&secret, len).unwrap(), full[..len]);
        }
    }

    #[test]
    fn rejects_oversized_requests() {
        let secret = BigUint::from(7u32);
        assert_eq!(
            derive_key(&secret, 33),
            Err(DhError::KeySizeTooLarge {
                requested: 33,
                max: 32
            })
        );
    }

    #[test]
    fn encoding_keeps_high_bit_secrets_positive() {
        // 0xFF would read as negative without the sign byte; the minimal
        // two's-complement form prepends 0x00, changing the digest.
        let high = derive_key(&BigUint::from(0xFFu32), 32).unwrap();
        let low = derive_key(&BigUint::from(0x7Fu32), 32).unwrap();
        assert_ne!(high, low);

        let digest = Sha256::digest([0x00u8, 0xFF]);
        assert_eq!(high, digest[..].to_vec());
    }

    #[test]
    fn distinct_secrets_produce_distinct_keys() {
        let first = derive_key(&BigUint::from(1u32), 16).unwrap();
        let second = derive_key(&BigUint::from(2u32), 16).unwrap();
        assert_ne!(first, second);
    }
}
