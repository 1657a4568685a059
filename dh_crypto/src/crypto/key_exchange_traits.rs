use crate::crypto::error::DhError;
use num_bigint::BigUint;

/// One side of a key agreement: publishes a single value and combines the
/// peer's value with its private exponent.
pub trait KeyAgreement {
    /// The value to hand to the peer.
    fn public_value(&self) -> &BigUint;

    /// Combine the peer's public value into the shared secret.
    fn shared_secret(&self, peer_public: &BigUint) -> Result<BigUint, DhError>;
}
