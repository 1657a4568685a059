//! Diffie-Hellman key agreement over the RFC 3526 group-5 prime, plus a
//! SHA-256 key-derivation helper.
//!
//! The protocol provides no peer authentication; it is a building block
//! for the toolkit's educational scenarios, not a transport.

pub mod crypto;

pub use crypto::diffie_hellman_algorithm::{DhParameters, DhParticipant};
pub use crypto::error::DhError;
pub use crypto::key_derivation::{derive_key, MAX_DERIVED_KEY_BYTES};
pub use crypto::key_exchange_traits::KeyAgreement;
