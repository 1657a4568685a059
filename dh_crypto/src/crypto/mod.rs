//! Key-agreement algorithms and traits.

pub mod diffie_hellman_algorithm;
pub mod error;
pub mod key_derivation;
pub mod key_exchange_traits;

pub use self::diffie_hellman_algorithm::{DhParameters, DhParticipant};
pub use self::key_exchange_traits::KeyAgreement;
