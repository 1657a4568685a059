//! Teaching variant of the LOKI97 block cipher.
//!
//! The Feistel structure, S-box derivation and key schedule follow the
//! toolkit's didactic description, not the LOKI97 submission; ciphertext is
//! NOT interoperable with standards-conformant implementations.

pub mod crypto;

pub use crypto::loki97::Loki97Cipher;
