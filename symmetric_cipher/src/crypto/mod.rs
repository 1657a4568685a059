pub mod cipher_context;
pub mod cipher_error;
mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod deal;
pub mod deal_key_expansion;
pub mod des;
mod des_adapter;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod feistel_network;
pub mod key_expansion;
pub mod padding;
pub mod random_delta;
pub mod rc4;
pub mod triple_des;
pub mod utils;
