pub mod f_function;
pub mod key_schedule;
pub mod loki97;
pub mod permutation;
pub mod sboxes;
