use loki97_crypto::crypto::f_function::round_function;
use loki97_crypto::crypto::permutation::{permute, P};
use loki97_crypto::crypto::sboxes::{SBoxes, DEFAULT_POLY};

#[test]
fn test_permutation_table_is_a_bijection() {
    let mut seen = [false; 64];
    for &target in P.iter() {
        assert!(!seen[target as usize], "duplicate target {target}");
        seen[target as usize] = true;
    }
}

#[test]
fn test_permute_preserves_bit_count() {
    for value in [0u64, 1, 0xFF, 0xDEADBEEF_12345678, u64::MAX] {
        assert_eq!(permute(value).count_ones(), value.count_ones());
    }
    assert_eq!(permute(0), 0);
    assert_eq!(permute(u64::MAX), u64::MAX);
}

#[test]
fn test_round_function_zero_fixed_point() {
    // Both S-boxes map 0 to 0, so the all-zero state stays zero.
    let sboxes = SBoxes::new(DEFAULT_POLY);
    assert_eq!(round_function(0, 0, &sboxes), 0);
}

#[test]
fn test_round_function_low_bit_lands_on_target() {
    // state 0x01 hits S1 (S1[1] = 1); the permutation then moves bit 0 to
    // bit 56.
    let sboxes = SBoxes::new(DEFAULT_POLY);
    assert_eq!(round_function(1, 0, &sboxes), 1u64 << 56);
}

#[test]
fn test_round_function_depends_only_on_xor_of_inputs() {
    let sboxes = SBoxes::new(DEFAULT_POLY);
    let a = 0xCAFEBABE_DEADC0DE;
    let b = 0xDEADBEEF_12345678;
    assert_eq!(
        round_function(a, b, &sboxes),
        round_function(a ^ b, 0, &sboxes)
    );
}

#[test]
fn test_round_function_consistency() {
    let sboxes = SBoxes::new(DEFAULT_POLY);
    let input = 0x1234_5678_9ABC_DEF0;
    let key = 0xA5A5_A5A5_DEAD_BEEF;
    assert_eq!(
        round_function(input, key, &sboxes),
        round_function(input, key, &sboxes)
    );
    assert_ne!(round_function(input, key, &sboxes), 0);
}
