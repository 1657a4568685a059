use bitvec::prelude::BitVec;

/// MSB-first bit view of a byte slice.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Pack an MSB-first bit sequence back into bytes. A trailing partial
/// chunk fills the low bits with zeros.
pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Rearrange bits through a permutation table of 1-based, MSB-first source
/// positions (the numbering FIPS 46-3 uses for its tables).
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let mut permuted = BitVec::with_capacity(table.len());
    for &pos in table {
        permuted.push(bits[pos - 1]);
    }
    bits_to_bytes(&permuted)
}

/// XOR two slices, truncated to the shorter one.
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}
