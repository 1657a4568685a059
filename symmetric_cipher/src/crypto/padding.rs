//! Block-padding schemes.
//!
//! `Zeros` removal strips trailing zero bytes of the final block and is
//! therefore lossy for plaintexts that end in `0x00`; the other three
//! schemes carry an explicit length byte.

use crate::crypto::cipher_types::PaddingMode;
use rand::RngCore;

/// Extend `data` to a whole number of blocks.
///
/// PKCS7, ANSI X9.23 and ISO 10126 always add between 1 and `block_size`
/// bytes, appending a full extra block when the input is already aligned.
/// `Zeros` adds nothing on aligned input.
pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size <= 255);

    let rem = data.len() % block_size;
    let pad_len = match padding {
        PaddingMode::Zeros if rem == 0 => 0,
        _ => block_size - rem,
    };
    if pad_len == 0 {
        return data;
    }

    match padding {
        PaddingMode::Zeros => data.extend(std::iter::repeat(0u8).take(pad_len)),
        PaddingMode::PKCS7 => data.extend(std::iter::repeat(pad_len as u8).take(pad_len)),
        PaddingMode::ANSIX923 => {
            data.extend(std::iter::repeat(0u8).take(pad_len - 1));
            data.push(pad_len as u8);
        }
        PaddingMode::ISO10126 => {
            let mut fill = vec![0u8; pad_len - 1];
            rand::rng().fill_bytes(&mut fill);
            data.extend(fill);
            data.push(pad_len as u8);
        }
    }
    data
}

/// Strip the padding from a decrypted buffer.
///
/// Removal is lenient: a failed structural check returns the input
/// unchanged, leaving the caller with the raw decrypted bytes.
pub fn remove_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let Some(&last_byte) = data.last() else {
        return data;
    };
    let pad_len = last_byte as usize;

    match padding {
        PaddingMode::Zeros => {
            // Only the final block can carry pad bytes.
            let floor = data.len().saturating_sub(block_size);
            while data.len() > floor && data.last() == Some(&0u8) {
                data.pop();
            }
        }
        PaddingMode::PKCS7 => {
            if (1..=block_size).contains(&pad_len)
                && pad_len <= data.len()
                && data[data.len() - pad_len..].iter().all(|&b| b == last_byte)
            {
                data.truncate(data.len() - pad_len);
            }
        }
        PaddingMode::ANSIX923 => {
            if (1..=block_size).contains(&pad_len)
                && pad_len <= data.len()
                && data[data.len() - pad_len..data.len() - 1]
                    .iter()
                    .all(|&b| b == 0)
            {
                data.truncate(data.len() - pad_len);
            }
        }
        PaddingMode::ISO10126 => {
            // Fill bytes are random; only the length byte is checked.
            if (1..=block_size).contains(&pad_len) && pad_len <= data.len() {
                data.truncate(data.len() - pad_len);
            }
        }
    }
    data
}
