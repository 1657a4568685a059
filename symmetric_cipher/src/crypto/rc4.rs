use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_traits::StreamCipher;

/// RC4 stream cipher: KSA on construction, PRGA on [`StreamCipher::process`].
///
/// State persists across calls, so a message may be fed in chunks. Create a
/// fresh instance per message; the keystream never rewinds.
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Run the key-scheduling algorithm. Keys of 1 to 256 bytes are accepted.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.is_empty() || key.len() > 256 {
            return Err(CipherError::InvalidKeySize {
                cipher: "RC4",
                expected: "1..=256",
                actual: key.len(),
            });
        }

        let mut s = [0u8; 256];
        for (index, slot) in s.iter_mut().enumerate() {
            *slot = index as u8;
        }

        let mut j: u8 = 0;
        for i in 0..256usize {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }

        Ok(Rc4 { s, i: 0, j: 0 })
    }
}

impl StreamCipher for Rc4 {
    fn process(&mut self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.s[self.i as usize]);
            self.s.swap(self.i as usize, self.j as usize);
            let index = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
            out.push(byte ^ self.s[index as usize]);
        }
        out
    }
}
