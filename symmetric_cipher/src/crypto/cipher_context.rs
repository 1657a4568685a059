//! The cipher-context engine: applies a mode of operation and a padding
//! scheme over a pluggable block cipher, for in-memory buffers and streams.

use crate::crypto::cipher_error::CipherError;
use crate::crypto::cipher_io::write_all;
use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{CipherInput, CipherMode, CipherOutput, PaddingMode};
use crate::crypto::padding::{apply_padding, remove_padding};
use crate::crypto::random_delta::block_delta;
use crate::crypto::utils::xor_bytes;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Chunk size for the streaming entry points.
const STREAM_BUF_SIZE: usize = 64 * 1024;

/// Per-call feedback registers. Reset to the IV at the start of every
/// top-level encrypt/decrypt call; PCBC uses the plaintext/ciphertext pair,
/// the other feedback modes use `register` alone.
#[derive(Clone)]
struct FeedbackState {
    register: Vec<u8>,
    prev_plaintext: Vec<u8>,
    prev_ciphertext: Vec<u8>,
}

impl FeedbackState {
    fn from_iv(iv: Option<&Vec<u8>>, block_size: usize) -> Self {
        let seed = iv.cloned().unwrap_or_else(|| vec![0u8; block_size]);
        FeedbackState {
            register: seed.clone(),
            prev_plaintext: seed.clone(),
            prev_ciphertext: seed,
        }
    }
}

/// Applies one of seven modes of operation and one of four padding schemes
/// over an owned, already-keyed [`BlockCipher`].
///
/// The context owns a copy of the IV and the feedback registers; both are
/// re-initialized at the start of every top-level call, so calls never
/// bleed into each other. A single context must not run two operations
/// concurrently; clones are independent (the feedback state is not shared).
pub struct CipherContext {
    cipher: Arc<dyn BlockCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
    feedback: Mutex<FeedbackState>,
    // Serializes primitive access in the inherently serial modes
    // (PCBC/CFB/OFB) for backends that are not re-entrant.
    backend_gate: Arc<Mutex<()>>,
}

impl Clone for CipherContext {
    fn clone(&self) -> Self {
        CipherContext {
            cipher: Arc::clone(&self.cipher),
            mode: self.mode,
            padding: self.padding,
            iv: self.iv.clone(),
            feedback: Mutex::new(FeedbackState::from_iv(
                self.iv.as_ref(),
                self.cipher.block_size(),
            )),
            backend_gate: Arc::clone(&self.backend_gate),
        }
    }
}

impl CipherContext {
    /// Wrap a keyed cipher. ECB rejects an IV; every other mode requires
    /// one of exactly the cipher's block size.
    pub fn new(
        cipher: Box<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        let block_size = cipher.block_size();
        match (&iv, mode) {
            (Some(_), CipherMode::ECB) => {
                return Err(CipherError::InvalidIv {
                    reason: "ECB takes no iv".into(),
                });
            }
            (None, mode) if mode != CipherMode::ECB => {
                return Err(CipherError::InvalidIv {
                    reason: format!("{mode:?} requires an iv of {block_size} bytes"),
                });
            }
            (Some(iv), _) if iv.len() != block_size => {
                return Err(CipherError::InvalidIv {
                    reason: format!("iv must be {block_size} bytes, got {}", iv.len()),
                });
            }
            _ => {}
        }

        let feedback = Mutex::new(FeedbackState::from_iv(iv.as_ref(), block_size));
        Ok(CipherContext {
            cipher: Arc::from(cipher),
            mode,
            padding,
            iv,
            feedback,
            backend_gate: Arc::new(Mutex::new(())),
        })
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    // Present for every mode but ECB by construction.
    fn iv_bytes(&self) -> &[u8] {
        self.iv.as_deref().unwrap_or(&[])
    }

    fn reset_feedback(&self) -> MutexGuard<'_, FeedbackState> {
        let mut state = self.feedback.lock().unwrap();
        *state = FeedbackState::from_iv(self.iv.as_ref(), self.block_size());
        state
    }

    /// Pad (block modes only) and encrypt an in-memory buffer.
    pub fn encrypt_buffer(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut state = self.reset_feedback();
        if self.mode.is_stream() {
            self.run_mode(data, true, 0, &mut state)
        } else {
            let padded = apply_padding(data.to_vec(), self.block_size(), self.padding);
            self.run_mode(&padded, true, 0, &mut state)
        }
    }

    /// Decrypt an in-memory buffer and strip the padding (block modes only).
    pub fn decrypt_buffer(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut state = self.reset_feedback();
        if self.mode.is_stream() {
            return self.run_mode(data, false, 0, &mut state);
        }

        let block_size = self.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::LengthError {
                len: data.len(),
                block_size,
            });
        }
        let decrypted = self.run_mode(data, false, 0, &mut state)?;
        Ok(remove_padding(decrypted, block_size, self.padding))
    }

    /// Encrypt from `reader` to `writer` in 64 KiB chunks. The final short
    /// chunk is padded for block modes; stream modes never pad.
    pub fn encrypt_stream<R: Read, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<(), CipherError> {
        log::debug!(
            "encrypt_stream: mode {:?}, padding {:?}",
            self.mode,
            self.padding
        );
        let mut state = self.reset_feedback();
        let block_size = self.block_size();
        let mut buf = vec![0u8; STREAM_BUF_SIZE];
        let mut block_offset = 0u64;

        loop {
            let n = read_full(&mut reader, &mut buf)?;
            let chunk = &buf[..n];
            let last = n < STREAM_BUF_SIZE;

            let processed = if last && !self.mode.is_stream() {
                let padded = apply_padding(chunk.to_vec(), block_size, self.padding);
                self.run_mode(&padded, true, block_offset, &mut state)?
            } else {
                self.run_mode(chunk, true, block_offset, &mut state)?
            };
            writer.write_all(&processed)?;

            if last {
                break;
            }
            block_offset += (n as u64).div_ceil(block_size as u64);
        }
        writer.flush()?;
        Ok(())
    }

    /// Decrypt from `reader` to `writer`. Reads one chunk ahead so that
    /// unpadding can be deferred to the final chunk.
    pub fn decrypt_stream<R: Read, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<(), CipherError> {
        log::debug!(
            "decrypt_stream: mode {:?}, padding {:?}",
            self.mode,
            self.padding
        );
        let mut state = self.reset_feedback();
        let block_size = self.block_size();
        let mut current = vec![0u8; STREAM_BUF_SIZE];
        let mut next = vec![0u8; STREAM_BUF_SIZE];
        let mut current_len = read_full(&mut reader, &mut current)?;
        let mut block_offset = 0u64;

        loop {
            let next_len = read_full(&mut reader, &mut next)?;
            let chunk = &current[..current_len];

            if !self.mode.is_stream() && chunk.len() % block_size != 0 {
                return Err(CipherError::LengthError {
                    len: chunk.len(),
                    block_size,
                });
            }
            let decrypted = self.run_mode(chunk, false, block_offset, &mut state)?;

            if next_len == 0 {
                let tail = if self.mode.is_stream() {
                    decrypted
                } else {
                    remove_padding(decrypted, block_size, self.padding)
                };
                writer.write_all(&tail)?;
                break;
            }

            writer.write_all(&decrypted)?;
            block_offset += (current_len as u64).div_ceil(block_size as u64);
            std::mem::swap(&mut current, &mut next);
            current_len = next_len;
        }
        writer.flush()?;
        Ok(())
    }

    /// Encrypt through the caller-chosen source and sink. File work runs on
    /// the blocking pool; the await points sit at the I/O boundary.
    pub async fn encrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> Result<(), CipherError> {
        match (input, output) {
            (CipherInput::Bytes(data), out) => {
                let encrypted = self.encrypt_buffer(&data)?;
                write_all(out, &encrypted)?;
                Ok(())
            }
            (CipherInput::File(input_path), CipherOutput::File(output_path)) => {
                let this = self.clone();
                let output_path = output_path.clone();
                run_file_task(move || {
                    let reader = BufReader::new(File::open(&input_path)?);
                    let writer = BufWriter::new(File::create(&output_path)?);
                    this.encrypt_stream(reader, writer)
                })
                .await
            }
            (CipherInput::File(input_path), CipherOutput::Buffer(buffer)) => {
                let this = self.clone();
                let result = run_file_task(move || {
                    let reader = BufReader::new(File::open(&input_path)?);
                    let mut out = Vec::new();
                    this.encrypt_stream(reader, &mut out)?;
                    Ok(out)
                })
                .await?;
                **buffer = result;
                Ok(())
            }
        }
    }

    /// Decrypt through the caller-chosen source and sink.
    pub async fn decrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
    ) -> Result<(), CipherError> {
        match (input, output) {
            (CipherInput::Bytes(data), out) => {
                let decrypted = self.decrypt_buffer(&data)?;
                write_all(out, &decrypted)?;
                Ok(())
            }
            (CipherInput::File(input_path), CipherOutput::File(output_path)) => {
                let this = self.clone();
                let output_path = output_path.clone();
                run_file_task(move || {
                    let reader = BufReader::new(File::open(&input_path)?);
                    let writer = BufWriter::new(File::create(&output_path)?);
                    this.decrypt_stream(reader, writer)
                })
                .await
            }
            (CipherInput::File(input_path), CipherOutput::Buffer(buffer)) => {
                let this = self.clone();
                let result = run_file_task(move || {
                    let reader = BufReader::new(File::open(&input_path)?);
                    let mut out = Vec::new();
                    this.decrypt_stream(reader, &mut out)?;
                    Ok(out)
                })
                .await?;
                **buffer = result;
                Ok(())
            }
        }
    }

    /// Dispatch one padded (or stream-mode) span of data through the mode
    /// driver. `block_offset` is the global index of the span's first block,
    /// used by the counter-derived modes.
    fn run_mode(
        &self,
        data: &[u8],
        encrypt: bool,
        block_offset: u64,
        state: &mut FeedbackState,
    ) -> Result<Vec<u8>, CipherError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        match self.mode {
            CipherMode::ECB => self.run_ecb(data, encrypt),
            CipherMode::CBC if encrypt => self.run_cbc_encrypt(data, state),
            CipherMode::CBC => self.run_cbc_decrypt(data, state),
            CipherMode::PCBC => self.run_pcbc(data, encrypt, state),
            CipherMode::CFB => self.run_cfb(data, encrypt, state),
            CipherMode::OFB => self.run_ofb(data, state),
            CipherMode::CTR => self.run_ctr(data, block_offset),
            CipherMode::RandomDelta => self.run_random_delta(data, encrypt, block_offset),
        }
    }

    // Blocks are independent; fan out and reassemble in index order.
    fn run_ecb(&self, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let blocks: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(self.block_size())
            .map(|block| {
                if encrypt {
                    self.cipher.encrypt_block(block)
                } else {
                    self.cipher.decrypt_block(block)
                }
            })
            .collect();
        Ok(blocks?.concat())
    }

    // Each ciphertext block feeds the next; inherently serial.
    fn run_cbc_encrypt(
        &self,
        data: &[u8],
        state: &mut FeedbackState,
    ) -> Result<Vec<u8>, CipherError> {
        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            let mixed = xor_bytes(block, &state.register);
            let encrypted = self.cipher.encrypt_block(&mixed)?;
            state.register.clear();
            state.register.extend_from_slice(&encrypted);
            out.extend_from_slice(&encrypted);
        }
        Ok(out)
    }

    // All previous ciphertext blocks are known, so decryption fans out.
    fn run_cbc_decrypt(
        &self,
        data: &[u8],
        state: &mut FeedbackState,
    ) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();
        let register = state.register.clone();
        let blocks: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(block_size)
            .enumerate()
            .map(|(index, block)| {
                let prev = if index == 0 {
                    &register[..]
                } else {
                    &data[(index - 1) * block_size..index * block_size]
                };
                let decrypted = self.cipher.decrypt_block(block)?;
                Ok(xor_bytes(&decrypted, prev))
            })
            .collect();

        // The register ends on the last ciphertext block, as after encrypt.
        state.register.clear();
        state
            .register
            .extend_from_slice(&data[data.len() - block_size..]);
        Ok(blocks?.concat())
    }

    fn run_pcbc(
        &self,
        data: &[u8],
        encrypt: bool,
        state: &mut FeedbackState,
    ) -> Result<Vec<u8>, CipherError> {
        let _gate = self.backend_gate.lock().unwrap();
        let mut out = Vec::with_capacity(data.len());
        for block in data.chunks(self.block_size()) {
            if encrypt {
                let mixed = xor_bytes(
                    &xor_bytes(block, &state.prev_plaintext),
                    &state.prev_ciphertext,
                );
                let encrypted = self.cipher.encrypt_block(&mixed)?;
                state.prev_plaintext = block.to_vec();
                state.prev_ciphertext = encrypted.clone();
                out.extend_from_slice(&encrypted);
            } else {
                let decrypted = self.cipher.decrypt_block(block)?;
                let plain = xor_bytes(
                    &xor_bytes(&decrypted, &state.prev_plaintext),
                    &state.prev_ciphertext,
                );
                state.prev_plaintext = plain.clone();
                state.prev_ciphertext = block.to_vec();
                out.extend_from_slice(&plain);
            }
        }
        Ok(out)
    }

    // Encrypt and decrypt both run the primitive forward; the register
    // carries raw ciphertext, zero-filled after a short final chunk.
    fn run_cfb(
        &self,
        data: &[u8],
        encrypt: bool,
        state: &mut FeedbackState,
    ) -> Result<Vec<u8>, CipherError> {
        let _gate = self.backend_gate.lock().unwrap();
        let block_size = self.block_size();
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(block_size) {
            let keystream = self.cipher.encrypt_block(&state.register)?;
            let processed = xor_bytes(chunk, &keystream);
            let ciphertext: &[u8] = if encrypt { &processed } else { chunk };
            state.register.clear();
            state.register.extend_from_slice(ciphertext);
            state.register.resize(block_size, 0);
            out.extend_from_slice(&processed);
        }
        Ok(out)
    }

    fn run_ofb(&self, data: &[u8], state: &mut FeedbackState) -> Result<Vec<u8>, CipherError> {
        let _gate = self.backend_gate.lock().unwrap();
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(self.block_size()) {
            let keystream = self.cipher.encrypt_block(&state.register)?;
            out.extend_from_slice(&xor_bytes(chunk, &keystream));
            state.register = keystream;
        }
        Ok(out)
    }

    // IV with its trailing 8 bytes as a big-endian counter; leading bytes
    // are a nonce prefix.
    fn counter_block(&self, index: u64) -> Vec<u8> {
        let mut block = self.iv_bytes().to_vec();
        let tail = block.len() - 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&block[tail..]);
        let counter = u64::from_be_bytes(word).wrapping_add(index);
        block[tail..].copy_from_slice(&counter.to_be_bytes());
        block
    }

    fn run_ctr(&self, data: &[u8], block_offset: u64) -> Result<Vec<u8>, CipherError> {
        let blocks: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(self.block_size())
            .enumerate()
            .map(|(index, chunk)| {
                let counter = self.counter_block(block_offset + index as u64);
                let keystream = self.cipher.encrypt_block(&counter)?;
                Ok(xor_bytes(chunk, &keystream))
            })
            .collect();
        Ok(blocks?.concat())
    }

    fn run_random_delta(
        &self,
        data: &[u8],
        encrypt: bool,
        block_offset: u64,
    ) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();
        let iv = self.iv_bytes();
        let blocks: Result<Vec<Vec<u8>>, CipherError> = data
            .par_chunks(block_size)
            .enumerate()
            .map(|(index, block)| {
                let delta = block_delta(iv, block_offset + index as u64, block_size);
                if encrypt {
                    self.cipher.encrypt_block(&xor_bytes(block, &delta))
                } else {
                    Ok(xor_bytes(&self.cipher.decrypt_block(block)?, &delta))
                }
            })
            .collect();
        Ok(blocks?.concat())
    }
}

/// Fill `buf` completely unless the reader hits EOF first.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

async fn run_file_task<F, T>(task: F) -> Result<T, CipherError>
where
    F: FnOnce() -> Result<T, CipherError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|join_error| CipherError::Io(std::io::Error::other(join_error)))?
}
