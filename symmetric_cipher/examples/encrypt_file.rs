//! File encryption with the caller-side `[IV || ciphertext]` layout: the
//! IV travels at the head of the output file and is consumed again before
//! decryption.

use rand::RngCore;
use std::fs::File;
use std::io::{Read, Write};
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::{CipherContext, CipherMode, PaddingMode, SymmetricCipher};
use tempfile::NamedTempFile;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(&random_bytes(1024 * 1024))?;
    let encrypted_file = NamedTempFile::new()?;
    let decrypted_file = NamedTempFile::new()?;

    let key = random_bytes(8);
    let iv = random_bytes(8);

    let mut des = DES::default();
    des.set_key(&key)?;
    let ctx = CipherContext::new(
        Box::new(des),
        CipherMode::CBC,
        PaddingMode::ANSIX923,
        Some(iv.clone()),
    )?;

    // IV first, ciphertext after.
    let mut sink = File::create(encrypted_file.path())?;
    sink.write_all(&iv)?;
    ctx.encrypt_stream(File::open(input_file.path())?, &mut sink)?;
    sink.flush()?;

    // The reader consumes the IV before the context sees ciphertext.
    let mut source = File::open(encrypted_file.path())?;
    let mut transported_iv = vec![0u8; 8];
    source.read_exact(&mut transported_iv)?;

    let mut des = DES::default();
    des.set_key(&key)?;
    let receiver_ctx = CipherContext::new(
        Box::new(des),
        CipherMode::CBC,
        PaddingMode::ANSIX923,
        Some(transported_iv),
    )?;
    receiver_ctx.decrypt_stream(source, File::create(decrypted_file.path())?)?;

    let original = std::fs::read(input_file.path())?;
    let recovered = std::fs::read(decrypted_file.path())?;
    assert_eq!(original, recovered);
    println!("1 MiB file roundtrip through [IV || ciphertext] OK");
    Ok(())
}
