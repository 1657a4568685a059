use loki97_crypto::Loki97Cipher;
use rand::RngCore;
use symmetric_cipher::{
    CipherContext, CipherInput, CipherMode, CipherOutput, PaddingMode,
};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = random_bytes(32);
    let iv = random_bytes(16);
    let message = "LOKI97 demo: sixteen-byte blocks under CBC.";

    let cipher = Loki97Cipher::with_key(&key)?;
    let ctx = CipherContext::new(
        Box::new(cipher),
        CipherMode::CBC,
        PaddingMode::PKCS7,
        Some(iv),
    )?;

    let mut enc_out = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.encrypt(
        CipherInput::Bytes(message.as_bytes().to_vec()),
        &mut enc_out,
    )
    .await?;
    let encrypted = match enc_out {
        CipherOutput::Buffer(b) => *b,
        _ => unreachable!(),
    };

    let mut dec_out = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.decrypt(CipherInput::Bytes(encrypted.clone()), &mut dec_out)
        .await?;
    let decrypted = match dec_out {
        CipherOutput::Buffer(b) => *b,
        _ => unreachable!(),
    };

    assert_eq!(message.as_bytes(), &decrypted[..]);
    println!("LOKI97 CBC+PKCS7 OK ({} ciphertext bytes)", encrypted.len());
    Ok(())
}
