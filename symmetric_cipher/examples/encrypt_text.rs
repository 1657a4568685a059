use rand::RngCore;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDes;
use symmetric_cipher::{
    BlockCipher, CipherContext, CipherInput, CipherMode, CipherOutput, PaddingMode,
    SymmetricCipher,
};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

async fn demo(
    name: &str,
    cipher: Box<dyn BlockCipher + Send + Sync>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let iv = Some(random_bytes(cipher.block_size()));
    let ctx = CipherContext::new(cipher, CipherMode::CBC, PaddingMode::PKCS7, iv)?;

    let mut enc_out = CipherOutput::Buffer(Box::new(Vec::new()));
    ctx.encrypt(CipherInput::Bytes(data.to_vec()), &mut enc_out)
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

    assert_eq!(data, &decrypted[..]);
    println!("{name} CBC+PKCS7 OK ({} ciphertext bytes)", encrypted.len());
    println!("  ciphertext head: {}", hex::encode(&encrypted[..16.min(encrypted.len())]));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let data = text.as_bytes();

    let mut des = DES::default();
    des.set_key(&random_bytes(8))?;
    demo("DES", Box::new(des), data).await?;

    let mut triple = TripleDes::new();
    triple.set_key(&random_bytes(24))?;
    demo("TripleDES", Box::new(triple), data).await?;

    Ok(())
}
