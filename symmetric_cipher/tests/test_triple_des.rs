use hex_literal::hex;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::triple_des::TripleDes;
use symmetric_cipher::{BlockCipher, CipherError, SymmetricCipher};

#[test]
fn test_ede_roundtrip() {
    let key = hex!(
        "01 23 45 67 89 AB CD EF"
        "23 45 67 89 AB CD EF 01"
        "45 67 89 AB CD EF 01 23"
    );
    let block = b"Now is t";

    let mut cipher = TripleDes::new();
    cipher.set_key(&key).unwrap();

    let ciphertext = cipher.encrypt_block(block).unwrap();
    assert_ne!(&ciphertext[..], &block[..]);

    let decrypted = cipher.decrypt_block(&ciphertext).unwrap();
    assert_eq!(&decrypted[..], &block[..]);
}

#[test]
fn test_ede_with_equal_keys_collapses_to_des() {
    // E_K . D_K . E_K == E_K, the classic backwards-compatibility property.
    let single = hex!("13 34 57 79 9B BC DF F1");
    let mut triple_key = Vec::new();
    triple_key.extend_from_slice(&single);
    triple_key.extend_from_slice(&single);
    triple_key.extend_from_slice(&single);

    let mut triple = TripleDes::new();
    triple.set_key(&triple_key).unwrap();
    let mut des = DES::default();
    des.set_key(&single).unwrap();

    let block = hex!("01 23 45 67 89 AB CD EF");
    assert_eq!(
        triple.encrypt_block(&block).unwrap(),
        des.encrypt_block(&block).unwrap()
    );
}

#[test]
fn test_ede_rejects_bad_key_length() {
    let mut cipher = TripleDes::new();
    assert!(matches!(
        cipher.set_key(&[0u8; 16]),
        Err(CipherError::InvalidKeySize { .. })
    ));
    assert!(matches!(
        cipher.set_key(&[0u8; 8]),
        Err(CipherError::InvalidKeySize { .. })
    ));
}

#[test]
fn test_ede_block_size_is_des_block_size() {
    assert_eq!(TripleDes::new().block_size(), 8);
}

#[test]
fn test_ede_requires_key_schedule() {
    let cipher = TripleDes::new();
    assert!(matches!(
        cipher.encrypt_block(&[0u8; 8]),
        Err(CipherError::StateError)
    ));
}
