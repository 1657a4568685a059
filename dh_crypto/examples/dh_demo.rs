use dh_crypto::{derive_key, DhParticipant, KeyAgreement};

fn main() {
    let mut rng = rand::rng();

    let alice = DhParticipant::new_initiator(&mut rng);
    let bob = DhParticipant::new_initiator(&mut rng);

    let secret_alice = alice.shared_secret(bob.public_value()).unwrap();
    let secret_bob = bob.shared_secret(alice.public_value()).unwrap();
    assert_eq!(secret_alice, secret_bob);

    let key = derive_key(&secret_alice, 32).unwrap();
    println!("agreed 256-bit key: {}", hex::encode(&key));
}
