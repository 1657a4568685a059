use crate::crypto::error::DhError;
use crate::crypto::key_exchange_traits::KeyAgreement;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

/// RFC 3526 group 5: the 1536-bit MODP prime.
const RFC3526_GROUP5_P_HEX: &[u8] = b"FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
29024E088A67CC74020BBEA63B139B22514A08798E3404DD\
EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245\
E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D\
C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F\
83655D23DCA3AD961C62F356208552BB9ED529077096966D\
670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF";

/// Private exponents are 256 random bits with the top bit cleared.
const PRIVATE_KEY_BYTES: usize = 32;

/// The public group a set of participants agrees on.
#[derive(Clone, Debug)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

impl DhParameters {
    /// The fixed toolkit group: RFC 3526 group 5, generator 2.
    pub fn rfc3526_group5() -> Self {
        let p = BigUint::parse_bytes(RFC3526_GROUP5_P_HEX, 16).expect("constant prime parses");
        DhParameters {
            p,
            g: BigUint::from(2u32),
        }
    }

    fn validate(&self) -> Result<(), DhError> {
        if self.p <= BigUint::from(3u32) {
            return Err(DhError::InvalidParameters {
                reason: "p must be a large prime",
            });
        }
        if !self.p.bit(0) {
            return Err(DhError::InvalidParameters {
                reason: "p must be odd",
            });
        }
        if self.g <= BigUint::one() || self.g >= &self.p - BigUint::one() {
            return Err(DhError::InvalidParameters {
                reason: "g must lie in (1, p-1)",
            });
        }
        Ok(())
    }
}

/// One side of the exchange. The private exponent never leaves the value;
/// only [`KeyAgreement::public_value`] is meant to travel.
pub struct DhParticipant {
    params: DhParameters,
    private_key: BigUint,
    public_key: BigUint,
}

impl DhParticipant {
    /// A participant on the fixed RFC 3526 group-5 parameters.
    pub fn new_initiator(rng: &mut impl RngCore) -> Self {
        Self::keyed(DhParameters::rfc3526_group5(), rng)
    }

    /// A participant on caller-supplied parameters, validated first.
    pub fn new_responder(params: DhParameters, rng: &mut impl RngCore) -> Result<Self, DhError> {
        params.validate()?;
        Ok(Self::keyed(params, rng))
    }

    pub fn parameters(&self) -> &DhParameters {
        &self.params
    }

    fn keyed(params: DhParameters, rng: &mut impl RngCore) -> Self {
        let one = BigUint::one();
        let p_minus_1 = &params.p - &one;

        loop {
            let mut exponent_bytes = [0u8; PRIVATE_KEY_BYTES];
            rng.fill_bytes(&mut exponent_bytes);
            exponent_bytes[0] &= 0x7F;

            let private_key = BigUint::from_bytes_be(&exponent_bytes);
            if private_key.is_zero() {
                continue;
            }

            let public_key = params.g.modpow(&private_key, &params.p);
            if public_key > one && public_key < p_minus_1 {
                return DhParticipant {
                    params,
                    private_key,
                    public_key,
                };
            }
        }
    }
}

impl KeyAgreement for DhParticipant {
    fn public_value(&self) -> &BigUint {
        &self.public_key
    }

    fn shared_secret(&self, peer_public: &BigUint) -> Result<BigUint, DhError> {
        let one = BigUint::one();
        let p_minus_1 = &self.params.p - &one;

        if *peer_public <= one || *peer_public >= p_minus_1 {
            return Err(DhError::KeyOutOfRange {
                role: "peer public",
            });
        }
        Ok(peer_public.modpow(&self.private_key, &self.params.p))
    }
}
