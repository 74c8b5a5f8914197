use num_bigint::BigUint;
use num_traits::One;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};

use crate::errors::ParameterError;
use crate::octets::concat;

/// Secret RSA key material held by the prover: two primes and the public exponent.
///
/// Primality of `p` and `q` and `gcd(e, phi(N)) = 1` are the caller's
/// responsibility.
#[derive(Clone)]
pub struct SecretKey {
    p: BigUint,
    q: BigUint,
    e: BigUint,
    public: PublicKey,
}

/// The public half `(N = p * q, e)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    n: BigUint,
    e: BigUint,
}

impl SecretKey {
    pub fn new(p: BigUint, q: BigUint, e: BigUint) -> Self {
        let public = PublicKey {
            n: &p * &q,
            e: e.clone(),
        };
        Self { p, q, e, public }
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// phi(N) = (p - 1)(q - 1)
    pub fn totient(&self) -> BigUint {
        (&self.p - BigUint::one()) * (&self.q - BigUint::one())
    }

    /// N - phi(N), which equals p + q - 1.
    pub fn delta(&self) -> BigUint {
        &self.public.n - self.totient()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl PublicKey {
    /// Public key as received from a prover, for verification.
    pub fn from_components(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Bit length of the modulus as measured.
    pub fn bits(&self) -> u64 {
        self.n.bits()
    }

    /// Canonical encoding used as hash input:
    /// `len(N) || N || len(e) || e`, lengths as 4 big-endian octets and
    /// integers in minimal big-endian octets.
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = self.n.to_bytes_be();
        let e = self.e.to_bytes_be();
        let n_len = (n.len() as u32).to_be_bytes();
        let e_len = (e.len() as u32).to_be_bytes();
        concat(&[&n_len, &n, &e_len, &e])
    }
}

fn from_rsa_biguint(x: &rsa::BigUint) -> BigUint {
    BigUint::from_bytes_be(&x.to_bytes_be())
}

/// Only two-prime keys can be proven.
impl TryFrom<&rsa::RsaPrivateKey> for SecretKey {
    type Error = ParameterError;

    fn try_from(key: &rsa::RsaPrivateKey) -> Result<Self, Self::Error> {
        match key.primes() {
            [p, q] => Ok(SecretKey::new(
                from_rsa_biguint(p),
                from_rsa_biguint(q),
                from_rsa_biguint(key.e()),
            )),
            primes => Err(ParameterError::PrimeCount(primes.len())),
        }
    }
}

impl From<&rsa::RsaPublicKey> for PublicKey {
    fn from(key: &rsa::RsaPublicKey) -> Self {
        PublicKey::from_components(from_rsa_biguint(key.n()), from_rsa_biguint(key.e()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_key() -> SecretKey {
        SecretKey::new(BigUint::from(61u32), BigUint::from(53u32), BigUint::from(17u32))
    }

    #[test]
    fn derives_public_key() {
        let sk = toy_key();
        assert_eq!(sk.public_key().modulus(), &BigUint::from(3233u32));
        assert_eq!(sk.public_key().exponent(), &BigUint::from(17u32));
        assert_eq!(sk.public_key().bits(), 12);
        assert_eq!(sk.totient(), BigUint::from(3120u32));
        assert_eq!(sk.delta(), BigUint::from(113u32));
    }

    #[test]
    fn canonical_encoding() {
        let pk = toy_key().public_key().clone();
        assert_eq!(pk.to_bytes(), vec![0, 0, 0, 2, 0x0c, 0xa1, 0, 0, 0, 1, 17]);
        assert_eq!(PublicKey::from_components(BigUint::from(3233u32), BigUint::from(17u32)), pk);
    }

    #[test]
    fn debug_hides_primes() {
        let rendered = format!("{:?}", toy_key());
        assert!(!rendered.contains("p:"));
        assert!(rendered.contains("3233"));
    }

    #[test]
    fn converts_rsa_crate_keys() {
        let sk = crate::fixtures::secret_key(512);
        let rsa_key = rsa::RsaPrivateKey::from_p_q(
            rsa::BigUint::from_bytes_be(&sk.p().to_bytes_be()),
            rsa::BigUint::from_bytes_be(&sk.q().to_bytes_be()),
            rsa::BigUint::from(65537u32),
        )
        .unwrap();

        let converted = SecretKey::try_from(&rsa_key).unwrap();
        assert_eq!(converted.public_key(), sk.public_key());
        assert_eq!(PublicKey::from(&rsa_key.to_public_key()), *sk.public_key());
    }
}
