use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::ParameterError;
use crate::key::PublicKey;
use crate::octets::octet_length_usize;

/// Security parameter used when the caller has no reason to pick another.
pub const DEFAULT_SECURITY_BITS: usize = 128;

/// The challenge is a truncated SHA-256 digest, so it cannot be wider than this.
pub const MAX_SECURITY_BITS: usize = 256;

/// Largest claimed key length accepted.
pub const MAX_KEY_BITS: usize = 1 << 16;

/// Round `k` up to a whole number of octets.
pub fn round_security(k: usize) -> usize {
    k.saturating_add(7) / 8 * 8
}

/// Octets per group element in hash inputs and on the wire: `ceil(L / 8)`.
pub fn element_octets(key_bits: usize) -> usize {
    key_bits / 8 + usize::from(key_bits % 8 != 0)
}

/// Octets for a base element index in `[0, BigK)`.
pub fn index_octets(big_k: usize) -> usize {
    octet_length_usize(big_k.saturating_sub(1))
}

/// Quantities derived from the claimed key length `L` and security parameter
/// `k`, identical for prover and verifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofParams {
    key_bits: usize,
    k: usize,
    big_k: usize,
    lower_limit: BigUint,
    upper_limit: BigUint,
}

impl ProofParams {
    pub fn new(key_bits: usize, k: usize) -> Result<Self, ParameterError> {
        if !(2..=MAX_KEY_BITS).contains(&key_bits) {
            return Err(ParameterError::KeyLength(key_bits));
        }
        let k = round_security(k);
        if k == 0 {
            return Err(ParameterError::SecurityTooSmall);
        }
        if k > MAX_SECURITY_BITS {
            return Err(ParameterError::SecurityTooLarge(k));
        }

        Ok(Self {
            key_bits,
            k,
            big_k: k + 1,
            lower_limit: BigUint::one() << (key_bits - 1),
            upper_limit: BigUint::one() << key_bits,
        })
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    /// Challenge width in bits, already rounded.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of base elements, `k + 1`.
    pub fn big_k(&self) -> usize {
        self.big_k
    }

    /// `2^(L-1)`: smallest valid modulus and exclusive bound on the response.
    pub fn lower_limit(&self) -> &BigUint {
        &self.lower_limit
    }

    /// `2^L`
    pub fn upper_limit(&self) -> &BigUint {
        &self.upper_limit
    }

    pub fn element_octets(&self) -> usize {
        element_octets(self.key_bits)
    }

    pub fn index_octets(&self) -> usize {
        index_octets(self.big_k)
    }

    /// `N` must have exactly `L` bits, both by range and as measured.
    pub fn check_modulus(&self, public_key: &PublicKey) -> Result<(), ParameterError> {
        let n = public_key.modulus();
        let in_range = self.lower_limit <= *n && *n < self.upper_limit;
        if !in_range || public_key.bits() != self.key_bits as u64 {
            return Err(ParameterError::ModulusBits {
                expected: self.key_bits,
                actual: public_key.bits(),
            });
        }
        Ok(())
    }

    /// Completeness margin: `floor(2^(L-1) / (delta * 2^k)) > 2^k`.
    pub fn check_margin(&self, delta: &BigUint) -> Result<(), ParameterError> {
        let two_k = BigUint::one() << self.k;
        let divisor = delta * &two_k;
        if divisor.is_zero() || &self.lower_limit / divisor <= two_k {
            return Err(ParameterError::Margin { k: self.k });
        }
        Ok(())
    }
}
