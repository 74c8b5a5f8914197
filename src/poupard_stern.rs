//! Non-interactive Poupard-Stern proof that the prover knows phi(N).
//!
//! Prover and verifier derive `BigK = k + 1` public units `z_i` of `Z_N*`
//! from the public key and a context string. The prover commits to
//! `x_i = z_i^r mod N` for a random `r`, derives the challenge `w` by hashing
//! the commitments, and answers with `y = r + (N - phi(N)) * w`. Since
//! `z_i^phi(N) = 1`, the verifier's `z_i^(y - N * w)` equals `x_i` exactly when
//! the prover's `phi(N)` is the true one.

use std::time::Instant;

use log::{debug, trace, warn};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::{ExtendedGcd, Integer};
use num_traits::{One, Signed};
use rand_core::CryptoRngCore;
use thiserror::Error;

use crate::challenge::challenge;
use crate::errors::{OctetError, ParameterError, ProofError};
use crate::key::{PublicKey, SecretKey};
use crate::octets::{octets_to_int, truncate_to_bits};
use crate::params::ProofParams;
use crate::proof::Proof;
use crate::sampler::base_elements;

/// Liveness ceiling on proving attempts. Each attempt succeeds with
/// overwhelming probability once the margin check passed, so reaching it
/// means something is broken.
pub const PROVING_RETRY_MAX: usize = 10_000;

/// Attempt count after which proving is reported as unhealthy.
const RETRY_WARN_THRESHOLD: usize = 16;

/// Prove knowledge of phi(N) for `secret_key`, whose modulus must have
/// exactly `key_bits` bits.
pub fn prove<R: CryptoRngCore + ?Sized>(
    secret_key: &SecretKey,
    key_bits: usize,
    context: &[u8],
    k: usize,
    rng: &mut R,
) -> Result<Proof, ProofError> {
    prove_with_cancel(secret_key, key_bits, context, k, rng, || false)
}

/// [`prove`] drawing randomness from the operating system.
pub fn prove_with_os_rng(
    secret_key: &SecretKey,
    key_bits: usize,
    context: &[u8],
    k: usize,
) -> Result<Proof, ProofError> {
    prove(secret_key, key_bits, context, k, &mut rand_core::OsRng)
}

/// [`prove`] that gives up with [`ProofError::Cancelled`] once `deadline`
/// has passed.
pub fn prove_with_deadline<R: CryptoRngCore + ?Sized>(
    secret_key: &SecretKey,
    key_bits: usize,
    context: &[u8],
    k: usize,
    rng: &mut R,
    deadline: Instant,
) -> Result<Proof, ProofError> {
    prove_with_cancel(secret_key, key_bits, context, k, rng, || {
        Instant::now() >= deadline
    })
}

/// [`prove`] that polls `should_abort` before every attempt and returns
/// [`ProofError::Cancelled`] as soon as it answers `true`.
pub fn prove_with_cancel<R, F>(
    secret_key: &SecretKey,
    key_bits: usize,
    context: &[u8],
    k: usize,
    rng: &mut R,
    mut should_abort: F,
) -> Result<Proof, ProofError>
where
    R: CryptoRngCore + ?Sized,
    F: FnMut() -> bool,
{
    let params = ProofParams::new(key_bits, k)?;
    let public_key = secret_key.public_key();
    params.check_modulus(public_key)?;
    let delta = secret_key.delta();
    params.check_margin(&delta)?;

    let n = public_key.modulus();
    let bases = base_elements(public_key, context, &params)?;

    for attempt in 1..=PROVING_RETRY_MAX {
        if should_abort() {
            debug!("proving cancelled before attempt {}", attempt);
            return Err(ProofError::Cancelled);
        }
        if attempt == RETRY_WARN_THRESHOLD {
            warn!("proving needed {} attempts at k = {}", attempt, params.k());
        }

        let r = random_exponent(rng, key_bits - 1)?;
        let x_values: Vec<BigUint> = bases.iter().map(|z| z.modpow(&r, n)).collect();
        let w = challenge(public_key, context, &x_values, params.k(), key_bits)?;
        let y = r + &delta * w;

        if &y < params.lower_limit() {
            debug!("proof accepted after {} attempt(s)", attempt);
            return Ok(Proof::new(x_values, BigInt::from(y)));
        }
        trace!("attempt {} produced an oversized response, retrying", attempt);
    }

    Err(ProofError::RetriesExhausted(PROVING_RETRY_MAX))
}

/// Uniform integer of `bits` random bits.
fn random_exponent<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bits: usize,
) -> Result<BigUint, rand_core::Error> {
    let mut bytes = vec![0u8; (bits + 7) / 8];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(octets_to_int(&truncate_to_bits(&bytes, bits)))
}

/// Why a proof was rejected. Only logged, never returned.
#[derive(Debug, Error)]
enum Rejection {
    #[error("{0}")]
    Parameters(#[from] ParameterError),
    #[error("response outside [0, 2^(L-1))")]
    ResponseRange,
    #[error("expected {expected} commitments, got {actual}")]
    Count { expected: usize, actual: usize },
    #[error("{0}")]
    Encoding(#[from] OctetError),
    #[error("base element {0} is not invertible")]
    NotInvertible(usize),
    #[error("commitment {0} does not match")]
    Mismatch(usize),
}

/// Check `proof` against `public_key`. Every malformed or forged input yields
/// `false`.
pub fn verify(
    public_key: &PublicKey,
    proof: &Proof,
    key_bits: usize,
    context: &[u8],
    k: usize,
) -> bool {
    match check(public_key, proof, key_bits, context, k) {
        Ok(()) => true,
        Err(rejection) => {
            debug!("rejecting proof: {}", rejection);
            false
        }
    }
}

fn check(
    public_key: &PublicKey,
    proof: &Proof,
    key_bits: usize,
    context: &[u8],
    k: usize,
) -> Result<(), Rejection> {
    // before ProofParams builds 2^L from an untrusted length
    if public_key.bits() != key_bits as u64 {
        return Err(ParameterError::ModulusBits {
            expected: key_bits,
            actual: public_key.bits(),
        }
        .into());
    }
    let params = ProofParams::new(key_bits, k)?;

    let y = &proof.y;
    if y.is_negative() || y >= &BigInt::from(params.lower_limit().clone()) {
        return Err(Rejection::ResponseRange);
    }
    params.check_modulus(public_key)?;
    if proof.x_values.len() != params.big_k() {
        return Err(Rejection::Count {
            expected: params.big_k(),
            actual: proof.x_values.len(),
        });
    }

    let n = public_key.modulus();
    let w = challenge(public_key, context, &proof.x_values, params.k(), key_bits)?;
    // N, not delta: the verifier does not know phi(N)
    let r_prime = y - BigInt::from(n * w);
    let exponent = r_prime.magnitude();

    let bases = base_elements(public_key, context, &params)?;
    for (i, (z, x)) in bases.iter().zip(&proof.x_values).enumerate() {
        let z = match r_prime.sign() {
            Sign::Minus => mod_inverse(z, n).ok_or(Rejection::NotInvertible(i))?,
            _ => z.clone(),
        };
        if &z.modpow(exponent, n) != x {
            return Err(Rejection::Mismatch(i));
        }
    }
    Ok(())
}

fn mod_inverse(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    let a = BigInt::from(a.clone());
    let n = BigInt::from(n.clone());
    let ExtendedGcd { gcd, x, .. } = a.extended_gcd(&n);
    if !gcd.is_one() {
        return None;
    }
    x.mod_floor(&n).to_biguint()
}
