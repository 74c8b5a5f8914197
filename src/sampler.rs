//! Hash-to-unit sampling of the public base elements.
//!
//! Every base element is a pure function of the public key, the context and
//! its index, so the verifier rederives exactly what the prover used.

use log::warn;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::errors::OctetError;
use crate::key::PublicKey;
use crate::octets::{concat, hash_extend, int_to_octets, octet_length, octets_to_int};
use crate::params::{index_octets, ProofParams};

/// The disambiguating counter starts here, not at 0 or 1.
const FIRST_COUNTER: u64 = 2;

/// Counter value after which sampling is reported as unhealthy.
const COUNTER_WARN_THRESHOLD: u64 = 64;

/// Derives the unit of `Z_N*` at `index` out of `big_k`.
///
/// Candidates are `hash_extend(pk || context || I2OSP(index) || I2OSP(j), L)`
/// for `j = 2, 3, ...`; the first one below `N` and coprime to it wins.
pub fn sample_unit(
    public_key: &PublicKey,
    context: &[u8],
    index: usize,
    big_k: usize,
    key_bits: usize,
) -> Result<BigUint, OctetError> {
    let n = public_key.modulus();
    let prefix = concat(&[
        &public_key.to_bytes(),
        context,
        &int_to_octets(&BigUint::from(index), index_octets(big_k))?,
    ]);

    let mut j = FIRST_COUNTER;
    loop {
        let seed = candidate_seed(&prefix, j)?;
        let candidate = octets_to_int(&hash_extend(&seed, key_bits));

        if &candidate < n && candidate.gcd(n).is_one() {
            return Ok(candidate);
        }

        j += 1;
        if j == COUNTER_WARN_THRESHOLD {
            warn!(
                "sampling base element {} needed {} candidates, modulus may be malformed",
                index,
                j - FIRST_COUNTER
            );
        }
    }
}

/// `prefix || I2OSP(j, octetLength(j))`
fn candidate_seed(prefix: &[u8], j: u64) -> Result<Vec<u8>, OctetError> {
    let counter = BigUint::from(j);
    Ok(concat(&[prefix, &int_to_octets(&counter, octet_length(&counter))?]))
}

/// All `BigK` base elements, in index order.
pub fn base_elements(
    public_key: &PublicKey,
    context: &[u8],
    params: &ProofParams,
) -> Result<Vec<BigUint>, OctetError> {
    (0..params.big_k())
        .map(|i| sample_unit(public_key, context, i, params.big_k(), params.key_bits()))
        .collect()
}
