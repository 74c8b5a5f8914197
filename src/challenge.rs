use num_bigint::BigUint;

use crate::errors::OctetError;
use crate::key::PublicKey;
use crate::octets::{concat, int_to_octets, octets_to_int, sha256, truncate_to_bits};
use crate::params::element_octets;

/// Fiat-Shamir challenge over the prover's commitments.
///
/// `SHA-256(pk || context || x_1 || ... || x_BigK)` truncated to `k_bits`,
/// with every `x_i` encoded in `ceil(L / 8)` octets. Fails if an element does
/// not fit that width.
pub fn challenge(
    public_key: &PublicKey,
    context: &[u8],
    x_values: &[BigUint],
    k_bits: usize,
    key_bits: usize,
) -> Result<BigUint, OctetError> {
    let width = element_octets(key_bits);
    let mut encoded = Vec::with_capacity(width * x_values.len());
    for x in x_values {
        encoded.extend(int_to_octets(x, width)?);
    }

    let input = concat(&[&public_key.to_bytes(), context, &encoded]);
    let digest = sha256(&input);
    Ok(octets_to_int(&truncate_to_bits(&digest, k_bits)))
}
