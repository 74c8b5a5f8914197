//! Octet-string primitives shared by the sampler and the challenge function.
//!
//! Integers are always big-endian and non-negative. Byte order of every
//! concatenation is part of the proof format: prover and verifier must build
//! identical hash inputs.

use num_bigint::BigUint;
use rsa::sha2::{Digest, Sha256};

use crate::errors::OctetError;

/// Encodes `value` into exactly `length` big-endian octets, left padded with zeros.
pub fn int_to_octets(value: &BigUint, length: usize) -> Result<Vec<u8>, OctetError> {
    let digits = value.to_bytes_be();
    // BigUint encodes zero as a single 0x00
    let digits: &[u8] = if digits == [0] { &[] } else { &digits };
    if digits.len() > length {
        return Err(OctetError {
            needed: digits.len(),
            length,
        });
    }

    let mut out = vec![0u8; length - digits.len()];
    out.extend_from_slice(digits);
    Ok(out)
}

/// Interprets `bytes` as a big-endian non-negative integer.
pub fn octets_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Smallest number of octets able to hold `n`. Zero still takes one octet.
pub fn octet_length(n: &BigUint) -> usize {
    let bits = n.bits() as usize;
    if bits == 0 {
        1
    } else {
        (bits + 7) / 8
    }
}

/// Same as [`octet_length`] for machine-sized values.
pub fn octet_length_usize(n: usize) -> usize {
    octet_length(&BigUint::from(n))
}

/// Concatenates byte strings in order.
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(len);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}

/// MGF1-style extension of SHA-256.
///
/// Hashes `seed || I2OSP(counter, 4)` for counter = 0, 1, 2, ..., keeps the
/// first `ceil(output_bits / 8)` octets and clears every bit above
/// `output_bits`.
pub fn hash_extend(seed: &[u8], output_bits: usize) -> Vec<u8> {
    let length = (output_bits + 7) / 8;
    let mut out = Vec::with_capacity(length + 32);

    let mut counter: u32 = 0;
    while out.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        // fixed 4-octet counter, as in MGF1
        hasher.update(counter.to_be_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    out.truncate(length);

    truncate_to_bits(&out, output_bits)
}

/// Keeps only the low-order `bit_count` bits of a big-endian bit string.
///
/// The octet length is preserved; everything above `bit_count` is zeroed.
pub fn truncate_to_bits(bytes: &[u8], bit_count: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    let total_bits = out.len() * 8;
    if bit_count >= total_bits {
        return out;
    }

    let clear_bits = total_bits - bit_count;
    let full = clear_bits / 8;
    for byte in out.iter_mut().take(full) {
        *byte = 0;
    }
    let partial = clear_bits % 8;
    if partial != 0 {
        out[full] &= 0xff >> partial;
    }
    out
}
