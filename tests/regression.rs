//! Fixed 512-bit key at k = 16 with pinned sampler and challenge outputs.

use num_bigint::{BigInt, BigUint};
use poupard_stern::challenge::challenge;
use poupard_stern::fixtures;
use poupard_stern::sampler::{base_elements, sample_unit};
use poupard_stern::{prove, verify, Proof, ProofParams};
use rand_core::OsRng;

const BITS: usize = 512;
const K: usize = 16;
const CONTEXT: &[u8] = b"regression";

const Z0: &str = concat!(
    "acac71858ba0af332171788fc49e11a77fc340b949ee7f9743ab540a475321ec",
    "a4a0768af1db30390d050989da75cb9762314749409acc6e8fe0959fd9cf5f",
);

const Z16: &str = concat!(
    "4ef731e532cac4a2e92ad3466967304dee0509862b6188fc5d004503b36ab26f",
    "d2656ad86fab1c9c3061bdda21a0c7dcaad0d280b6302ba62832b4659ccc691e",
);

/// Challenge over the 17 base elements themselves.
const W_OVER_BASES: u32 = 0x86e8;

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
}

#[test]
fn sampler_known_answers() {
    let sk = fixtures::secret_key(BITS);
    let pk = sk.public_key();

    assert_eq!(sample_unit(pk, CONTEXT, 0, K + 1, BITS).unwrap(), hex(Z0));
    assert_eq!(sample_unit(pk, CONTEXT, 16, K + 1, BITS).unwrap(), hex(Z16));
}

#[test]
fn challenge_known_answer() {
    let sk = fixtures::secret_key(BITS);
    let pk = sk.public_key();
    let params = ProofParams::new(BITS, K).unwrap();

    let bases = base_elements(pk, CONTEXT, &params).unwrap();
    let w = challenge(pk, CONTEXT, &bases, K, BITS).unwrap();
    assert_eq!(w, BigUint::from(W_OVER_BASES));
}

#[test]
fn proof_verifies_and_low_bit_flip_fails() {
    let _ = env_logger::builder().is_test(true).try_init();
    let sk = fixtures::secret_key(BITS);
    let proof = prove(&sk, BITS, CONTEXT, K, &mut OsRng).unwrap();
    assert!(verify(sk.public_key(), &proof, BITS, CONTEXT, K));

    let mut flipped = proof.clone();
    flipped.y = &proof.y ^ &BigInt::from(1);
    assert!(!verify(sk.public_key(), &flipped, BITS, CONTEXT, K));
}

#[test]
fn wire_round_trip_still_verifies() {
    let sk = fixtures::secret_key(BITS);
    let proof = prove(&sk, BITS, CONTEXT, K, &mut OsRng).unwrap();

    let bytes = proof.to_bytes(BITS).unwrap();
    // count, 17 elements of 64 octets, length, response
    assert!(bytes.len() > 4 + 17 * 64 + 4);
    let decoded = Proof::from_bytes(&bytes, BITS).unwrap();
    assert_eq!(decoded, proof);
    assert!(verify(sk.public_key(), &decoded, BITS, CONTEXT, K));
}
