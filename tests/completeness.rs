use poupard_stern::fixtures;
use poupard_stern::{prove, verify, ProofParams, DEFAULT_SECURITY_BITS};
use rand_core::OsRng;

const CONTEXT: &[u8] = b"completeness";

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn prove_and_verify(key_bits: usize, k: usize) {
    let sk = fixtures::secret_key(key_bits);
    let proof = prove(&sk, key_bits, CONTEXT, k, &mut OsRng).unwrap();

    let params = ProofParams::new(key_bits, k).unwrap();
    assert_eq!(proof.x_values.len(), params.big_k());
    assert!(proof.y < num_bigint::BigInt::from(params.lower_limit().clone()));
    assert!(
        verify(sk.public_key(), &proof, key_bits, CONTEXT, k),
        "L = {}, k = {}",
        key_bits,
        k
    );
}

#[test]
fn completeness_768() {
    init();
    for k in [80, 120, 128] {
        prove_and_verify(768, k);
    }
}

#[test]
fn completeness_1024() {
    init();
    for k in [80, 120, 128] {
        prove_and_verify(1024, k);
    }
}

#[test]
fn completeness_2048() {
    init();
    for k in [80, 120, 128] {
        prove_and_verify(2048, k);
    }
}

#[test]
fn default_security_parameter() {
    init();
    prove_and_verify(1024, DEFAULT_SECURITY_BITS);
}

#[test]
fn freshly_generated_key() {
    init();
    let sk = fixtures::random_secret_key(768);
    let proof = prove(&sk, 768, CONTEXT, 80, &mut OsRng).unwrap();
    assert!(verify(sk.public_key(), &proof, 768, CONTEXT, 80));
}

#[test]
fn proofs_are_randomized() {
    let sk = fixtures::secret_key(768);
    let a = prove(&sk, 768, CONTEXT, 80, &mut OsRng).unwrap();
    let b = prove(&sk, 768, CONTEXT, 80, &mut OsRng).unwrap();
    assert_ne!(a, b);
    assert!(verify(sk.public_key(), &a, 768, CONTEXT, 80));
    assert!(verify(sk.public_key(), &b, 768, CONTEXT, 80));
}
