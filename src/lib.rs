/*!
Non-interactive zero-knowledge proof that an RSA modulus `N` has the claimed
bit length and that the prover knows `phi(N)`, after Poupard and Stern.

The prover holds the factorization; the verifier sees only the public key,
the proof and a context string binding the proof to its application.

```no_run
use num_bigint::BigUint;
use poupard_stern::{prove_with_os_rng, verify, SecretKey, DEFAULT_SECURITY_BITS};

# let (p, q): (BigUint, BigUint) = todo!();
let sk = SecretKey::new(p, q, BigUint::from(65537u32));
let proof = prove_with_os_rng(&sk, 2048, b"my application", DEFAULT_SECURITY_BITS)?;
assert!(verify(sk.public_key(), &proof, 2048, b"my application", DEFAULT_SECURITY_BITS));
# Ok::<(), poupard_stern::ProofError>(())
```

Everything is a pure function of its inputs apart from the prover's random
exponent, so proofs may be produced and checked concurrently.
*/

pub mod challenge;
pub mod errors;
#[doc(hidden)]
pub mod fixtures;
pub mod key;
pub mod octets;
pub mod params;
pub mod poupard_stern;
pub mod proof;
pub mod sampler;

pub use crate::errors::{DecodeError, OctetError, ParameterError, ProofError};
pub use crate::key::{PublicKey, SecretKey};
pub use crate::params::{ProofParams, DEFAULT_SECURITY_BITS};
pub use crate::poupard_stern::{
    prove, prove_with_cancel, prove_with_deadline, prove_with_os_rng, verify,
};
pub use crate::proof::Proof;
