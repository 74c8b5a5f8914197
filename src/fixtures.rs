//! Fixed RSA keys for tests and benches.
//!
//! Each modulus has exactly the advertised bit length and `e = 65537`.

use num_bigint::BigUint;
use rsa::RsaPrivateKey;

use crate::key::SecretKey;

pub const PUBLIC_EXPONENT: u32 = 65537;

/// Key lengths with a fixed key available from [`secret_key`].
pub const KEY_BITS: [usize; 4] = [512, 768, 1024, 2048];

const P512: &str = concat!(
    "c806248fe260ad799cdd878af998dd0cc827158b2aee4d2a2505ace733def41b",
);

const Q512: &str = concat!(
    "dc5c2457d0730ec40da510294118af4d68bbca6889ec3693586d103cf1380263",
);

const P768: &str = concat!(
    "fa54cd8a11c9b493d8ba75fc40f6fac14a20dedc4de478afa16a1451733ad9b8",
    "ff0b76a609a475faeef71441b3ac93f7",
);

const Q768: &str = concat!(
    "f1f3d6cac5d1ab93c5ecd13977ab47bb9f61f174b4bfe57211716af586c29796",
    "ff56f224844f58c4377d8258883cb255",
);

const P1024: &str = concat!(
    "e9f4d00a846a3528c73e864993c140701d73c492907b9a122bcd05f6deeb14c6",
    "78fa6826320a54d9415cd45dc285084dc9bfa3ac3f152d74fc44a2e6332c7bdd",
);

const Q1024: &str = concat!(
    "faabbbaa96998d3b4caf30154f18c69ffe16cd9abb299c4085393273ecb87813",
    "f5ede4ed038d0d4465ff0a562413c4d8a0a611b5e3b83e387af5e73a1175791f",
);

const P2048: &str = concat!(
    "c27779d25c2d2b46ceb45cb11ff745ebd9b22c892e1946977358495d9f89d23d",
    "4717ce3caeaff0eb766a11e453f025fa8858f7450bf41dca3438ac49ed7e7393",
    "9b974a6b79f5cc3b29998e93dae70f2b73748e0bc91c8adbb61ff9e4810ff2fd",
    "76a64e5c4969f8d393ca0638d252db1972548617b20ed0c594964c5e0c4827ad",
);

const Q2048: &str = concat!(
    "d3c9bab67f6eb47ed551dd5fee0fedac26c38a7fa6881479be48a805e258cf6c",
    "5ad979ba33e323be8a13c71ec1e400a4e9e2952fd90c57a2ace9400e7adbd0ac",
    "340c8fd114e922e98557521ddf53849a94ea8d4815bd42b56e89c7aadd896db2",
    "06e5d3b7b9a68da64580aae673fa13139baf0be36fd7d0ef6417eabb47f96f5b",
);

fn parse(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("fixture primes are valid hex")
}

/// The fixed key whose modulus has `bits` bits.
pub fn secret_key(bits: usize) -> SecretKey {
    let (p, q) = match bits {
        512 => (P512, Q512),
        768 => (P768, Q768),
        1024 => (P1024, Q1024),
        2048 => (P2048, Q2048),
        _ => panic!("no fixture key of {} bits", bits),
    };
    SecretKey::new(parse(p), parse(q), BigUint::from(PUBLIC_EXPONENT))
}

/// A fresh two-prime key from the `rsa` crate's generator.
pub fn random_secret_key(bits: usize) -> SecretKey {
    let mut rng = rand_core::OsRng;

    let private_key = RsaPrivateKey::new(&mut rng, bits).expect("failed to generate a key");
    SecretKey::try_from(&private_key).expect("rsa generates two-prime keys")
}

#[test]
fn test_fixture_lengths() {
    for bits in KEY_BITS {
        let sk = secret_key(bits);
        assert_eq!(sk.public_key().bits(), bits as u64);
        assert_ne!(sk.p(), sk.q());
    }
}
