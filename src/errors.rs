use thiserror::Error;

/// A non-negative integer did not fit in the requested number of octets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("integer of {needed} octets does not fit in {length} octets")]
pub struct OctetError {
    /// Octets required to represent the integer.
    pub needed: usize,
    /// Octets that were requested.
    pub length: usize,
}

/// Misconfigured key or caller bug detected before proving starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("key length must be between 2 and 65536 bits, got {0}")]
    KeyLength(usize),
    #[error("modulus has {actual} bits, expected {expected}")]
    ModulusBits { expected: usize, actual: u64 },
    #[error("security parameter must be at least 1 bit")]
    SecurityTooSmall,
    #[error("security parameter of {0} bits exceeds the 256-bit challenge digest")]
    SecurityTooLarge(usize),
    #[error("expected a two-prime key, got {0} primes")]
    PrimeCount(usize),
    #[error("N - phi(N) is too large for the completeness margin at k = {k}")]
    Margin { k: usize },
}

/// Errors raised while producing a proof.
///
/// Verification never raises; see [`crate::verify`].
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("invalid parameters: {0}")]
    Parameter(#[from] ParameterError),
    #[error("random source failed: {0}")]
    Randomness(#[from] rand_core::Error),
    #[error("no acceptable response after {0} attempts")]
    RetriesExhausted(usize),
    #[error("proving was cancelled")]
    Cancelled,
    #[error("encoding failed: {0}")]
    Encoding(#[from] OctetError),
}

/// Errors raised when parsing a serialized [`crate::Proof`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input, wanted {wanted} more octets")]
    Truncated { wanted: usize },
    #[error("{0} trailing octets after proof")]
    Trailing(usize),
    #[error("key length must be at least 1 bit")]
    KeyLength,
}
