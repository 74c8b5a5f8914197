use num_bigint::{BigInt, BigUint};

use crate::errors::{DecodeError, OctetError};
use crate::octets::int_to_octets;
use crate::params::element_octets;

/// A Poupard-Stern proof: `BigK` commitments and the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// `z_i^r mod N` for every base element `z_i`.
    pub x_values: Vec<BigUint>,
    /// `r + (N - phi(N)) * w`, unreduced.
    pub y: BigInt,
}

/// Helper type for parsing a serialized proof.
struct ParseBytes<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ParseBytes<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        ParseBytes { bytes, offset: 0 }
    }

    /// Take next `n` bytes.
    fn take_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.bytes.len() - self.offset;
        if n > remaining {
            return Err(DecodeError::Truncated {
                wanted: n - remaining,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + n];
        self.offset += n;
        Ok(slice)
    }

    /// Parse the next 4 bytes as a big-endian length.
    fn take_len(&mut self) -> Result<usize, DecodeError> {
        let mut len = [0u8; 4];
        len.copy_from_slice(self.take_bytes(4)?);
        Ok(u32::from_be_bytes(len) as usize)
    }

    fn finish(self) -> Result<(), DecodeError> {
        match self.bytes.len() - self.offset {
            0 => Ok(()),
            trailing => Err(DecodeError::Trailing(trailing)),
        }
    }
}

impl Proof {
    pub fn new(x_values: Vec<BigUint>, y: BigInt) -> Self {
        Self { x_values, y }
    }

    /// Serializes as `count || x_1 .. x_count || len(y) || y`.
    ///
    /// Counts and lengths are 4 big-endian octets; every `x_i` takes
    /// `ceil(key_bits / 8)` octets, the same width the challenge hashes;
    /// `y` is two's complement big-endian.
    pub fn to_bytes(&self, key_bits: usize) -> Result<Vec<u8>, OctetError> {
        let width = element_octets(key_bits);
        let y = self.y.to_signed_bytes_be();

        let mut out = Vec::with_capacity(8 + width * self.x_values.len() + y.len());
        out.extend_from_slice(&(self.x_values.len() as u32).to_be_bytes());
        for x in &self.x_values {
            out.extend(int_to_octets(x, width)?);
        }
        out.extend_from_slice(&(y.len() as u32).to_be_bytes());
        out.extend_from_slice(&y);
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8], key_bits: usize) -> Result<Self, DecodeError> {
        if key_bits == 0 {
            return Err(DecodeError::KeyLength);
        }
        let width = element_octets(key_bits);
        let mut parser = ParseBytes::new(bytes);

        let count = parser.take_len()?;
        let mut x_values = Vec::with_capacity(count.min(bytes.len() / width));
        for _ in 0..count {
            x_values.push(BigUint::from_bytes_be(parser.take_bytes(width)?));
        }

        let y_len = parser.take_len()?;
        let y = BigInt::from_signed_bytes_be(parser.take_bytes(y_len)?);
        parser.finish()?;

        Ok(Proof { x_values, y })
    }
}
