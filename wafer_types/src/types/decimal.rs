use derive_more::Constructor;
use num_bigint::BigInt;

/// Arbitrary-precision decimal: `unscaled * 10^(-scale)`.
///
/// The wire carries the unscaled magnitude as its two's-complement
/// big-endian bytes, so `BigInt` is held as-is rather than normalized.
#[derive(Constructor, PartialEq, Eq, Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i32,
}

impl Decimal {
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }
}

impl From<i64> for Decimal {
    fn from(i: i64) -> Self {
        Self::new(BigInt::from(i), 0)
    }
}
