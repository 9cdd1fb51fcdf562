use crate::bits::WireError;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// The 2-bit magnitude-width selector of a dynamic number.
///
/// We manually pin the discriminants because the on-wire integers must not
/// change with enum definition order.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum WidthClass {
    W4 = 0,
    W8 = 1,
    W16 = 2,
    W64 = 3,
}

impl WidthClass {
    /// Smallest class whose maximum covers `magnitude`.
    pub fn for_magnitude(magnitude: u64) -> Self {
        if magnitude <= 0xf {
            Self::W4
        } else if magnitude <= 0xff {
            Self::W8
        } else if magnitude <= 0xffff {
            Self::W16
        } else {
            Self::W64
        }
    }

    pub fn bit_width(&self) -> u32 {
        match self {
            Self::W4 => 4,
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W64 => 64,
        }
    }
}

impl TryFrom<u8> for WidthClass {
    type Error = WireError;
    fn try_from(int: u8) -> Result<Self, WireError> {
        Self::from_u8(int).ok_or(WireError::WidthClass(int))
    }
}
