//! # Bit-level wire primitives
//!
//! Following pseudocode depicts the bit representation on the wire.
//! In-memory representations are distinct from this.
//!
//! Bits accumulate MSB-first into bytes; a flush pads the trailing partial
//! byte with zero bits. The reader consumes bits in the same order, so a
//! writer/reader pair stays in lockstep without any framing.
//!
//! ```text
//! struct DynamicNumber {
//!     sign:           1 bit,   // 1 => negative
//!     width_class:    2 bits,  // 0 => 4-bit, 1 => 8-bit, 2 => 16-bit, 3 => 64-bit magnitude
//!     magnitude:      4 | 8 | 16 | 64 bits, MSB-first,
//! }
//!
//! struct AlignedScalar {
//!     // i64 / f32 / f64: the writer pads to a byte boundary, then emits
//!     // the big-endian bytes; the reader discards pending bits the same way.
//!     padding:        0..=7 bits,
//!     body:           [u8; 8] or [u8; 4],
//! }
//!
//! struct Utf {
//!     byte_len:       DynamicNumber,
//!     padding:        0..=7 bits,
//!     body:           [u8; byte_len],   // UTF-8, no terminator
//! }
//! ```
//!
//! `i64::MIN` is carried as its unsigned magnitude; a negative zero on the
//! wire reads back as 0.

mod error;
mod reader;
mod width;
mod writer;


pub use error::*;
pub use reader::*;
pub use width::*;
pub use writer::*;

/// Upper bound accepted for any length prefix (text bytes, array elements).
pub const MAX_LEN_PREFIX: usize = i32::MAX as usize;
