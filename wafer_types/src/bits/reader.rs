use crate::bits::{WidthClass, WireError, MAX_LEN_PREFIX};
use std::io::{ErrorKind, Read};

/// Consumes bits MSB-first from a byte source, mirroring
/// [`BitWriter`](crate::bits::BitWriter).
pub struct BitReader<R: Read> {
    r: R,
    cur: u8,
    cur_left: u32,
}

impl<R: Read> BitReader<R> {
    pub fn new(r: R) -> Self {
        Self {
            r,
            cur: 0,
            cur_left: 0,
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        self.r.read_exact(buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                WireError::Eof
            } else {
                WireError::Io(e)
            }
        })
    }

    pub fn read_bit(&mut self) -> Result<bool, WireError> {
        if self.cur_left == 0 {
            let mut buf = [0u8; 1];
            self.read_exact(&mut buf)?;
            self.cur = buf[0];
            self.cur_left = 8;
        }
        self.cur_left -= 1;
        Ok((self.cur >> self.cur_left) & 1 == 1)
    }

    pub fn read_bits(&mut self, width: u32) -> Result<u64, WireError> {
        let mut value = 0u64;
        for _ in 0..width {
            value = (value << 1) | (self.read_bit()? as u64);
        }
        Ok(value)
    }

    /// Discards the bits pending in the current byte.
    pub fn align(&mut self) {
        self.cur_left = 0;
    }

    pub fn read_dynamic(&mut self) -> Result<i64, WireError> {
        let negative = self.read_bit()?;
        let class = WidthClass::try_from(self.read_bits(2)? as u8)?;
        let magnitude = self.read_bits(class.bit_width())?;

        if negative {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(WireError::Magnitude(magnitude));
            }
            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| WireError::Magnitude(magnitude))
        }
    }

    /// A length prefix, validated against [`MAX_LEN_PREFIX`].
    pub fn read_len(&mut self) -> Result<usize, WireError> {
        let len = self.read_dynamic()?;
        if len < 0 || len > MAX_LEN_PREFIX as i64 {
            return Err(WireError::Length(len));
        }
        Ok(len as usize)
    }

    fn read_aligned(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        self.align();
        self.read_exact(buf)
    }

    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        let mut buf = [0u8; 8];
        self.read_aligned(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        let mut buf = [0u8; 4];
        self.read_aligned(&mut buf)?;
        Ok(f32::from_be_bytes(buf))
    }

    pub fn read_f64(&mut self) -> Result<f64, WireError> {
        let mut buf = [0u8; 8];
        self.read_aligned(&mut buf)?;
        Ok(f64::from_be_bytes(buf))
    }

    pub fn read_utf(&mut self) -> Result<String, WireError> {
        let len = self.read_len()?;
        let mut buf = vec![0u8; len];
        self.read_aligned(&mut buf)?;
        let s = String::from_utf8(buf)?;
        Ok(s)
    }
}
