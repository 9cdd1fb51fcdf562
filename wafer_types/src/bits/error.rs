use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Corruption and I/O failures of the bit-level wire layer.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("Unexpected end of stream")]
    Eof,

    #[error("Length prefix out of range: {0}")]
    Length(i64),

    #[error("Magnitude does not fit in i64: {0}")]
    Magnitude(u64),

    #[error("Unknown width class: {0}")]
    WidthClass(u8),

    #[error("Length-prefixed text is not UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
