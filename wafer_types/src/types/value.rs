use crate::types::{Decimal, RecordValue};

/// A dynamically typed field value.
///
/// Object-kind variants carry `Option`; `None` is the wire's null.
/// `Instant` is milliseconds since the Unix epoch.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    OptBool(Option<bool>),
    OptI8(Option<i8>),
    OptI16(Option<i16>),
    OptI32(Option<i32>),
    OptI64(Option<i64>),
    OptF32(Option<f32>),
    OptF64(Option<f64>),
    BoolArray(Option<Vec<bool>>),
    I8Array(Option<Vec<i8>>),
    I16Array(Option<Vec<i16>>),
    I32Array(Option<Vec<i32>>),
    I64Array(Option<Vec<i64>>),
    F32Array(Option<Vec<f32>>),
    F64Array(Option<Vec<f64>>),
    Str(Option<String>),
    Instant(Option<i64>),
    Decimal(Option<Decimal>),
    Record(Option<Box<RecordValue>>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Self::OptBool(v) => v.is_none(),
            Self::OptI8(v) => v.is_none(),
            Self::OptI16(v) => v.is_none(),
            Self::OptI32(v) => v.is_none(),
            Self::OptI64(v) => v.is_none(),
            Self::OptF32(v) => v.is_none(),
            Self::OptF64(v) => v.is_none(),
            Self::BoolArray(v) => v.is_none(),
            Self::I8Array(v) => v.is_none(),
            Self::I16Array(v) => v.is_none(),
            Self::I32Array(v) => v.is_none(),
            Self::I64Array(v) => v.is_none(),
            Self::F32Array(v) => v.is_none(),
            Self::F64Array(v) => v.is_none(),
            Self::Str(v) => v.is_none(),
            Self::Instant(v) => v.is_none(),
            Self::Decimal(v) => v.is_none(),
            Self::Record(v) => v.is_none(),
            _ => false,
        }
    }

    /// Variant name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::OptBool(_) => "bool?",
            Self::OptI8(_) => "i8?",
            Self::OptI16(_) => "i16?",
            Self::OptI32(_) => "i32?",
            Self::OptI64(_) => "i64?",
            Self::OptF32(_) => "f32?",
            Self::OptF64(_) => "f64?",
            Self::BoolArray(_) => "[bool]",
            Self::I8Array(_) => "[i8]",
            Self::I16Array(_) => "[i16]",
            Self::I32Array(_) => "[i32]",
            Self::I64Array(_) => "[i64]",
            Self::F32Array(_) => "[f32]",
            Self::F64Array(_) => "[f64]",
            Self::Str(_) => "string",
            Self::Instant(_) => "instant",
            Self::Decimal(_) => "decimal",
            Self::Record(_) => "record",
        }
    }
}
