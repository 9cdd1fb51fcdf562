use crate::types::Value;

/// The declared type of a record field.
///
/// The canonical names round-trip through [`FieldType::parse`] and
/// [`FieldType::canonical_name`]:
///
/// ```text
/// bool  i8  i16  i32  i64  f32  f64      primitives
/// bool? i8? i16? i32? i64? f32? f64?     nullable scalars
/// [bool] [i8] [i16] [i32] [i64] [f32] [f64]
/// string  instant  decimal
/// <anything else>                        a nested record's class name
/// ```
///
/// The declared type, never the runtime value, selects the wire encoding.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum FieldType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    OptBool,
    OptI8,
    OptI16,
    OptI32,
    OptI64,
    OptF32,
    OptF64,
    BoolArray,
    I8Array,
    I16Array,
    I32Array,
    I64Array,
    F32Array,
    F64Array,
    Str,
    Instant,
    Decimal,
    Record(String),
}

impl FieldType {
    pub fn parse(name: &str) -> Self {
        match name {
            "bool" => Self::Bool,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "f32" => Self::F32,
            "f64" => Self::F64,
            "bool?" => Self::OptBool,
            "i8?" => Self::OptI8,
            "i16?" => Self::OptI16,
            "i32?" => Self::OptI32,
            "i64?" => Self::OptI64,
            "f32?" => Self::OptF32,
            "f64?" => Self::OptF64,
            "[bool]" => Self::BoolArray,
            "[i8]" => Self::I8Array,
            "[i16]" => Self::I16Array,
            "[i32]" => Self::I32Array,
            "[i64]" => Self::I64Array,
            "[f32]" => Self::F32Array,
            "[f64]" => Self::F64Array,
            "string" => Self::Str,
            "instant" => Self::Instant,
            "decimal" => Self::Decimal,
            other => Self::Record(String::from(other)),
        }
    }

    pub fn canonical_name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::OptBool => "bool?",
            Self::OptI8 => "i8?",
            Self::OptI16 => "i16?",
            Self::OptI32 => "i32?",
            Self::OptI64 => "i64?",
            Self::OptF32 => "f32?",
            Self::OptF64 => "f64?",
            Self::BoolArray => "[bool]",
            Self::I8Array => "[i8]",
            Self::I16Array => "[i16]",
            Self::I32Array => "[i32]",
            Self::I64Array => "[i64]",
            Self::F32Array => "[f32]",
            Self::F64Array => "[f64]",
            Self::Str => "string",
            Self::Instant => "instant",
            Self::Decimal => "decimal",
            Self::Record(class_name) => class_name,
        }
    }

    /// Primitives carry no null tag on the wire.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }

    /// The language default: false/zero for primitives, null for the rest.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::OptBool => Value::OptBool(None),
            Self::OptI8 => Value::OptI8(None),
            Self::OptI16 => Value::OptI16(None),
            Self::OptI32 => Value::OptI32(None),
            Self::OptI64 => Value::OptI64(None),
            Self::OptF32 => Value::OptF32(None),
            Self::OptF64 => Value::OptF64(None),
            Self::BoolArray => Value::BoolArray(None),
            Self::I8Array => Value::I8Array(None),
            Self::I16Array => Value::I16Array(None),
            Self::I32Array => Value::I32Array(None),
            Self::I64Array => Value::I64Array(None),
            Self::F32Array => Value::F32Array(None),
            Self::F64Array => Value::F64Array(None),
            Self::Str => Value::Str(None),
            Self::Instant => Value::Instant(None),
            Self::Decimal => Value::Decimal(None),
            Self::Record(_) => Value::Record(None),
        }
    }
}
