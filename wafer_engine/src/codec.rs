//! Field-value encoding. Dispatch is by the declared [`FieldType`], never
//! by the runtime value, in two levels: `write_value`/`read_value` handle
//! primitives and the null tag of everything else, then
//! `write_object`/`read_object` handle the non-null object bodies.

use crate::{EngineError, Serializer};
use num_bigint::BigInt;
use std::io::{Read, Write};
use wafer_types::bits::{BitReader, BitWriter};
use wafer_types::types::{Decimal, FieldType, Value};

impl Serializer {
    /// Primitives are written bare; anything else gets a leading null bit
    /// (1 means null) and, when non-null, its object body.
    pub(crate) fn write_value<W: Write>(
        &self,
        w: &mut BitWriter<W>,
        field_type: &FieldType,
        value: &Value,
    ) -> Result<(), EngineError> {
        match (field_type, value) {
            (FieldType::Bool, Value::Bool(v)) => w.write_bit(*v)?,
            (FieldType::I8, Value::I8(v)) => w.write_dynamic(*v as i64)?,
            (FieldType::I16, Value::I16(v)) => w.write_dynamic(*v as i64)?,
            (FieldType::I32, Value::I32(v)) => w.write_dynamic(*v as i64)?,
            (FieldType::I64, Value::I64(v)) => w.write_i64(*v)?,
            (FieldType::F32, Value::F32(v)) => w.write_f32(*v)?,
            (FieldType::F64, Value::F64(v)) => w.write_f64(*v)?,
            _ if field_type.is_primitive() => return Err(mismatch(field_type, value)),
            _ => {
                let null = value.is_null();
                w.write_bit(null)?;
                if !null {
                    self.write_object(w, field_type, value)?;
                }
            }
        }
        Ok(())
    }

    fn write_object<W: Write>(
        &self,
        w: &mut BitWriter<W>,
        field_type: &FieldType,
        value: &Value,
    ) -> Result<(), EngineError> {
        match (field_type, value) {
            (FieldType::OptBool, Value::OptBool(Some(v))) => w.write_bit(*v)?,
            (FieldType::OptI8, Value::OptI8(Some(v))) => w.write_dynamic(*v as i64)?,
            (FieldType::OptI16, Value::OptI16(Some(v))) => w.write_dynamic(*v as i64)?,
            (FieldType::OptI32, Value::OptI32(Some(v))) => w.write_dynamic(*v as i64)?,
            (FieldType::OptI64, Value::OptI64(Some(v))) => w.write_i64(*v)?,
            (FieldType::OptF32, Value::OptF32(Some(v))) => w.write_f32(*v)?,
            (FieldType::OptF64, Value::OptF64(Some(v))) => w.write_f64(*v)?,
            (FieldType::BoolArray, Value::BoolArray(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_bit(*el)?;
                }
            }
            (FieldType::I8Array, Value::I8Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_dynamic(*el as i64)?;
                }
            }
            (FieldType::I16Array, Value::I16Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_dynamic(*el as i64)?;
                }
            }
            (FieldType::I32Array, Value::I32Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_dynamic(*el as i64)?;
                }
            }
            (FieldType::I64Array, Value::I64Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_i64(*el)?;
                }
            }
            (FieldType::F32Array, Value::F32Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_f32(*el)?;
                }
            }
            (FieldType::F64Array, Value::F64Array(Some(els))) => {
                w.write_len(els.len())?;
                for el in els {
                    w.write_f64(*el)?;
                }
            }
            (FieldType::Str, Value::Str(Some(s))) => w.write_utf(s)?,
            (FieldType::Instant, Value::Instant(Some(millis))) => w.write_i64(*millis)?,
            (FieldType::Decimal, Value::Decimal(Some(decimal))) => {
                write_byte_body(w, &decimal.unscaled().to_signed_bytes_be())?;
                w.write_dynamic(decimal.scale() as i64)?;
            }
            (FieldType::Record(_), Value::Record(Some(record))) => {
                // A nested record is a payload of its own, embedded as a
                // byte array; its schema registers like any other.
                let data = self.serialize(record)?;
                write_byte_body(w, &data)?;
            }
            _ => return Err(mismatch(field_type, value)),
        }
        Ok(())
    }

    /// Mirror of [`Self::write_value`]. A null tag yields the type's null
    /// value without consuming a body.
    pub(crate) fn read_value<R: Read>(
        &self,
        r: &mut BitReader<R>,
        field_type: &FieldType,
    ) -> Result<Value, EngineError> {
        let value = match field_type {
            FieldType::Bool => Value::Bool(r.read_bit()?),
            FieldType::I8 => Value::I8(r.read_dynamic()? as i8),
            FieldType::I16 => Value::I16(r.read_dynamic()? as i16),
            FieldType::I32 => Value::I32(r.read_dynamic()? as i32),
            FieldType::I64 => Value::I64(r.read_i64()?),
            FieldType::F32 => Value::F32(r.read_f32()?),
            FieldType::F64 => Value::F64(r.read_f64()?),
            _ => {
                if r.read_bit()? {
                    field_type.default_value()
                } else {
                    self.read_object(r, field_type)?
                }
            }
        };
        Ok(value)
    }

    fn read_object<R: Read>(
        &self,
        r: &mut BitReader<R>,
        field_type: &FieldType,
    ) -> Result<Value, EngineError> {
        let value = match field_type {
            FieldType::OptBool => Value::OptBool(Some(r.read_bit()?)),
            FieldType::OptI8 => Value::OptI8(Some(r.read_dynamic()? as i8)),
            FieldType::OptI16 => Value::OptI16(Some(r.read_dynamic()? as i16)),
            FieldType::OptI32 => Value::OptI32(Some(r.read_dynamic()? as i32)),
            FieldType::OptI64 => Value::OptI64(Some(r.read_i64()?)),
            FieldType::OptF32 => Value::OptF32(Some(r.read_f32()?)),
            FieldType::OptF64 => Value::OptF64(Some(r.read_f64()?)),
            FieldType::BoolArray => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_bit()?);
                }
                Value::BoolArray(Some(els))
            }
            FieldType::I8Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_dynamic()? as i8);
                }
                Value::I8Array(Some(els))
            }
            FieldType::I16Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_dynamic()? as i16);
                }
                Value::I16Array(Some(els))
            }
            FieldType::I32Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_dynamic()? as i32);
                }
                Value::I32Array(Some(els))
            }
            FieldType::I64Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_i64()?);
                }
                Value::I64Array(Some(els))
            }
            FieldType::F32Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_f32()?);
                }
                Value::F32Array(Some(els))
            }
            FieldType::F64Array => {
                let len = r.read_len()?;
                let mut els = Vec::with_capacity(len);
                for _ in 0..len {
                    els.push(r.read_f64()?);
                }
                Value::F64Array(Some(els))
            }
            FieldType::Str => Value::Str(Some(r.read_utf()?)),
            FieldType::Instant => Value::Instant(Some(r.read_i64()?)),
            FieldType::Decimal => {
                let unscaled = BigInt::from_signed_bytes_be(&read_byte_body(r)?);
                let scale = r.read_dynamic()? as i32;
                Value::Decimal(Some(Decimal::new(unscaled, scale)))
            }
            FieldType::Record(_) => {
                let data = read_byte_body(r)?;
                Value::Record(Some(Box::new(self.deserialize(&data)?)))
            }
            FieldType::Bool
            | FieldType::I8
            | FieldType::I16
            | FieldType::I32
            | FieldType::I64
            | FieldType::F32
            | FieldType::F64 => {
                return Err(EngineError::ValueMismatch {
                    declared: String::from(field_type.canonical_name()),
                    actual: "null-tagged primitive",
                })
            }
        };
        Ok(value)
    }
}

/// The object body of a byte array: a length, then each byte as a signed
/// dynamic number. Decimal magnitudes and embedded payloads use this.
fn write_byte_body<W: Write>(w: &mut BitWriter<W>, data: &[u8]) -> Result<(), EngineError> {
    w.write_len(data.len())?;
    for byte in data {
        w.write_dynamic(*byte as i8 as i64)?;
    }
    Ok(())
}

fn read_byte_body<R: Read>(r: &mut BitReader<R>) -> Result<Vec<u8>, EngineError> {
    let len = r.read_len()?;
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        data.push(r.read_dynamic()? as i8 as u8);
    }
    Ok(data)
}

fn mismatch(field_type: &FieldType, value: &Value) -> EngineError {
    EngineError::ValueMismatch {
        declared: String::from(field_type.canonical_name()),
        actual: value.kind_name(),
    }
}
