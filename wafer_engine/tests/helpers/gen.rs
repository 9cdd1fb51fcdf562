use num_bigint::BigInt;
use std::sync::Arc;
use wafer_engine::{Serializer, TypeProvider, TypeRegistry};
use wafer_store::{MemoryStore, MetaStore};
use wafer_types::types::{Decimal, FieldType, RecordDef, RecordValue, Value};

/// A serializer over a fresh in-memory store, with the store and the type
/// registry kept reachable for assertions and re-registration.
pub fn new_serializer() -> (Arc<MemoryStore>, Arc<TypeRegistry>, Serializer) {
    let store = Arc::new(MemoryStore::new());
    let registry = Arc::new(TypeRegistry::new());
    let serializer = Serializer::new(
        Arc::clone(&store) as Arc<dyn MetaStore>,
        Arc::clone(&registry) as Arc<dyn TypeProvider>,
    );
    (store, registry, serializer)
}

pub fn note_def() -> RecordDef {
    RecordDef::new("Note").with_field("content", FieldType::Str)
}

pub fn gen_note<S: AsRef<str>>(content: S) -> RecordValue {
    let mut rec = note_def().instantiate();
    rec.set("content", Value::Str(Some(String::from(content.as_ref()))));
    rec
}

/// One field of every supported kind, plus a nested record.
pub fn everything_def() -> RecordDef {
    RecordDef::new("Everything")
        .with_field("flag", FieldType::Bool)
        .with_field("tiny", FieldType::I8)
        .with_field("small", FieldType::I16)
        .with_field("medium", FieldType::I32)
        .with_field("large", FieldType::I64)
        .with_field("single", FieldType::F32)
        .with_field("double", FieldType::F64)
        .with_field("absent_note", FieldType::Str)
        .with_field("maybe_flag", FieldType::OptBool)
        .with_field("maybe_tiny", FieldType::OptI8)
        .with_field("maybe_small", FieldType::OptI16)
        .with_field("maybe_medium", FieldType::OptI32)
        .with_field("maybe_large", FieldType::OptI64)
        .with_field("maybe_single", FieldType::OptF32)
        .with_field("maybe_double", FieldType::OptF64)
        .with_field("flags", FieldType::BoolArray)
        .with_field("tinies", FieldType::I8Array)
        .with_field("smalls", FieldType::I16Array)
        .with_field("mediums", FieldType::I32Array)
        .with_field("larges", FieldType::I64Array)
        .with_field("singles", FieldType::F32Array)
        .with_field("doubles", FieldType::F64Array)
        .with_field("note", FieldType::Str)
        .with_field("at", FieldType::Instant)
        .with_field("amount", FieldType::Decimal)
        .with_field("child", FieldType::Record(String::from("Note")))
}

/// Default-ish values: zeroed scalars, zero wrappers (not null), empty
/// arrays, the epoch instant, decimal zero, a present nested record.
pub fn gen_everything_zeroed() -> RecordValue {
    let mut rec = everything_def().instantiate();
    rec.set("maybe_flag", Value::OptBool(Some(false)));
    rec.set("maybe_tiny", Value::OptI8(Some(0)));
    rec.set("maybe_small", Value::OptI16(Some(0)));
    rec.set("maybe_medium", Value::OptI32(Some(0)));
    rec.set("maybe_large", Value::OptI64(Some(0)));
    rec.set("maybe_single", Value::OptF32(Some(0.0)));
    rec.set("maybe_double", Value::OptF64(Some(0.0)));
    rec.set("flags", Value::BoolArray(Some(vec![])));
    rec.set("tinies", Value::I8Array(Some(vec![])));
    rec.set("smalls", Value::I16Array(Some(vec![])));
    rec.set("mediums", Value::I32Array(Some(vec![])));
    rec.set("larges", Value::I64Array(Some(vec![])));
    rec.set("singles", Value::F32Array(Some(vec![])));
    rec.set("doubles", Value::F64Array(Some(vec![])));
    rec.set("note", Value::Str(Some(String::from("string"))));
    rec.set("at", Value::Instant(Some(0)));
    rec.set("amount", Value::Decimal(Some(Decimal::new(BigInt::from(0), 0))));
    rec.set("child", Value::Record(Some(Box::new(gen_note("some string")))));
    rec
}

/// Extreme values and populated arrays.
pub fn gen_everything_extreme() -> RecordValue {
    let mut rec = everything_def().instantiate();
    rec.set("flag", Value::Bool(true));
    rec.set("tiny", Value::I8(i8::MIN));
    rec.set("small", Value::I16(i16::MAX));
    rec.set("medium", Value::I32(i32::MIN));
    rec.set("large", Value::I64(i64::MAX));
    rec.set("single", Value::F32(f32::MIN_POSITIVE));
    rec.set("double", Value::F64(f64::MAX));
    rec.set("maybe_flag", Value::OptBool(Some(true)));
    rec.set("maybe_tiny", Value::OptI8(Some(i8::MAX)));
    rec.set("maybe_small", Value::OptI16(Some(i16::MIN)));
    rec.set("maybe_medium", Value::OptI32(Some(i32::MAX)));
    rec.set("maybe_large", Value::OptI64(Some(i64::MIN)));
    rec.set("maybe_single", Value::OptF32(Some(f32::MAX)));
    rec.set("maybe_double", Value::OptF64(Some(-f64::MAX)));
    rec.set("flags", Value::BoolArray(Some(vec![false, true])));
    rec.set("tinies", Value::I8Array(Some(vec![-1, 0, 1])));
    rec.set("smalls", Value::I16Array(Some(vec![-1435, 2345])));
    rec.set("mediums", Value::I32Array(Some(vec![234, 529349])));
    rec.set("larges", Value::I64Array(Some(vec![i64::MIN, 123])));
    rec.set("singles", Value::F32Array(Some(vec![-f32::MAX, 123.0])));
    rec.set("doubles", Value::F64Array(Some(vec![-f64::MIN_POSITIVE, 1.1])));
    rec.set(
        "note",
        Value::Str(Some(String::from("~!@#$%^&*()_+`1234567890-={}|[]\\:\",./<?>"))),
    );
    rec.set("at", Value::Instant(Some(1_234_567_890_123)));
    rec.set(
        "amount",
        Value::Decimal(Some(Decimal::new(BigInt::from(42_387_293_948_234i64), 0))),
    );
    rec.set("child", Value::Record(Some(Box::new(gen_note("some string")))));
    rec
}
