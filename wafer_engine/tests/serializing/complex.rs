use crate::helpers::gen;
use anyhow::Result;
use wafer_types::types::{FieldType, RecordDef, Value};

#[test]
fn every_kind_with_zeroed_values() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    registry.register(gen::note_def());
    registry.register(gen::everything_def());

    let rec = gen::gen_everything_zeroed();
    let payload = serializer.serialize(&rec)?;
    assert_eq!(rec, serializer.deserialize(&payload)?);
    Ok(())
}

#[test]
fn every_kind_with_extreme_values() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    registry.register(gen::note_def());
    registry.register(gen::everything_def());

    let rec = gen::gen_everything_extreme();
    let payload = serializer.serialize(&rec)?;
    assert_eq!(rec, serializer.deserialize(&payload)?);
    Ok(())
}

/// Two fields of the same nested type hold their values independently.
#[test]
fn sibling_nested_records_do_not_alias() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    registry.register(gen::note_def());
    let pair_def = registry.register(
        RecordDef::new("Pair")
            .with_field("left", FieldType::Record(String::from("Note")))
            .with_field("right", FieldType::Record(String::from("Note"))),
    );

    let mut pair = pair_def.instantiate();
    pair.set("left", Value::Record(Some(Box::new(gen::gen_note("lhs")))));
    pair.set("right", Value::Record(Some(Box::new(gen::gen_note("rhs")))));

    let decoded = serializer.deserialize(&serializer.serialize(&pair)?)?;
    assert_eq!(pair, decoded);
    assert_ne!(decoded.get("left"), decoded.get("right"));
    Ok(())
}

#[test]
fn null_nested_record_round_trips() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    registry.register(gen::note_def());
    let wrap_def = registry.register(
        RecordDef::new("Wrap").with_field("child", FieldType::Record(String::from("Note"))),
    );

    let wrap = wrap_def.instantiate();
    let decoded = serializer.deserialize(&serializer.serialize(&wrap)?)?;
    assert_eq!(Some(&Value::Record(None)), decoded.get("child"));
    Ok(())
}

/// A null string and a null boxed scalar cost one bit each: compact id
/// (7 bits for id 0) + 2 null bits fit in two padded bytes.
#[test]
fn nulls_cost_one_bit_each() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    let sparse_def = registry.register(
        RecordDef::new("Sparse")
            .with_field("label", FieldType::Str)
            .with_field("count", FieldType::OptI32),
    );

    let sparse = sparse_def.instantiate();
    let payload = serializer.serialize(&sparse)?;
    assert_eq!(2, payload.len());

    let decoded = serializer.deserialize(&payload)?;
    assert_eq!(Some(&Value::Str(None)), decoded.get("label"));
    assert_eq!(Some(&Value::OptI32(None)), decoded.get("count"));
    Ok(())
}
