use crate::helpers::gen;
use anyhow::Result;
use wafer_types::types::{FieldType, RecordDef, Value};

/// A field removed and a field added between write and read: the stored
/// value of the removed field is consumed and dropped, the surviving field
/// lands by name, the new field keeps its default.
#[test]
fn removed_and_added_fields() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    let v1 = registry.register(
        RecordDef::new("Doc")
            .with_field("a", FieldType::I32)
            .with_field("b", FieldType::Str),
    );

    let mut doc = v1.instantiate();
    doc.set("a", Value::I32(7));
    doc.set("b", Value::Str(Some(String::from("x"))));
    let payload = serializer.serialize(&doc)?;

    registry.register(
        RecordDef::new("Doc")
            .with_field("b", FieldType::Str)
            .with_field("c", FieldType::I32),
    );

    let decoded = serializer.deserialize(&payload)?;
    assert_eq!(None, decoded.get("a"));
    assert_eq!(Some(&Value::Str(Some(String::from("x")))), decoded.get("b"));
    assert_eq!(Some(&Value::I32(0)), decoded.get("c"));
    Ok(())
}

/// Appending fields to a type leaves old payloads readable; the new
/// fields keep their defaults.
#[test]
fn appended_fields_keep_defaults() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    let v1 = registry.register(RecordDef::new("Doc").with_field("a", FieldType::I32));

    let mut doc = v1.instantiate();
    doc.set("a", Value::I32(41));
    let payload = serializer.serialize(&doc)?;

    registry.register(
        RecordDef::new("Doc")
            .with_field("a", FieldType::I32)
            .with_field("z_extra", FieldType::Str),
    );

    let decoded = serializer.deserialize(&payload)?;
    assert_eq!(Some(&Value::I32(41)), decoded.get("a"));
    assert_eq!(Some(&Value::Str(None)), decoded.get("z_extra"));
    Ok(())
}

/// A retyped field is skipped, and the skip consumes exactly the stored
/// field's bits: the field after it still decodes correctly.
#[test]
fn retyped_field_is_skipped() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    let v1 = registry.register(
        RecordDef::new("Doc")
            .with_field("a", FieldType::I32)
            .with_field("b", FieldType::Str),
    );

    let mut doc = v1.instantiate();
    doc.set("a", Value::I32(999));
    doc.set("b", Value::Str(Some(String::from("kept"))));
    let payload = serializer.serialize(&doc)?;

    registry.register(
        RecordDef::new("Doc")
            .with_field("a", FieldType::Str)
            .with_field("b", FieldType::Str),
    );

    let decoded = serializer.deserialize(&payload)?;
    assert_eq!(Some(&Value::Str(None)), decoded.get("a"));
    assert_eq!(
        Some(&Value::Str(Some(String::from("kept")))),
        decoded.get("b")
    );
    Ok(())
}

/// The same field set written from a differently declared order produces
/// the same schema, so nothing is skipped.
#[test]
fn declaration_order_does_not_matter() -> Result<()> {
    let (_store, registry, serializer) = gen::new_serializer();
    let v1 = registry.register(
        RecordDef::new("Doc")
            .with_field("a", FieldType::I32)
            .with_field("b", FieldType::Str),
    );

    let mut doc = v1.instantiate();
    doc.set("a", Value::I32(3));
    doc.set("b", Value::Str(Some(String::from("y"))));
    let payload = serializer.serialize(&doc)?;

    // Same fields, reversed declaration order.
    registry.register(
        RecordDef::new("Doc")
            .with_field("b", FieldType::Str)
            .with_field("a", FieldType::I32),
    );

    let decoded = serializer.deserialize(&payload)?;
    assert_eq!(Some(&Value::I32(3)), decoded.get("a"));
    assert_eq!(Some(&Value::Str(Some(String::from("y")))), decoded.get("b"));
    Ok(())
}
