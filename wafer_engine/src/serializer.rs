use crate::{EngineError, SchemaRegistry, TypeProvider};
use std::sync::Arc;
use wafer_store::MetaStore;
use wafer_types::bits::{BitReader, BitWriter};
use wafer_types::schema::ClassMetaData;
use wafer_types::types::{FieldType, RecordValue};

/// Serializes records compactly by keeping their schema in a [`MetaStore`]
/// instead of in the payload.
///
/// A payload starts with the schema's compact id and then carries nothing
/// but field values, so it can only be decoded against a store that still
/// holds every schema the payload transitively references: the store must
/// live at least as long as the payloads, and readers on other machines
/// must share the writer's store backing. Entries never change once
/// written, which makes the store trivially cacheable.
///
/// Deserialization maps each stored field onto the current record
/// definition by name and type. Reordered fields are remapped, removed or
/// retyped fields are decoded and dropped, and fields new in the current
/// definition keep their defaults.
pub struct Serializer {
    registry: SchemaRegistry,
    provider: Arc<dyn TypeProvider>,
}

impl Serializer {
    pub fn new(store: Arc<dyn MetaStore>, provider: Arc<dyn TypeProvider>) -> Self {
        Self {
            registry: SchemaRegistry::new(store),
            provider,
        }
    }

    /// A compact binary representation of the supplied record.
    ///
    /// Fields absent from the bag are written as the declared type's
    /// default, so a record built by hand need not be complete.
    pub fn serialize(&self, value: &RecordValue) -> Result<Vec<u8>, EngineError> {
        let def = self
            .provider
            .describe(value.class_name())
            .ok_or_else(|| EngineError::UnknownClass {
                class_name: String::from(value.class_name()),
            })?;
        let (metadata, id) = self.registry.resolve_for_write(ClassMetaData::describe(&def))?;

        let mut w = BitWriter::new(vec![]);
        w.write_dynamic(*id as i64)?;
        for field in metadata.fields() {
            let field_type = FieldType::parse(field.type_name());
            match value.get(field.name()) {
                Some(v) => self.write_value(&mut w, &field_type, v)?,
                None => self.write_value(&mut w, &field_type, &field_type.default_value())?,
            }
        }
        Ok(w.finish()?)
    }

    /// Reassembles a record from a previously serialized payload.
    pub fn deserialize(&self, data: &[u8]) -> Result<RecordValue, EngineError> {
        let mut r = BitReader::new(data);
        let metadata = self.registry.resolve_for_read(r.read_dynamic()?)?;

        let current = self
            .provider
            .describe(metadata.class_name())
            .ok_or_else(|| EngineError::UnknownClass {
                class_name: String::from(metadata.class_name()),
            })?;
        let mut record = self.provider.instantiate(metadata.class_name())?;

        for field in metadata.fields() {
            let stored_type = FieldType::parse(field.type_name());
            // Decoding always runs against the stored type, so the cursor
            // advances past the field even when the value is then dropped.
            let value = self.read_value(&mut r, &stored_type)?;

            match current.field_type(field.name()) {
                Some(current_type) if *current_type == stored_type => {
                    record.set(field.name(), value);
                }
                // Removed or retyped fields are skipped; the record keeps
                // the current definition's default.
                _ => {}
            }
        }

        Ok(record)
    }
}
