use crate::types::{FieldType, Value};
use std::collections::BTreeMap;

/// Runtime definition of a record type: its class name plus the declared
/// field types.
///
/// Fields are held in a `BTreeMap`, so every iteration is in lexicographic
/// field-name order. Schema fingerprints, the serialization order, and the
/// reader's field loop all derive from this iteration, which keeps them
/// identical regardless of the order fields were declared in.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RecordDef {
    class_name: String,
    fields: BTreeMap<String, FieldType>,
}

impl RecordDef {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldType)> {
        self.fields.iter()
    }

    pub fn field_type(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    /// A record with every declared field at its language default.
    pub fn instantiate(&self) -> RecordValue {
        let fields = self
            .fields
            .iter()
            .map(|(name, field_type)| (name.clone(), field_type.default_value()))
            .collect();
        RecordValue {
            class_name: self.class_name.clone(),
            fields,
        }
    }
}

/// A dynamic record instance: a field bag tagged with its class name.
#[derive(PartialEq, Clone, Debug)]
pub struct RecordValue {
    class_name: String,
    fields: BTreeMap<String, Value>,
}

impl RecordValue {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Assigns into an existing field. Returns false when no field of that
    /// name exists, leaving the record untouched; readers use this to drop
    /// values whose field is gone from the current definition.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        match self.fields.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Adds or replaces a field unconditionally.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}
