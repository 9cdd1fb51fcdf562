use crate::EngineError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use wafer_types::types::{RecordDef, RecordValue};

/// Source of current record definitions.
///
/// The serializer is oblivious to where definitions come from: a static
/// table, generated code, or a runtime registry all work, as long as
/// `describe` is deterministic for an unchanged type.
pub trait TypeProvider: Send + Sync {
    /// The current definition of the named record type.
    fn describe(&self, class_name: &str) -> Option<Arc<RecordDef>>;

    /// A default-constructed record of the named type.
    fn instantiate(&self, class_name: &str) -> Result<RecordValue, EngineError> {
        match self.describe(class_name) {
            Some(def) => Ok(def.instantiate()),
            None => Err(EngineError::UnknownClass {
                class_name: String::from(class_name),
            }),
        }
    }
}

/// In-memory [`TypeProvider`]: a map of class name to definition.
///
/// Registering a name again replaces the definition; payloads written
/// under the old definition remain readable through the evolution-skip
/// path.
#[derive(Default)]
pub struct TypeRegistry {
    defs: RwLock<HashMap<String, Arc<RecordDef>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, def: RecordDef) -> Arc<RecordDef> {
        let def = Arc::new(def);
        self.defs
            .write()
            .insert(String::from(def.class_name()), Arc::clone(&def));
        def
    }
}

impl TypeProvider for TypeRegistry {
    fn describe(&self, class_name: &str) -> Option<Arc<RecordDef>> {
        self.defs.read().get(class_name).cloned()
    }
}
