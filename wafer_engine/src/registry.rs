use crate::EngineError;
use derive_more::{Deref, From};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use wafer_store::MetaStore;
use wafer_types::schema::ClassMetaData;

/// Small integer alias of a schema, the only self-describing element of a
/// payload.
#[derive(From, Deref, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct CompactId(u64);

impl CompactId {
    /// The store key of this id's reverse mapping.
    pub fn store_key(&self) -> String {
        self.0.to_string()
    }
}

/// Mediates between the codec and the store.
///
/// The store holds two mappings per schema: `key -> encoded schema` and
/// `str(compact_id) -> key`. Stored schemas are immutable, so both caches
/// below are unbounded and racing writers only ever install identical
/// entries.
pub struct SchemaRegistry {
    store: Arc<dyn MetaStore>,
    by_key: RwLock<HashMap<String, (Arc<ClassMetaData>, CompactId)>>,
    by_id: RwLock<HashMap<CompactId, Arc<ClassMetaData>>>,
}

impl SchemaRegistry {
    pub fn new(store: Arc<dyn MetaStore>) -> Self {
        Self {
            store,
            by_key: RwLock::new(HashMap::new()),
            by_id: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves the compact id for a schema about to be written,
    /// registering the schema on first sight.
    ///
    /// The stored schema bytes do not carry the compact id and the store
    /// cannot be iterated, so a store hit whose id this process has never
    /// cached is given a fresh id; multiple ids aliasing one key is an
    /// accepted cost, and each of them resolves on read.
    pub fn resolve_for_write(
        &self,
        metadata: ClassMetaData,
    ) -> Result<(Arc<ClassMetaData>, CompactId), EngineError> {
        if let Some((metadata, id)) = self.by_key.read().get(metadata.key()) {
            return Ok((Arc::clone(metadata), *id));
        }

        let key = String::from(metadata.key());
        let id = match self.store.load(&key)? {
            Some(bytes) => {
                decode_schema(&key, &bytes)?;
                let id = CompactId::from(self.store.next_counter()?);
                self.store.store(&id.store_key(), key.as_bytes())?;
                tracing::debug!(key = %key, id = *id, "assigned new compact id to known schema");
                id
            }
            None => {
                let id = CompactId::from(self.store.next_counter()?);
                self.store.store(&id.store_key(), key.as_bytes())?;
                self.store.store(&key, &metadata.to_bytes()?)?;
                tracing::debug!(key = %key, id = *id, "registered schema");
                id
            }
        };

        let metadata = Arc::new(metadata);
        self.by_key
            .write()
            .entry(key)
            .or_insert((Arc::clone(&metadata), id));
        self.by_id
            .write()
            .entry(id)
            .or_insert(Arc::clone(&metadata));
        Ok((metadata, id))
    }

    /// Recovers the schema a payload's leading compact id refers to.
    pub fn resolve_for_read(&self, raw_id: i64) -> Result<Arc<ClassMetaData>, EngineError> {
        let id = CompactId::from(
            u64::try_from(raw_id).map_err(|_| EngineError::UnknownCompactId(raw_id))?,
        );

        if let Some(metadata) = self.by_id.read().get(&id) {
            return Ok(Arc::clone(metadata));
        }

        let key_bytes = self
            .store
            .load(&id.store_key())?
            .ok_or(EngineError::UnknownCompactId(raw_id))?;
        let key = String::from_utf8(key_bytes).map_err(|e| EngineError::CorruptStore {
            key: id.store_key(),
            detail: e.to_string(),
        })?;

        let bytes = self
            .store
            .load(&key)?
            .ok_or_else(|| EngineError::CorruptStore {
                key: key.clone(),
                detail: String::from("schema bytes missing"),
            })?;
        let metadata = Arc::new(decode_schema(&key, &bytes)?);

        self.by_id
            .write()
            .entry(id)
            .or_insert(Arc::clone(&metadata));
        self.by_key
            .write()
            .entry(key)
            .or_insert((Arc::clone(&metadata), id));
        Ok(metadata)
    }
}

fn decode_schema(key: &str, bytes: &[u8]) -> Result<ClassMetaData, EngineError> {
    let metadata = ClassMetaData::from_bytes(bytes).map_err(|e| EngineError::CorruptStore {
        key: String::from(key),
        detail: e.to_string(),
    })?;
    if metadata.key() != key {
        return Err(EngineError::CorruptStore {
            key: String::from(key),
            detail: format!("decoded schema has key {:?}", metadata.key()),
        });
    }
    Ok(metadata)
}
