use crate::{MetaStore, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory store, for tests and for data whose lifetime is bounded by
/// the process: payloads serialized against it cannot be decoded once this
/// particular instance is gone.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
    counter: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetaStore for MemoryStore {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        self.entries.write().insert(String::from(key), data.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn next_counter(&self) -> Result<u64, StoreError> {
        Ok(self.counter.fetch_add(1, Ordering::SeqCst))
    }
}
