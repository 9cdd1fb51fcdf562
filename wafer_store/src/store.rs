use crate::StoreError;

/// The side-channel that holds serialization schemas: an opaque key/bytes
/// map plus a monotonic counter.
///
/// Callers never re-write a changed value for a key they have written
/// before, so implementations may treat entries as immutable once present
/// and may cache `load` results indefinitely.
///
/// # Thread safety
///
/// `next_counter` must be atomic across threads. Concurrent `store`/`load`
/// calls on disjoint keys must be safe; concurrent writers of the same key
/// are only ever installing identical bytes.
pub trait MetaStore: Send + Sync {
    /// Unconditional put.
    fn store(&self, key: &str, data: &[u8]) -> Result<(), StoreError>;

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Increments the counter and returns its previous value. Every id a
    /// payload references must stay reachable through this store, so the
    /// counter must live at least as long as the entries do.
    fn next_counter(&self) -> Result<u64, StoreError>;
}
