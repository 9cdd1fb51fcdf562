use thiserror::Error;
use wafer_store::StoreError;
use wafer_types::bits::WireError;

/// Failures surfaced by [`Serializer`](crate::Serializer). Nothing is
/// recovered internally; a field dropped by the evolution-skip path is not
/// an error.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A value does not match the declared type of its field.
    #[error("Value of kind {actual} does not match declared type {declared:?}")]
    ValueMismatch {
        declared: String,
        actual: &'static str,
    },

    /// No current definition for a record type named by a value or by a
    /// stored schema.
    #[error("Unknown record type {class_name:?}")]
    UnknownClass { class_name: String },

    /// A provider could not produce a default-constructed record.
    #[error("Record type {class_name:?} could not be instantiated: {detail}")]
    Instantiate { class_name: String, detail: String },

    /// The payload references a compact id the store has never issued.
    #[error("Unknown compact id {0}")]
    UnknownCompactId(i64),

    /// The store holds no or undecodable bytes for a key the payload
    /// transitively references.
    #[error("Schema store entry {key:?} is missing or undecodable: {detail}")]
    CorruptStore { key: String, detail: String },

    #[error("Corrupt payload: {0}")]
    CorruptStream(#[from] WireError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
