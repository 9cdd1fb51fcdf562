use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Persisted counter is unreadable: {detail}")]
    Counter { detail: String },
}
