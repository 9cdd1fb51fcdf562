use crate::{MetaStore, StoreError};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "data";
const COUNTER_FILE_NAME: &str = "counter";

/// Directory-backed store. Entries and the counter outlive the process,
/// so payloads serialized against it stay decodable across restarts.
///
/// ```text
/// store_dir/
///     counter          next counter value, decimal
///     data/
///         <hex(key)>   one file per key
/// ```
///
/// The store directory is locked exclusively for the lifetime of the
/// instance; a second open of the same directory fails.
pub struct FsStore {
    _lock_dir: File,
    data_dir_path: PathBuf,
    counter: Mutex<PersistedCounter>,
}

impl FsStore {
    pub fn load_or_new<P: AsRef<Path>>(store_dir_path: P) -> Result<Self, StoreError> {
        let store_dir_path = store_dir_path.as_ref();

        fs::create_dir_all(store_dir_path)?;
        let lock_dir = File::open(store_dir_path)?;
        lock_dir.try_lock_exclusive()?;

        let data_dir_path = store_dir_path.join(DATA_DIR_NAME);
        fs::create_dir_all(&data_dir_path)?;

        let counter = PersistedCounter::load_or_new(store_dir_path.join(COUNTER_FILE_NAME))?;

        tracing::debug!(dir = %store_dir_path.display(), "opened fs store");

        Ok(Self {
            _lock_dir: lock_dir,
            data_dir_path,
            counter: Mutex::new(counter),
        })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(2 * key.len());
        for byte in key.as_bytes() {
            write!(name, "{byte:02x}").unwrap();
        }
        self.data_dir_path.join(name)
    }
}

impl MetaStore for FsStore {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), StoreError> {
        fs::write(self.entry_path(key), data)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.entry_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn next_counter(&self) -> Result<u64, StoreError> {
        self.counter.lock().get_and_inc()
    }
}

/// A `u64` that writes through to a file on every increment. The value
/// only grows, so the non-truncating rewrite can never leave a stale tail.
struct PersistedCounter {
    file_path: PathBuf,
    curr_val: u64,
}

impl PersistedCounter {
    fn load_or_new(file_path: PathBuf) -> Result<Self, StoreError> {
        let curr_val = if file_path.exists() {
            let mut s = String::new();
            File::open(&file_path)?.read_to_string(&mut s)?;
            s.parse::<u64>().map_err(|e| StoreError::Counter {
                detail: e.to_string(),
            })?
        } else {
            0
        };

        Ok(Self {
            file_path,
            curr_val,
        })
    }

    fn get_and_inc(&mut self) -> Result<u64, StoreError> {
        let ret = self.curr_val;

        self.curr_val += 1;
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.file_path)?;
        write!(&mut file, "{}", self.curr_val)?;

        Ok(ret)
    }
}
