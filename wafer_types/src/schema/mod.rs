//! # Stored schema format
//!
//! A schema is stored under the key `"{class_name}/{hex(fingerprint)}"`,
//! where the fingerprint is SHA-1 over the NUL-delimited field list. The
//! stored bytes use the bit stream of [`crate::bits`]:
//!
//! ```text
//! struct StoredSchema {
//!     class_name:     Utf,
//!     field_count:    DynamicNumber,
//!     fields:         [{ name: Utf, type_name: Utf }; field_count],
//! }
//! ```
//!
//! The compact id a registry assigns to a schema is not part of these
//! bytes; it lives only in the reverse mapping `str(id) -> key`.

mod metadata;


pub use metadata::*;
