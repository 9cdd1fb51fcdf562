use crate::bits::{BitReader, BitWriter, WireError};
use crate::types::RecordDef;
use derive_more::Constructor;
use sha1::{Digest, Sha1};
use shorthand::ShortHand;
use std::fmt::Write as _;

/// One serialized field: its name and canonical type name.
#[derive(ShortHand, Constructor, PartialEq, Eq, Clone, Debug)]
#[shorthand(disable(set))]
pub struct FieldInfo {
    name: String,
    type_name: String,
}

/// Normalized schema of one record type.
///
/// The field order is the authoritative serialization order for this
/// schema version. The key is derived at construction and never changes;
/// two schemas with the same field list share the same key.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ClassMetaData {
    class_name: String,
    fields: Vec<FieldInfo>,
    key: String,
}

impl ClassMetaData {
    pub fn new(class_name: impl Into<String>, fields: Vec<FieldInfo>) -> Self {
        let class_name = class_name.into();
        let key = Self::format_key(&class_name, &Self::fingerprint(&fields));
        Self {
            class_name,
            fields,
            key,
        }
    }

    /// The schema of a record definition, fields in the definition's
    /// (lexicographic) iteration order.
    pub fn describe(def: &RecordDef) -> Self {
        let fields = def
            .fields()
            .map(|(name, field_type)| {
                FieldInfo::new(name.clone(), String::from(field_type.canonical_name()))
            })
            .collect();
        Self::new(def.class_name(), fields)
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// SHA-1 over `name NUL type_name NUL` per field, in order. The NUL
    /// delimiters keep `("ab", "c")` and `("a", "bc")` distinct.
    fn fingerprint(fields: &[FieldInfo]) -> [u8; 20] {
        let mut hasher = Sha1::new();
        for field in fields {
            hasher.update(field.name().as_bytes());
            hasher.update([0u8]);
            hasher.update(field.type_name().as_bytes());
            hasher.update([0u8]);
        }
        hasher.finalize().into()
    }

    fn format_key(class_name: &str, fingerprint: &[u8; 20]) -> String {
        let mut hex = String::with_capacity(2 * fingerprint.len());
        for byte in fingerprint {
            write!(hex, "{byte:02x}").unwrap();
        }
        format!("{class_name}/{hex}")
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        let mut w = BitWriter::new(vec![]);
        w.write_utf(&self.class_name)?;
        w.write_len(self.fields.len())?;
        for field in &self.fields {
            w.write_utf(field.name())?;
            w.write_utf(field.type_name())?;
        }
        w.finish()
    }

    /// Decodes stored schema bytes. The key is recomputed from the decoded
    /// field list; callers holding the store key can compare the two to
    /// detect a corrupt entry.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        let mut r = BitReader::new(bytes);
        let class_name = r.read_utf()?;
        let field_count = r.read_len()?;
        let mut fields = Vec::with_capacity(field_count);
        for _ in 0..field_count {
            let name = r.read_utf()?;
            let type_name = r.read_utf()?;
            fields.push(FieldInfo::new(name, type_name));
        }
        Ok(Self::new(class_name, fields))
    }
}
