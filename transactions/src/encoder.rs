//! Ordered keyed output produced by encoding a transaction.
//!
//! The network expects fields in a fixed order (variant fields first, shared
//! fields after), so the output keeps insertion order instead of sorting
//! keys.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use hedera_types::{Error, Result};

/// Collects keyed fields in the order they are written.
#[derive(Debug, Default)]
pub struct FieldEncoder {
    fields: Vec<(String, Value)>,
}

impl FieldEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key` with the serde encoding of `value`.
    ///
    /// Writing the same key twice is an [`Error::Encoding`]: a later writer
    /// would otherwise silently shadow an earlier one on the wire.
    pub fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        if self.contains(key) {
            return Err(Error::encoding(format!("field `{key}` written twice")));
        }
        let value = serde_json::to_value(value)
            .map_err(|e| Error::encoding(format!("field `{key}`: {e}")))?;
        self.fields.push((key.to_owned(), value));
        Ok(())
    }

    /// Append `key` as standard base64 text.
    pub fn encode_base64(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.encode(key, &STANDARD.encode(bytes))
    }

    /// Append `key` as a list of base64 strings, one per blob, order kept.
    pub fn encode_base64_list<B: AsRef<[u8]>>(&mut self, key: &str, blobs: &[B]) -> Result<()> {
        let encoded: Vec<String> = blobs.iter().map(|blob| STANDARD.encode(blob)).collect();
        self.encode(key, &encoded)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop every field written after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.fields.truncate(len);
    }

    pub fn finish(self) -> EncodedTransaction {
        EncodedTransaction { fields: self.fields }
    }
}

/// The immutable, wire-ready encoding of a transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedTransaction {
    fields: Vec<(String, Value)>,
}

impl EncodedTransaction {
    /// Field names in wire order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A JSON object with keys in wire order.
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.iter().cloned().collect())
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::encoding(e.to_string()))
    }
}

impl Serialize for EncodedTransaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera_types::{AccountReference, PublicKey};

    #[test]
    fn keeps_insertion_order() {
        let mut encoder = FieldEncoder::new();
        encoder.encode("zeta", &1).unwrap();
        encoder.encode("alpha", &2).unwrap();
        encoder.encode("mid", &3).unwrap();
        let encoded = encoder.finish();

        assert_eq!(encoded.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(encoded.to_json_string().unwrap(), r#"{"zeta":1,"alpha":2,"mid":3}"#);
        let object = encoded.to_json();
        let keys: Vec<&String> = object.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn duplicate_key_is_an_encoding_error() {
        let mut encoder = FieldEncoder::new();
        encoder.encode("amount", &1).unwrap();
        let err = encoder.encode("amount", &2).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        assert_eq!(encoder.len(), 1);
    }

    #[test]
    fn serde_failure_is_an_encoding_error() {
        let mut encoder = FieldEncoder::new();
        let alias = AccountReference::aliased(0, 0, PublicKey([3u8; 32]));
        let err = encoder.encode("accountId", &alias).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(encoder.is_empty());
    }

    #[test]
    fn base64_helpers() {
        let mut encoder = FieldEncoder::new();
        encoder.encode_base64("message", b"hello").unwrap();
        encoder.encode_base64_list("metadata", &[b"a".to_vec(), b"bc".to_vec()]).unwrap();
        let encoded = encoder.finish();

        assert_eq!(encoded.get("message"), Some(&Value::from("aGVsbG8=")));
        assert_eq!(encoded.get("metadata"), Some(&serde_json::json!(["YQ==", "YmM="])));
    }
}
