//! Pseudo-random number generation on the network.

use hedera_types::Result;

use crate::encoder::FieldEncoder;
use crate::transaction::{Transaction, TransactionData};

/// Ask the network for a pseudo-random number.
///
/// With a `range` the record carries a number in `[0, range)`; without one
/// it carries 384 bits of random bytes.
pub type PrngTransaction = Transaction<PrngTransactionData>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrngTransactionData {
    pub range: Option<u32>,
}

impl PrngTransaction {
    pub fn get_range(&self) -> Option<u32> {
        self.data().range
    }

    pub fn range(&mut self, range: u32) -> &mut Self {
        self.data_mut().range = Some(range);
        self
    }
}

impl TransactionData for PrngTransactionData {
    fn kind(&self) -> &'static str {
        "prng"
    }

    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
        encoder.encode("range", &self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn range_is_first_field() {
        let mut tx = PrngTransaction::new();
        tx.range(100);
        let encoded = tx.encode().unwrap();
        assert_eq!(encoded.keys().next(), Some("range"));
        assert_eq!(encoded.get("range"), Some(&json!(100)));
    }

    #[test]
    fn unset_range_is_null() {
        let encoded = PrngTransaction::new().encode().unwrap();
        assert_eq!(encoded.get("range"), Some(&Value::Null));
    }
}
