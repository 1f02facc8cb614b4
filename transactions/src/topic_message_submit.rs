//! Consensus topic message submission.

use hedera_types::{Result, TopicId};

use crate::encoder::FieldEncoder;
use crate::transaction::{Transaction, TransactionData};

/// Submit a message for consensus on a topic.
pub type TopicMessageSubmitTransaction = Transaction<TopicMessageSubmitTransactionData>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicMessageSubmitTransactionData {
    /// The topic to submit the message to.
    pub topic_id: Option<TopicId>,

    /// Message payload, sent as base64.
    pub message: Vec<u8>,
}

impl TopicMessageSubmitTransaction {
    pub fn get_topic_id(&self) -> Option<TopicId> {
        self.data().topic_id
    }

    pub fn topic_id(&mut self, topic_id: TopicId) -> &mut Self {
        self.data_mut().topic_id = Some(topic_id);
        self
    }

    pub fn get_message(&self) -> &[u8] {
        &self.data().message
    }

    pub fn message(&mut self, message: impl Into<Vec<u8>>) -> &mut Self {
        self.data_mut().message = message.into();
        self
    }
}

impl TransactionData for TopicMessageSubmitTransactionData {
    fn kind(&self) -> &'static str {
        "topicMessageSubmit"
    }

    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
        encoder.encode("topicId", &self.topic_id)?;
        encoder.encode_base64("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn encodes_topic_and_base64_message() {
        let mut tx = TopicMessageSubmitTransaction::new();
        tx.topic_id(TopicId::from_num(9)).message("hello").transaction_memo("greeting");

        let encoded = tx.encode().unwrap();
        let keys: Vec<&str> = encoded.keys().take(2).collect();
        assert_eq!(keys, ["topicId", "message"]);
        assert_eq!(encoded.get("topicId"), Some(&json!("0.0.9")));
        assert_eq!(encoded.get("message"), Some(&json!("aGVsbG8=")));
        assert_eq!(encoded.get("transactionMemo"), Some(&json!("greeting")));
    }

    #[test]
    fn empty_message_and_unset_topic() {
        let encoded = TopicMessageSubmitTransaction::new().encode().unwrap();
        assert_eq!(encoded.get("topicId"), Some(&Value::Null));
        assert_eq!(encoded.get("message"), Some(&json!("")));
    }
}
