//! The shared transaction shape and its two-phase encode.

use std::fmt;
use std::time::Duration;

use hedera_types::{AccountReference, Hbar, Result, TransactionId};

use crate::config::SdkConfig;
use crate::encoder::{EncodedTransaction, FieldEncoder};

/// Capability every transaction kind implements.
///
/// The set of kinds is open: a new ledger operation is a new type
/// implementing this trait, wrapped in [`Transaction`].
pub trait TransactionData: Clone + fmt::Debug {
    /// Short camelCase name of the operation, used in logs.
    fn kind(&self) -> &'static str;

    /// Write this kind's own fields. Called before the shared fields.
    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()>;
}

/// Fields every transaction carries regardless of kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionBase {
    /// Nodes the transaction may be submitted to. `None` lets the client pick.
    pub node_account_ids: Option<Vec<AccountReference>>,

    /// Upper bound on the fee the payer is willing to pay.
    pub max_transaction_fee: Option<Hbar>,

    pub transaction_memo: String,

    /// How long after the valid start the transaction may be processed.
    /// Encoded in whole seconds; any sub-second part is truncated.
    pub transaction_valid_duration: Option<Duration>,

    pub transaction_id: Option<TransactionId>,
}

impl TransactionBase {
    /// Append the shared fields. Always runs after the kind's own fields.
    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
        encoder.encode("nodeAccountIds", &self.node_account_ids)?;
        encoder.encode("maxTransactionFee", &self.max_transaction_fee)?;
        encoder.encode("transactionMemo", &self.transaction_memo)?;
        encoder.encode(
            "transactionValidDuration",
            &self.transaction_valid_duration.map(|d| d.as_secs()),
        )?;
        encoder.encode("transactionId", &self.transaction_id)
    }
}

/// A transaction request: kind-specific data plus the shared base fields.
///
/// Built with chained setters that take and return `&mut Self`; later calls
/// overwrite earlier ones. Setters never validate. Finish every mutation
/// before calling [`Transaction::encode`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction<D> {
    base: TransactionBase,
    data: D,
}

impl<D: Default> Transaction<D> {
    /// A transaction with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Transaction<D> {
    /// Assemble a transaction directly from its final field values.
    pub fn from_parts(base: TransactionBase, data: D) -> Self {
        Self { base, data }
    }

    pub fn base(&self) -> &TransactionBase {
        &self.base
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn into_parts(self) -> (TransactionBase, D) {
        (self.base, self.data)
    }

    pub fn get_node_account_ids(&self) -> Option<&[AccountReference]> {
        self.base.node_account_ids.as_deref()
    }

    /// Sets the nodes this transaction may be submitted to.
    pub fn node_account_ids(
        &mut self,
        ids: impl IntoIterator<Item = AccountReference>,
    ) -> &mut Self {
        self.base.node_account_ids = Some(ids.into_iter().collect());
        self
    }

    pub fn get_max_transaction_fee(&self) -> Option<Hbar> {
        self.base.max_transaction_fee
    }

    /// Sets the maximum fee the payer is willing to pay.
    pub fn max_transaction_fee(&mut self, fee: Hbar) -> &mut Self {
        self.base.max_transaction_fee = Some(fee);
        self
    }

    pub fn get_transaction_memo(&self) -> &str {
        &self.base.transaction_memo
    }

    /// Sets a note to attach to the transaction.
    pub fn transaction_memo(&mut self, memo: impl Into<String>) -> &mut Self {
        self.base.transaction_memo = memo.into();
        self
    }

    pub fn get_transaction_valid_duration(&self) -> Option<Duration> {
        self.base.transaction_valid_duration
    }

    /// Sets how long the transaction stays valid after its valid start.
    ///
    /// The wire field is whole seconds: `1.5s` encodes as `1`.
    pub fn transaction_valid_duration(&mut self, duration: Duration) -> &mut Self {
        self.base.transaction_valid_duration = Some(duration);
        self
    }

    pub fn get_transaction_id(&self) -> Option<TransactionId> {
        self.base.transaction_id
    }

    /// Sets an explicit transaction id instead of generating one.
    pub fn transaction_id(&mut self, id: TransactionId) -> &mut Self {
        self.base.transaction_id = Some(id);
        self
    }

    /// Fill unset shared fields from `config`. Explicit values are kept.
    ///
    /// A transaction id is only generated when the config names an operator.
    pub fn apply_defaults(&mut self, config: &SdkConfig) -> &mut Self {
        if self.base.max_transaction_fee.is_none() {
            self.base.max_transaction_fee = Some(config.default_max_transaction_fee);
        }
        if self.base.transaction_valid_duration.is_none() {
            self.base.transaction_valid_duration = Some(config.default_transaction_valid_duration());
        }
        if self.base.transaction_id.is_none() {
            if let Some(operator) = config.operator_account_id {
                self.base.transaction_id = Some(TransactionId::generate(operator));
            }
        }
        self
    }
}

impl<D: TransactionData> Transaction<D> {
    /// Write kind fields, then shared fields, into `encoder`.
    ///
    /// The order is part of the wire format. On error every field this call
    /// wrote is removed again, leaving `encoder` as it was passed in.
    pub fn encode_into(&self, encoder: &mut FieldEncoder) -> Result<()> {
        let start = encoder.len();
        let written = self
            .data
            .encode_fields(encoder)
            .and_then(|()| self.base.encode_fields(encoder));
        if written.is_err() {
            encoder.truncate(start);
        }
        written
    }

    /// Produce the immutable keyed encoding of this transaction.
    pub fn encode(&self) -> Result<EncodedTransaction> {
        let mut encoder = FieldEncoder::new();
        if let Err(e) = self.encode_into(&mut encoder) {
            tracing::debug!(kind = self.data.kind(), error = %e, "transaction encoding failed");
            return Err(e);
        }
        let encoded = encoder.finish();
        tracing::debug!(kind = self.data.kind(), fields = encoded.len(), "encoded transaction");
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedera_types::{Error, PublicKey, Timestamp};
    use serde_json::{json, Value};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Ping {
        count: u32,
    }

    impl TransactionData for Ping {
        fn kind(&self) -> &'static str {
            "ping"
        }

        fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
            encoder.encode("count", &self.count)
        }
    }

    #[derive(Clone, Debug, Default)]
    struct Clashing;

    impl TransactionData for Clashing {
        fn kind(&self) -> &'static str {
            "clashing"
        }

        fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
            encoder.encode("transactionMemo", "mine")
        }
    }

    #[test]
    fn variant_fields_come_before_base_fields() {
        let encoded = Transaction::from_parts(TransactionBase::default(), Ping { count: 3 })
            .encode()
            .unwrap();

        assert_eq!(
            encoded.keys().collect::<Vec<_>>(),
            [
                "count",
                "nodeAccountIds",
                "maxTransactionFee",
                "transactionMemo",
                "transactionValidDuration",
                "transactionId",
            ]
        );
    }

    #[test]
    fn unset_base_fields_encode_as_null() {
        let encoded = Transaction::<Ping>::new().encode().unwrap();
        assert_eq!(encoded.get("nodeAccountIds"), Some(&Value::Null));
        assert_eq!(encoded.get("maxTransactionFee"), Some(&Value::Null));
        assert_eq!(encoded.get("transactionMemo"), Some(&json!("")));
        assert_eq!(encoded.get("transactionValidDuration"), Some(&Value::Null));
        assert_eq!(encoded.get("transactionId"), Some(&Value::Null));
    }

    #[test]
    fn base_setters_chain_and_encode() {
        let id = TransactionId::with_valid_start(
            AccountReference::from_num(1001),
            Timestamp::new(1_700_000_000, 0),
        );
        let mut tx = Transaction::<Ping>::new();
        tx.node_account_ids([AccountReference::from_num(3), AccountReference::from_num(4)])
            .max_transaction_fee(Hbar::new(2))
            .transaction_memo("hello")
            .transaction_valid_duration(Duration::from_secs(120))
            .transaction_id(id);

        assert_eq!(tx.get_transaction_memo(), "hello");
        assert_eq!(tx.get_node_account_ids().map(<[_]>::len), Some(2));

        let encoded = tx.encode().unwrap();
        assert_eq!(encoded.get("nodeAccountIds"), Some(&json!(["0.0.3", "0.0.4"])));
        assert_eq!(encoded.get("maxTransactionFee"), Some(&json!(200_000_000)));
        assert_eq!(encoded.get("transactionMemo"), Some(&json!("hello")));
        assert_eq!(encoded.get("transactionValidDuration"), Some(&json!(120)));
        assert_eq!(
            encoded.get("transactionId"),
            Some(&json!("0.0.1001@1700000000.000000000"))
        );
    }

    #[test]
    fn last_write_wins() {
        let mut tx = Transaction::<Ping>::new();
        tx.transaction_memo("first").transaction_memo("second");
        assert_eq!(tx.get_transaction_memo(), "second");
    }

    #[test]
    fn variant_shadowing_a_base_key_fails_to_encode() {
        let err = Transaction::<Clashing>::new().encode().unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn failed_encode_into_leaves_encoder_untouched() {
        let mut tx = Transaction::<Ping>::new();
        tx.node_account_ids([AccountReference::aliased(0, 0, PublicKey([9u8; 32]))]);

        let mut encoder = FieldEncoder::new();
        encoder.encode("envelope", &1).unwrap();
        assert!(matches!(tx.encode_into(&mut encoder), Err(Error::Encoding(_))));

        let encoded = encoder.finish();
        assert_eq!(encoded.keys().collect::<Vec<_>>(), ["envelope"]);
    }

    #[test]
    fn valid_duration_encodes_whole_seconds() {
        let mut tx = Transaction::<Ping>::new();
        tx.transaction_valid_duration(Duration::from_millis(1_500));
        let encoded = tx.encode().unwrap();
        assert_eq!(encoded.get("transactionValidDuration"), Some(&json!(1)));
    }

    #[test]
    fn alias_node_account_fails_to_encode() {
        let mut tx = Transaction::<Ping>::new();
        tx.node_account_ids([AccountReference::aliased(0, 0, PublicKey([9u8; 32]))]);
        assert!(matches!(tx.encode(), Err(Error::Encoding(_))));
    }

    #[test]
    fn apply_defaults_fills_only_unset_fields() {
        let config = SdkConfig {
            operator_account_id: Some(AccountReference::from_num(2)),
            ..SdkConfig::default()
        };

        let mut tx = Transaction::<Ping>::new();
        tx.max_transaction_fee(Hbar::new(7));
        tx.apply_defaults(&config);

        assert_eq!(tx.get_max_transaction_fee(), Some(Hbar::new(7)));
        assert_eq!(tx.get_transaction_valid_duration(), Some(Duration::from_secs(120)));
        let id = tx.get_transaction_id().expect("generated from operator");
        assert_eq!(id.account_id, AccountReference::from_num(2));
    }

    #[test]
    fn apply_defaults_without_operator_leaves_id_unset() {
        let mut tx = Transaction::<Ping>::new();
        tx.apply_defaults(&SdkConfig::default());
        assert_eq!(tx.get_max_transaction_fee(), Some(SdkConfig::default().default_max_transaction_fee));
        assert!(tx.get_transaction_id().is_none());
    }
}
