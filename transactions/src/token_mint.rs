//! Token mint: create new token units in the treasury account.

use hedera_types::{Result, TokenId};

use crate::encoder::FieldEncoder;
use crate::transaction::{Transaction, TransactionData};

/// Mint tokens to the token's treasury account.
///
/// A fungible mint sets `amount`; a non-fungible mint sets one `metadata`
/// entry per new serial. Requests that express both or neither are still
/// encoded (the ledger rejects them) but logged at `warn`.
pub type TokenMintTransaction = Transaction<TokenMintTransactionData>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenMintTransactionData {
    /// The token for which to mint tokens.
    pub token_id: Option<TokenId>,

    /// The amount of a fungible token to mint to the treasury account.
    pub amount: u64,

    /// The list of metadata for a non-fungible token to mint to the treasury account.
    pub metadata: Vec<Vec<u8>>,
}

impl TokenMintTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    /// Sets the token for which to mint tokens.
    pub fn token_id(&mut self, token_id: TokenId) -> &mut Self {
        self.data_mut().token_id = Some(token_id);
        self
    }

    pub fn get_amount(&self) -> u64 {
        self.data().amount
    }

    /// Sets the amount of a fungible token to mint to the treasury account.
    pub fn amount(&mut self, amount: u64) -> &mut Self {
        self.data_mut().amount = amount;
        self
    }

    pub fn get_metadata(&self) -> &[Vec<u8>] {
        &self.data().metadata
    }

    /// Replaces the metadata list, one entry per NFT to mint.
    pub fn metadata<B: Into<Vec<u8>>>(&mut self, metadata: impl IntoIterator<Item = B>) -> &mut Self {
        self.data_mut().metadata = metadata.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one metadata entry.
    pub fn add_metadata(&mut self, metadata: impl Into<Vec<u8>>) -> &mut Self {
        self.data_mut().metadata.push(metadata.into());
        self
    }
}

impl TransactionData for TokenMintTransactionData {
    fn kind(&self) -> &'static str {
        "tokenMint"
    }

    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
        let fungible = self.amount > 0;
        let non_fungible = !self.metadata.is_empty();
        if fungible == non_fungible {
            tracing::warn!(
                amount = self.amount,
                metadata = self.metadata.len(),
                "token mint should set exactly one of amount or metadata"
            );
        }

        encoder.encode("tokenId", &self.token_id)?;
        encoder.encode("amount", &self.amount)?;
        encoder.encode_base64_list("metadata", &self.metadata)
    }
}
