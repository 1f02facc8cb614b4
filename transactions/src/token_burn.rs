//! Token burn: remove token units from the treasury account.

use hedera_types::{Result, TokenId};

use crate::encoder::FieldEncoder;
use crate::transaction::{Transaction, TransactionData};

/// Burn tokens from the token's treasury account.
///
/// Fungible burns set `amount`; non-fungible burns list the `serials` to
/// destroy.
pub type TokenBurnTransaction = Transaction<TokenBurnTransactionData>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBurnTransactionData {
    pub token_id: Option<TokenId>,
    pub amount: u64,
    pub serials: Vec<i64>,
}

impl TokenBurnTransaction {
    pub fn get_token_id(&self) -> Option<TokenId> {
        self.data().token_id
    }

    /// Sets the token for which to burn tokens.
    pub fn token_id(&mut self, token_id: TokenId) -> &mut Self {
        self.data_mut().token_id = Some(token_id);
        self
    }

    pub fn get_amount(&self) -> u64 {
        self.data().amount
    }

    /// Sets the amount of a fungible token to burn from the treasury account.
    pub fn amount(&mut self, amount: u64) -> &mut Self {
        self.data_mut().amount = amount;
        self
    }

    pub fn get_serials(&self) -> &[i64] {
        &self.data().serials
    }

    /// Replaces the serial numbers of the NFTs to burn.
    pub fn serials(&mut self, serials: impl IntoIterator<Item = i64>) -> &mut Self {
        self.data_mut().serials = serials.into_iter().collect();
        self
    }

    pub fn add_serial(&mut self, serial: i64) -> &mut Self {
        self.data_mut().serials.push(serial);
        self
    }
}

impl TransactionData for TokenBurnTransactionData {
    fn kind(&self) -> &'static str {
        "tokenBurn"
    }

    fn encode_fields(&self, encoder: &mut FieldEncoder) -> Result<()> {
        encoder.encode("tokenId", &self.token_id)?;
        encoder.encode("amount", &self.amount)?;
        encoder.encode("serials", &self.serials)
    }
}
