//! Hedera transaction requests and their keyed encoding.
//!
//! Every transaction is a [`Transaction<D>`]: the shared base fields (fee
//! bound, memo, validity window, transaction id, node accounts) plus
//! kind-specific data `D` implementing [`TransactionData`]. Encoding writes
//! the kind's fields first and the shared fields after.
//!
//! Transaction kinds:
//! - **TokenMint**: mint fungible units or NFTs to the treasury
//! - **TokenBurn**: burn fungible units or NFT serials from the treasury
//! - **TopicMessageSubmit**: submit a message to a consensus topic
//! - **Prng**: request a pseudo-random number

pub mod config;
pub mod encoder;
pub mod error;
pub mod prng;
pub mod token_burn;
pub mod token_mint;
pub mod topic_message_submit;
pub mod transaction;

pub use config::SdkConfig;
pub use encoder::{EncodedTransaction, FieldEncoder};
pub use error::ConfigError;
pub use prng::{PrngTransaction, PrngTransactionData};
pub use token_burn::{TokenBurnTransaction, TokenBurnTransactionData};
pub use token_mint::{TokenMintTransaction, TokenMintTransactionData};
pub use topic_message_submit::{TopicMessageSubmitTransaction, TopicMessageSubmitTransactionData};
pub use transaction::{Transaction, TransactionBase, TransactionData};
