//! Fundamental types for the Hedera SDK.
//!
//! This crate defines the value types shared by the rest of the workspace:
//! account references, numeric entity ids, transaction ids, hbar amounts,
//! timestamps, and the common error type.

pub mod account;
pub mod entity_id;
pub mod error;
pub mod hbar;
pub mod keys;
pub mod time;
pub mod transaction_id;

pub use account::{AccountKind, AccountReference};
pub use entity_id::{parse_parts, EntityParts, ParseStatus, TokenId, TopicId};
pub use error::{Error, Result};
pub use hbar::Hbar;
pub use keys::PublicKey;
pub use time::Timestamp;
pub use transaction_id::TransactionId;
