//! Account addresses: by account number or by public-key alias.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::entity_id::EntityParts;
use crate::error::{Error, Result};
use crate::keys::PublicKey;

/// How an account is identified within its shard and realm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    /// By account sequence number.
    Numeric { num: u64 },
    /// By the public key the account was auto-created for.
    Aliased { alias: PublicKey },
}

/// Address of an account on Hedera.
///
/// Every reference carries a shard and realm; exactly one of `num` or `alias`
/// is present, selected by [`AccountKind`]. Transactions and queries may take
/// either form as input, but the network only ever reports numeric ids.
///
/// Equality and hashing are structural. Ledger checksums and EVM address
/// conversion are not implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountReference {
    shard: u64,
    realm: u64,
    kind: AccountKind,
}

impl AccountReference {
    pub const fn numeric(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, kind: AccountKind::Numeric { num } }
    }

    /// Shorthand for `0.0.<num>`.
    pub const fn from_num(num: u64) -> Self {
        Self::numeric(0, 0, num)
    }

    pub const fn aliased(shard: u64, realm: u64, alias: PublicKey) -> Self {
        Self { shard, realm, kind: AccountKind::Aliased { alias } }
    }

    /// Parse the canonical `<shard>.<realm>.<num>` form.
    ///
    /// Always yields a numeric reference; text that does not match the
    /// grammar is an [`Error::Format`].
    pub fn parse(text: &str) -> Result<Self> {
        let parts = EntityParts::parse_checked(text)?;
        Ok(Self::numeric(parts.shard, parts.realm, parts.num))
    }

    /// Entry point for a reference that arrives as a bare string value
    /// inside a larger encoded structure.
    pub fn decode_from_single_string(text: &str) -> Result<Self> {
        Self::parse(text)
    }

    pub fn shard(&self) -> u64 {
        self.shard
    }

    pub fn realm(&self) -> u64 {
        self.realm
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn num(&self) -> Option<u64> {
        match self.kind {
            AccountKind::Numeric { num } => Some(num),
            AccountKind::Aliased { .. } => None,
        }
    }

    pub fn alias(&self) -> Option<&PublicKey> {
        match &self.kind {
            AccountKind::Numeric { .. } => None,
            AccountKind::Aliased { alias } => Some(alias),
        }
    }

    pub fn is_aliased(&self) -> bool {
        matches!(self.kind, AccountKind::Aliased { .. })
    }

    /// Render `"{shard}.{realm}.{num}"`.
    ///
    /// Aliased references have no agreed text form yet and are rejected
    /// with [`Error::UnsupportedOperation`].
    pub fn to_canonical_string(&self) -> Result<String> {
        match self.kind {
            AccountKind::Numeric { num } => Ok(format!("{}.{}.{}", self.shard, self.realm, num)),
            AccountKind::Aliased { .. } => Err(Error::unsupported(
                "text rendering of alias account references",
            )),
        }
    }

    pub fn checksum(&self) -> Result<String> {
        Err(Error::unsupported("account id checksums"))
    }

    pub fn to_evm_address(&self) -> Result<[u8; 20]> {
        Err(Error::unsupported("EVM address conversion"))
    }
}

impl FromStr for AccountReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for AccountReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_canonical_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for AccountReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::decode_from_single_string(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_alias() -> PublicKey {
        PublicKey([7u8; 32])
    }

    #[test]
    fn parse_canonical_form() {
        let account = AccountReference::parse("0.0.100").unwrap();
        assert_eq!(account.shard(), 0);
        assert_eq!(account.realm(), 0);
        assert_eq!(account.num(), Some(100));
        assert!(account.alias().is_none());
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for input in ["abc", "1.2", "1.2.3.4", "-1.0.0", "", "1.2.x", "1.2.3 "] {
            let err = AccountReference::parse(input).unwrap_err();
            assert!(matches!(err, Error::Format(_)), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn format_numeric() {
        let account = AccountReference::numeric(1, 2, 3);
        assert_eq!(account.to_canonical_string().unwrap(), "1.2.3");
    }

    #[test]
    fn aliased_reference_exposes_alias_not_num() {
        let account = AccountReference::aliased(0, 0, dummy_alias());
        assert_eq!(account.num(), None);
        assert_eq!(account.alias(), Some(&dummy_alias()));
        assert!(account.is_aliased());
    }

    #[test]
    fn format_aliased_is_unsupported() {
        let account = AccountReference::aliased(0, 0, dummy_alias());
        let err = account.to_canonical_string().unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation(_)));
    }

    #[test]
    fn checksum_and_evm_address_are_unsupported() {
        let account = AccountReference::from_num(3);
        assert!(matches!(account.checksum(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(account.to_evm_address(), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn decode_from_single_string_propagates_failure() {
        assert_eq!(
            AccountReference::decode_from_single_string("0.0.7").unwrap(),
            AccountReference::from_num(7)
        );
        assert!(AccountReference::decode_from_single_string("0.0").is_err());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let account = AccountReference::numeric(0, 0, 1001);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, "\"0.0.1001\"");
        let back: AccountReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn serializing_aliased_reference_fails() {
        let account = AccountReference::aliased(0, 0, dummy_alias());
        assert!(serde_json::to_string(&account).is_err());
    }

    #[test]
    fn deserializing_bad_string_fails() {
        assert!(serde_json::from_str::<AccountReference>("\"1.2.3.4\"").is_err());
        assert!(serde_json::from_str::<AccountReference>("42").is_err());
    }
}
