//! Client-generated transaction identifiers.

use rand::{thread_rng, Rng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::account::AccountReference;
use crate::error::{Error, Result};
use crate::time::Timestamp;

const EXPECTED: &str = "expecting <accountId>@<validStart>[?scheduled][/<nonce>]";

/// The client-generated ID for a transaction.
///
/// Used for retrieving receipts and records, and by the network to detect
/// duplicate submissions. Text form:
/// `<shard>.<realm>.<num>@<seconds>.<nanos>[?scheduled][/<nonce>]`. Parsing
/// also accepts the two suffixes in the opposite order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId {
    /// The account that pays for this transaction.
    pub account_id: AccountReference,

    /// The time from which this transaction is valid. Together with the
    /// transaction's valid duration this defines the window in which the
    /// network will process it.
    pub valid_start: Timestamp,

    pub nonce: Option<i32>,

    /// `true` if the transaction is scheduled.
    pub scheduled: bool,
}

impl TransactionId {
    /// Generate a new transaction ID for `account_id`.
    ///
    /// The valid start is backdated by a random 5 to 8 seconds so that small
    /// clock differences with the receiving node do not make it "in the
    /// future".
    #[must_use]
    pub fn generate(account_id: AccountReference) -> Self {
        let backdate = thread_rng().gen_range(5_000_000_000u64..8_000_000_000);
        let valid_start = Timestamp::now().saturating_sub_nanos(backdate);
        Self { account_id, valid_start, nonce: None, scheduled: false }
    }

    pub fn with_valid_start(account_id: AccountReference, valid_start: Timestamp) -> Self {
        Self { account_id, valid_start, nonce: None, scheduled: false }
    }

    /// Render the text form. Fails if the payer is an alias reference.
    pub fn to_canonical_string(&self) -> Result<String> {
        let mut out = format!("{}@{}", self.account_id.to_canonical_string()?, self.valid_start);
        if self.scheduled {
            out.push_str("?scheduled");
        }
        if let Some(nonce) = self.nonce {
            out.push_str(&format!("/{nonce}"));
        }
        Ok(out)
    }
}

fn parse_unsigned<T: FromStr>(text: &str) -> Result<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(EXPECTED));
    }
    text.parse().map_err(|_| Error::format(EXPECTED))
}

/// Seconds before the epoch carry a leading `-`. A leading `+` is rejected.
fn parse_seconds(text: &str) -> Result<i64> {
    match text.strip_prefix('-') {
        Some(magnitude) => {
            parse_unsigned::<u64>(magnitude)?;
            text.parse().map_err(|_| Error::format(EXPECTED))
        }
        None => parse_unsigned(text),
    }
}

fn parse_valid_start(text: &str) -> Result<Timestamp> {
    let (seconds, nanos) = text.split_once('.').ok_or_else(|| Error::format(EXPECTED))?;
    let seconds = parse_seconds(seconds)?;
    let nanos: u32 = parse_unsigned(nanos)?;
    if nanos >= 1_000_000_000 {
        return Err(Error::format("valid start nanoseconds out of range"));
    }
    Ok(Timestamp::new(seconds, nanos))
}

fn is_suffix_marker(c: char) -> bool {
    c == '?' || c == '/'
}

impl FromStr for TransactionId {
    type Err = Error;

    /// Parse `<account>@<seconds>.<nanos>` followed by optional `?scheduled`
    /// and `/<nonce>` suffixes, each at most once, in either order.
    fn from_str(s: &str) -> Result<Self> {
        let (account, rest) = s.split_once('@').ok_or_else(|| Error::format(EXPECTED))?;
        let account_id = AccountReference::parse(account)?;

        let start_len = rest.find(is_suffix_marker).unwrap_or(rest.len());
        let (valid_start, mut suffixes) = rest.split_at(start_len);
        let valid_start = parse_valid_start(valid_start)?;

        let mut nonce = None;
        let mut scheduled = false;
        while !suffixes.is_empty() {
            // Every suffix starts with a one-byte ASCII marker.
            let end = suffixes[1..].find(is_suffix_marker).map_or(suffixes.len(), |i| i + 1);
            let (suffix, tail) = suffixes.split_at(end);
            match suffix.split_at(1) {
                ("?", "scheduled") if !scheduled => scheduled = true,
                ("/", value) if nonce.is_none() => {
                    nonce = Some(value.parse::<i32>().map_err(|_| Error::format(EXPECTED))?);
                }
                _ => return Err(Error::format(EXPECTED)),
            }
            suffixes = tail;
        }

        Ok(Self { account_id, valid_start, nonce, scheduled })
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_canonical_string().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
