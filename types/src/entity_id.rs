//! Numeric entity identifiers of the form `<shard>.<realm>.<num>`.
//!
//! [`parse_parts`] is the low-level splitter shared by every numeric id. It
//! never fails outright: it hands back the decomposed triple together with a
//! [`ParseStatus`], and callers are responsible for rejecting anything that
//! is not [`ParseStatus::Ok`]. [`EntityParts::into_checked`] does exactly that.

use std::fmt;

use crate::error::{Error, Result};

/// Outcome of splitting an entity id string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStatus {
    Ok,
    /// The input was empty.
    Empty,
    /// The input did not have exactly three dot-separated components.
    ComponentCount,
    /// A component was empty or contained something other than `0-9`.
    InvalidDigit,
    /// A component does not fit in a `u64`.
    Overflow,
}

impl ParseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Empty => "empty input",
            Self::ComponentCount => "expected exactly three components",
            Self::InvalidDigit => "components must be unsigned decimal integers",
            Self::Overflow => "component out of range",
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decomposed `(shard, realm, num)` triple.
///
/// Zero-valued unless the accompanying status is [`ParseStatus::Ok`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntityParts {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl EntityParts {
    /// Run [`parse_parts`] and convert a non-`Ok` status into [`Error::Format`].
    pub fn parse_checked(text: &str) -> Result<Self> {
        let (status, parts) = parse_parts(text);
        parts.into_checked(status, text)
    }

    /// Accept these parts only if `status` is [`ParseStatus::Ok`].
    pub fn into_checked(self, status: ParseStatus, text: &str) -> Result<Self> {
        if status.is_ok() {
            Ok(self)
        } else {
            tracing::trace!(input = text, %status, "rejected entity id");
            Err(Error::format(format!(
                "`{text}` is not `<shard>.<realm>.<num>`: {status}"
            )))
        }
    }
}

/// Split `text` into a `(shard, realm, num)` triple.
///
/// Exactly three non-empty runs of ASCII digits separated by `.` are
/// accepted. Signs, whitespace and anything else produce a non-`Ok` status
/// with zeroed parts.
pub fn parse_parts(text: &str) -> (ParseStatus, EntityParts) {
    if text.is_empty() {
        return (ParseStatus::Empty, EntityParts::default());
    }

    let components: Vec<&str> = text.split('.').collect();
    if components.len() != 3 {
        return (ParseStatus::ComponentCount, EntityParts::default());
    }

    let mut values = [0u64; 3];
    for (slot, component) in values.iter_mut().zip(&components) {
        match parse_component(component) {
            Ok(value) => *slot = value,
            Err(status) => return (status, EntityParts::default()),
        }
    }

    let [shard, realm, num] = values;
    (ParseStatus::Ok, EntityParts { shard, realm, num })
}

fn parse_component(component: &str) -> std::result::Result<u64, ParseStatus> {
    // `u64::from_str` accepts a leading `+`, which the grammar does not.
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseStatus::InvalidDigit);
    }
    component.parse::<u64>().map_err(|_| ParseStatus::Overflow)
}

/// Declares a numeric entity id type with canonical text (de)serialization.
macro_rules! numeric_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name {
            /// The shard number (non-negative).
            pub shard: u64,
            /// The realm number (non-negative).
            pub realm: u64,
            /// The entity number (non-negative).
            pub num: u64,
        }

        impl $name {
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self { shard, realm, num }
            }

            /// Shorthand for shard 0, realm 0.
            pub const fn from_num(num: u64) -> Self {
                Self::new(0, 0, num)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let parts = $crate::entity_id::EntityParts::parse_checked(s)?;
                Ok(Self::new(parts.shard, parts.realm, parts.num))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

numeric_entity_id! {
    /// The unique identifier for a token on Hedera.
    TokenId
}

numeric_entity_id! {
    /// The unique identifier for a consensus topic on Hedera.
    TopicId
}
