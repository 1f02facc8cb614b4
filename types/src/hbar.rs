//! Hbar amounts.
//!
//! Amounts are held as a signed count of tinybars to avoid floating-point
//! errors. `1 ℏ = 100_000_000 tinybars`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An amount of hbar, used for fees and transfers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hbar(i64);

impl Hbar {
    pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(50_000_000_000 * Self::TINYBARS_PER_HBAR);
    pub const MIN: Self = Self(-50_000_000_000 * Self::TINYBARS_PER_HBAR);

    /// Whole hbars.
    pub const fn new(hbars: i64) -> Self {
        Self(hbars * Self::TINYBARS_PER_HBAR)
    }

    pub const fn from_tinybars(tinybars: i64) -> Self {
        Self(tinybars)
    }

    pub fn tinybars(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Add for Hbar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Hbar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Hbar {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % Self::TINYBARS_PER_HBAR == 0 {
            write!(f, "{} ℏ", self.0 / Self::TINYBARS_PER_HBAR)
        } else {
            write!(f, "{} tℏ", self.0)
        }
    }
}
