use candid::CandidType;
use derive_more::{Add, AddAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Constants
///

pub const E8S_PER_TOKEN: u64 = 100_000_000;
const DECIMALS: usize = 8;

///
/// E8s
/// Token amount in base units (1/10^8). Used for stake, maturity and
/// voting power when they are shown to a voter.
///

#[derive(
    Add,
    AddAssign,
    CandidType,
    Clone,
    Copy,
    Default,
    Debug,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    SubAssign,
    Sub,
)]
pub struct E8s(u64);

impl E8s {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(n: u64) -> Self {
        Self(n)
    }

    #[must_use]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn whole_tokens(self) -> u64 {
        self.0 / E8S_PER_TOKEN
    }

    #[must_use]
    pub const fn fraction(self) -> u64 {
        self.0 % E8S_PER_TOKEN
    }

    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

// exact, trailing zeros trimmed: 250_000_000 -> "2.5"
impl Display for E8s {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.whole_tokens();
        let fraction = self.fraction();

        if fraction == 0 {
            return write!(f, "{whole}");
        }

        let digits = format!("{fraction:0DECIMALS$}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl From<u64> for E8s {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl From<E8s> for u64 {
    fn from(e: E8s) -> Self {
        e.0
    }
}

// Human-input parser: "1", "2.5", "0.00000001"
impl FromStr for E8s {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err("empty amount".to_string());
        }
        if fraction.len() > DECIMALS {
            return Err(format!("more than {DECIMALS} decimal places"));
        }

        let parse = |part: &str| -> Result<u64, String> {
            if part.is_empty() {
                return Ok(0);
            }
            if !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("invalid amount '{s}'"));
            }
            part.parse::<u64>().map_err(|e| e.to_string())
        };

        let whole = parse(whole)?;
        let fraction = parse(&format!("{fraction:0<DECIMALS$}"))?;

        whole
            .checked_mul(E8S_PER_TOKEN)
            .and_then(|w| w.checked_add(fraction))
            .map(Self)
            .ok_or_else(|| format!("amount '{s}' overflows"))
    }
}

///
/// TESTS
///
