//!
//! Loosely typed numeric inputs. Governance data reaches us as native
//! integers, big-integer text (`"123n"`, `"1_000"`), floats from JSON
//! encoders, or candid `Nat`s. Everything is normalized to an exact `i128`
//! before it touches an engine.
//!

use candid::Nat;
use num_traits::cast::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Largest float magnitude that still represents every integer exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0; // 2^53

///
/// NumberError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NumberError {
    #[error("empty numeric text")]
    Empty,

    #[error("invalid numeric text '{0}'")]
    InvalidText(String),

    #[error("non-integral or imprecise float {0}")]
    NonIntegral(String),

    #[error("value {0} is negative")]
    Negative(i128),

    #[error("value {0} does not fit in 64 bits")]
    OutOfRange(i128),
}

///
/// RawNumber
/// A numeric field exactly as it arrived at the boundary.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl RawNumber {
    /// Normalize to an exact integer.
    pub fn normalize(&self) -> Result<i128, NumberError> {
        match self {
            Self::Unsigned(n) => Ok(i128::from(*n)),
            Self::Signed(n) => Ok(i128::from(*n)),
            Self::Float(f) => normalize_float(*f),
            Self::Text(s) => normalize_text(s),
        }
    }

    /// Normalize to a non-negative 64-bit value.
    pub fn to_u64(&self) -> Result<u64, NumberError> {
        let n = self.normalize()?;
        if n < 0 {
            return Err(NumberError::Negative(n));
        }

        u64::try_from(n).map_err(|_| NumberError::OutOfRange(n))
    }

    /// Normalize to a signed 64-bit value.
    pub fn to_i64(&self) -> Result<i64, NumberError> {
        let n = self.normalize()?;

        i64::try_from(n).map_err(|_| NumberError::OutOfRange(n))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn normalize_float(f: f64) -> Result<i128, NumberError> {
    if !f.is_finite() || f.fract() != 0.0 || f.abs() > MAX_EXACT_FLOAT {
        return Err(NumberError::NonIntegral(f.to_string()));
    }

    Ok(f as i128)
}

fn normalize_text(s: &str) -> Result<i128, NumberError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('n').unwrap_or(trimmed);
    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();

    if digits.is_empty() {
        return Err(NumberError::Empty);
    }

    digits
        .parse::<i128>()
        .map_err(|_| NumberError::InvalidText(s.to_string()))
}

impl From<u64> for RawNumber {
    fn from(n: u64) -> Self {
        Self::Unsigned(n)
    }
}

impl From<i64> for RawNumber {
    fn from(n: i64) -> Self {
        Self::Signed(n)
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Nat> for RawNumber {
    fn from(n: Nat) -> Self {
        match n.0.to_u64() {
            Some(v) => Self::Unsigned(v),
            None => Self::Text(n.0.to_string()),
        }
    }
}

///
/// RawOptNumber
/// Optional numeric field, also accepting the candid-opt-as-array encoding
/// (`[]` or `[x]`) produced by agent libraries.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawOptNumber {
    Wrapped(Vec<RawNumber>),
    Value(RawNumber),
}

impl RawOptNumber {
    #[must_use]
    pub fn get(&self) -> Option<&RawNumber> {
        match self {
            Self::Wrapped(values) => values.first(),
            Self::Value(value) => Some(value),
        }
    }
}

impl From<RawNumber> for RawOptNumber {
    fn from(value: RawNumber) -> Self {
        Self::Value(value)
    }
}

impl From<u64> for RawOptNumber {
    fn from(n: u64) -> Self {
        Self::Value(RawNumber::Unsigned(n))
    }
}

impl From<&str> for RawOptNumber {
    fn from(s: &str) -> Self {
        Self::Value(RawNumber::from(s))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_accepts_bigint_suffix_and_separators() {
        assert_eq!(RawNumber::from("1_000_000n").normalize(), Ok(1_000_000));
        assert_eq!(RawNumber::from(" 42 ").normalize(), Ok(42));
        assert_eq!(RawNumber::from("-7").normalize(), Ok(-7));
    }

    #[test]
    fn text_beyond_u64_is_exact() {
        let n = RawNumber::from("36893488147419103232").normalize().unwrap();
        assert_eq!(n, 36_893_488_147_419_103_232);
        assert_eq!(
            RawNumber::from("36893488147419103232").to_u64(),
            Err(NumberError::OutOfRange(n))
        );
    }

    #[test]
    fn garbage_text_is_rejected() {
        assert_eq!(RawNumber::from("").normalize(), Err(NumberError::Empty));
        assert!(matches!(
            RawNumber::from("12abc").normalize(),
            Err(NumberError::InvalidText(_))
        ));
    }

    #[test]
    fn floats_must_be_exact_integers() {
        assert_eq!(RawNumber::Float(3.0).normalize(), Ok(3));
        assert!(RawNumber::Float(3.5).normalize().is_err());
        assert!(RawNumber::Float(1e20).normalize().is_err());
        assert!(RawNumber::Float(f64::NAN).normalize().is_err());
    }

    #[test]
    fn negative_values_are_not_u64() {
        assert_eq!(
            RawNumber::Signed(-1).to_u64(),
            Err(NumberError::Negative(-1))
        );
        assert_eq!(RawNumber::Signed(-1).to_i64(), Ok(-1));
    }

    #[test]
    fn nat_converts_exactly() {
        let small = RawNumber::from(Nat::from(5u64));
        assert_eq!(small, RawNumber::Unsigned(5));

        let big = RawNumber::from(Nat::from(u128::from(u64::MAX) + 1));
        assert_eq!(big.normalize(), Ok(i128::from(u64::MAX) + 1));
    }

    #[test]
    fn deserializes_every_json_shape() {
        let values: Vec<RawNumber> =
            serde_json::from_str(r#"[1, -2, 3.0, "4", "5n"]"#).unwrap();
        let normalized: Vec<i128> = values.iter().map(|v| v.normalize().unwrap()).collect();

        assert_eq!(normalized, vec![1, -2, 3, 4, 5]);
    }

    #[test]
    fn opt_number_accepts_array_encoding() {
        let empty: RawOptNumber = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.get(), None);

        let wrapped: RawOptNumber = serde_json::from_str(r#"["9"]"#).unwrap();
        assert_eq!(wrapped.get().unwrap().normalize(), Ok(9));

        let bare: RawOptNumber = serde_json::from_str("10").unwrap();
        assert_eq!(bare.get().unwrap().normalize(), Ok(10));
    }
}
