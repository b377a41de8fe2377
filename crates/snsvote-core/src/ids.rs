//!
//! Strongly-typed identifier for governing bodies (SNSes). String-backed so
//! known constants can be zero-copy while ids read from config allocate.
//!

use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};

///
/// GoverningBodyId
///
/// Human-readable key for one SNS, e.g. its name or root canister id.
///

#[derive(
    CandidType, Clone, Debug, Eq, Ord, Display, PartialOrd, Deserialize, Serialize, PartialEq, Hash,
)]
#[serde(transparent)]
pub struct GoverningBodyId(pub Cow<'static, str>);

impl GoverningBodyId {
    #[must_use]
    pub const fn new(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    #[must_use]
    pub const fn owned(s: String) -> Self {
        Self(Cow::Owned(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GoverningBodyId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::owned(s.to_string()))
    }
}

impl From<&'static str> for GoverningBodyId {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for GoverningBodyId {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl AsRef<str> for GoverningBodyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
