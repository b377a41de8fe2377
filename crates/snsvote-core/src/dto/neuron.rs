use crate::{
    dto::{prelude::*, u64_or_zero},
    model::{DissolveState, NeuronPermission, NeuronSnapshot},
    types::normalize_principal,
};
use serde::de::IgnoredAny;

///
/// RawDissolveState
///
/// Candid variant as JSON (`{ "DissolveDelaySeconds": n }` or
/// `{ "WhenDissolvedTimestampSeconds": n }`), optionally wrapped in an opt
/// array. Any other shape is kept as `Other` and means no dissolve delay.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDissolveState {
    DissolveDelay {
        #[serde(rename = "DissolveDelaySeconds")]
        seconds: RawNumber,
    },
    WhenDissolved {
        #[serde(rename = "WhenDissolvedTimestampSeconds")]
        timestamp: RawNumber,
    },
    Wrapped(Vec<RawDissolveState>),
    Other(IgnoredAny),
}

impl RawDissolveState {
    #[must_use]
    pub fn normalize(&self) -> DissolveState {
        match self {
            // malformed or negative delay: no delay
            Self::DissolveDelay { seconds } => {
                DissolveState::FixedDelay(seconds.to_u64().unwrap_or(0))
            }
            // malformed or negative timestamp: already dissolved
            Self::WhenDissolved { timestamp } => {
                DissolveState::ScheduledDissolveAt(timestamp.to_u64().unwrap_or(0))
            }
            Self::Wrapped(inner) => inner.first().map_or(DissolveState::None, Self::normalize),
            Self::Other(_) => DissolveState::None,
        }
    }
}

///
/// RawNeuronPermission
///

#[derive(Clone, Debug, Deserialize)]
pub struct RawNeuronPermission {
    #[serde(default)]
    pub principal: Option<RawPrincipalField>,

    #[serde(default)]
    pub permission_type: Vec<RawNumber>,
}

///
/// RawPrincipalField
/// A principal, possibly wrapped in an opt array.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawPrincipalField {
    Wrapped(Vec<RawPrincipal>),
    Value(RawPrincipal),
}

impl RawPrincipalField {
    fn get(&self) -> Option<&RawPrincipal> {
        match self {
            Self::Wrapped(values) => values.first(),
            Self::Value(p) => Some(p),
        }
    }
}

impl RawNeuronPermission {
    /// `None` when the principal is missing or does not decode.
    #[must_use]
    pub fn normalize(&self) -> Option<NeuronPermission> {
        let principal = self.principal.as_ref()?.get().and_then(normalize_principal)?;
        let permission_types = self
            .permission_type
            .iter()
            .filter_map(|code| code.to_i64().ok())
            .filter_map(|code| i32::try_from(code).ok())
            .collect();

        Some(NeuronPermission {
            principal,
            permission_types,
        })
    }
}

///
/// RawNeuronIdField
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawNeuronIdField {
    Wrapped(Vec<RawNeuronId>),
    Value(RawNeuronId),
}

impl RawNeuronIdField {
    fn normalize(&self) -> Option<NeuronId> {
        match self {
            Self::Value(id) => id.normalize(),
            Self::Wrapped(values) => values.first().and_then(RawNeuronId::normalize),
        }
    }
}

///
/// RawNeuron
/// SNS `Neuron` as returned by `list_neurons`, reduced to the fields voting
/// power depends on.
///

#[derive(Clone, Debug, Deserialize)]
pub struct RawNeuron {
    #[serde(default)]
    pub id: Option<RawNeuronIdField>,

    #[serde(default)]
    pub permissions: Vec<RawNeuronPermission>,

    #[serde(default)]
    pub cached_neuron_stake_e8s: Option<RawOptNumber>,

    #[serde(default)]
    pub staked_maturity_e8s_equivalent: Option<RawOptNumber>,

    #[serde(default)]
    pub aging_since_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub voting_power_percentage_multiplier: Option<RawOptNumber>,

    #[serde(default)]
    pub dissolve_state: Option<RawDissolveState>,
}

impl From<&RawNeuron> for NeuronSnapshot {
    fn from(raw: &RawNeuron) -> Self {
        Self {
            id: raw.id.as_ref().and_then(RawNeuronIdField::normalize),
            staked_amount: u64_or_zero(raw.cached_neuron_stake_e8s.as_ref()),
            staked_maturity: u64_or_zero(raw.staked_maturity_e8s_equivalent.as_ref()),
            dissolve_state: raw
                .dissolve_state
                .as_ref()
                .map_or(DissolveState::None, RawDissolveState::normalize),
            aging_since_timestamp_seconds: u64_or_zero(raw.aging_since_timestamp_seconds.as_ref()),
            voting_power_multiplier_percent: u64_or_zero(
                raw.voting_power_percentage_multiplier.as_ref(),
            ),
            permissions: raw
                .permissions
                .iter()
                .filter_map(RawNeuronPermission::normalize)
                .collect(),
        }
    }
}

impl From<RawNeuron> for NeuronSnapshot {
    fn from(raw: RawNeuron) -> Self {
        Self::from(&raw)
    }
}

///
/// TESTS
///
