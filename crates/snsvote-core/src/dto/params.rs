use crate::{
    dto::{prelude::*, u64_or_zero},
    model::GovernanceParameters,
};

///
/// RawGovernanceParameters
/// The voting-power subset of SNS `NervousSystemParameters`.
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawGovernanceParameters {
    #[serde(default)]
    pub neuron_minimum_dissolve_delay_to_vote_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub max_dissolve_delay_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub max_neuron_age_for_age_bonus: Option<RawOptNumber>,

    #[serde(default)]
    pub max_dissolve_delay_bonus_percentage: Option<RawOptNumber>,

    #[serde(default)]
    pub max_age_bonus_percentage: Option<RawOptNumber>,
}

impl From<&RawGovernanceParameters> for GovernanceParameters {
    fn from(raw: &RawGovernanceParameters) -> Self {
        Self {
            min_dissolve_delay_seconds: u64_or_zero(
                raw.neuron_minimum_dissolve_delay_to_vote_seconds.as_ref(),
            ),
            max_dissolve_delay_seconds: u64_or_zero(raw.max_dissolve_delay_seconds.as_ref()),
            max_age_seconds_for_bonus: u64_or_zero(raw.max_neuron_age_for_age_bonus.as_ref()),
            max_dissolve_bonus_percent: u64_or_zero(
                raw.max_dissolve_delay_bonus_percentage.as_ref(),
            ),
            max_age_bonus_percent: u64_or_zero(raw.max_age_bonus_percentage.as_ref()),
        }
    }
}

impl From<RawGovernanceParameters> for GovernanceParameters {
    fn from(raw: RawGovernanceParameters) -> Self {
        Self::from(&raw)
    }
}

///
/// TESTS
///
