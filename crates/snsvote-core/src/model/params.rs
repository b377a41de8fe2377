use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// GovernanceParameters
///
/// Tunable voting-power constants of one governing body. Every field defaults
/// to 0: no minimum delay and no bonuses.
///

#[derive(CandidType, Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GovernanceParameters {
    /// Dissolve delay below which a neuron cannot vote at all.
    #[serde(default)]
    pub min_dissolve_delay_seconds: u64,

    #[serde(default)]
    pub max_dissolve_delay_seconds: u64,

    #[serde(default)]
    pub max_age_seconds_for_bonus: u64,

    /// Bonus percentage granted at the maximum dissolve delay.
    #[serde(default)]
    pub max_dissolve_bonus_percent: u64,

    /// Bonus percentage granted at the maximum age.
    #[serde(default)]
    pub max_age_bonus_percent: u64,
}

impl GovernanceParameters {
    #[must_use]
    pub const fn new(
        min_dissolve_delay_seconds: u64,
        max_dissolve_delay_seconds: u64,
        max_age_seconds_for_bonus: u64,
        max_dissolve_bonus_percent: u64,
        max_age_bonus_percent: u64,
    ) -> Self {
        Self {
            min_dissolve_delay_seconds,
            max_dissolve_delay_seconds,
            max_age_seconds_for_bonus,
            max_dissolve_bonus_percent,
            max_age_bonus_percent,
        }
    }
}
