//! Voting power of a single neuron.
//!
//! All arithmetic is exact `u128` with checked operations and floor
//! division; an overflow is an error, never a wrap or a saturation.

use crate::{
    ThisError,
    model::{GovernanceParameters, NeuronSnapshot},
};
use derive_more::Display;

///
/// VotingPowerStage
/// Step of the computation at which an overflow was detected.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum VotingPowerStage {
    #[display("dissolve bonus")]
    DissolveBonus,

    #[display("age bonus")]
    AgeBonus,

    #[display("multiplier")]
    Multiplier,

    #[display("total")]
    Total,
}

///
/// VotingPowerError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum VotingPowerError {
    #[error("voting power overflow while computing {stage}")]
    Overflow { stage: VotingPowerStage },
}

impl VotingPowerError {
    const fn overflow(stage: VotingPowerStage) -> Self {
        Self::Overflow { stage }
    }
}

///
/// VotingPowerPolicy
///

pub struct VotingPowerPolicy;

impl VotingPowerPolicy {
    /// Voting power of `neuron` under `params` at `now` (seconds).
    pub fn compute(
        neuron: &NeuronSnapshot,
        params: &GovernanceParameters,
        now: u64,
    ) -> Result<u64, VotingPowerError> {
        if neuron.staked_amount == 0 {
            return Ok(0);
        }

        let stake = u128::from(neuron.staked_amount) + u128::from(neuron.staked_maturity);

        let dissolve_delay = neuron.dissolve_delay_seconds(now);
        if dissolve_delay < params.min_dissolve_delay_seconds {
            return Ok(0);
        }

        let age = neuron.age_seconds(now);
        let capped_delay = dissolve_delay.min(params.max_dissolve_delay_seconds);
        let capped_age = age.min(params.max_age_seconds_for_bonus);

        let dissolve_bonus = bonus(
            stake,
            capped_delay,
            params.max_dissolve_delay_seconds,
            params.max_dissolve_bonus_percent,
            VotingPowerStage::DissolveBonus,
        )?;
        let stake = checked_add(stake, dissolve_bonus, VotingPowerStage::DissolveBonus)?;

        let age_bonus = bonus(
            stake,
            capped_age,
            params.max_age_seconds_for_bonus,
            params.max_age_bonus_percent,
            VotingPowerStage::AgeBonus,
        )?;
        let stake = checked_add(stake, age_bonus, VotingPowerStage::AgeBonus)?;

        let multiplier = neuron.voting_power_multiplier_percent;
        if multiplier == 0 {
            return Ok(0);
        }

        let power = stake
            .checked_mul(u128::from(multiplier))
            .ok_or(VotingPowerError::overflow(VotingPowerStage::Multiplier))?
            / 100;

        u64::try_from(power).map_err(|_| VotingPowerError::overflow(VotingPowerStage::Total))
    }
}

/// `floor(base * capped * percent / (100 * max))`, or 0 when there is no cap
/// or nothing to reward.
fn bonus(
    base: u128,
    capped: u64,
    max: u64,
    percent: u64,
    stage: VotingPowerStage,
) -> Result<u128, VotingPowerError> {
    if max == 0 || capped == 0 {
        return Ok(0);
    }

    let numerator = base
        .checked_mul(u128::from(capped))
        .and_then(|n| n.checked_mul(u128::from(percent)))
        .ok_or(VotingPowerError::overflow(stage))?;

    // 100 * u64::MAX still fits in u128
    let denominator = 100 * u128::from(max);

    Ok(numerator / denominator)
}

fn checked_add(a: u128, b: u128, stage: VotingPowerStage) -> Result<u128, VotingPowerError> {
    a.checked_add(b).ok_or(VotingPowerError::overflow(stage))
}

/// Free-function form of [`VotingPowerPolicy::compute`].
pub fn compute_voting_power(
    neuron: &NeuronSnapshot,
    params: &GovernanceParameters,
    now: u64,
) -> Result<u64, VotingPowerError> {
    VotingPowerPolicy::compute(neuron, params, now)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DissolveState;

    const NOW: u64 = 1_700_000_000;
    const MIN: u64 = 604_800;
    const MAX_DELAY: u64 = 2_628_000;
    const MAX_AGE: u64 = 15_778_800;

    fn params() -> GovernanceParameters {
        GovernanceParameters::new(MIN, MAX_DELAY, MAX_AGE, 100, 25)
    }

    fn neuron(stake: u64, delay: u64, age: u64) -> NeuronSnapshot {
        NeuronSnapshot {
            staked_amount: stake,
            dissolve_state: DissolveState::FixedDelay(delay),
            aging_since_timestamp_seconds: NOW - age,
            voting_power_multiplier_percent: 100,
            ..Default::default()
        }
    }

    #[test]
    fn reference_example_at_both_caps() {
        let vp = compute_voting_power(&neuron(100_000_000, MAX_DELAY, MAX_AGE), &params(), NOW);

        assert_eq!(vp, Ok(250_000_000));
    }

    #[test]
    fn zero_stake_ignores_maturity() {
        let mut n = neuron(0, MAX_DELAY, MAX_AGE);
        n.staked_maturity = 1_000_000_000;

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(0));
    }

    #[test]
    fn maturity_is_added_before_bonuses() {
        let mut n = neuron(100_000_000, MAX_DELAY, 0);
        n.staked_maturity = 100_000_000;

        // 200M stake, +100% dissolve bonus, no age
        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(400_000_000));
    }

    #[test]
    fn below_minimum_delay_is_zero() {
        let n = neuron(100_000_000, MIN - 1, MAX_AGE);

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(0));
    }

    #[test]
    fn exactly_minimum_delay_votes() {
        let n = neuron(100_000_000, MIN, 0);

        // bonus = 1e8 * 604800 * 100 / (100 * 2628000) = 23_013_698
        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(123_013_698));
    }

    #[test]
    fn scheduled_dissolve_uses_remaining_delay() {
        let mut n = neuron(100_000_000, 0, 0);
        n.dissolve_state = DissolveState::ScheduledDissolveAt(NOW + MAX_DELAY);
        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(200_000_000));

        n.dissolve_state = DissolveState::ScheduledDissolveAt(NOW - 1);
        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(0));
    }

    #[test]
    fn no_dissolve_state_is_zero_delay() {
        let mut n = neuron(100_000_000, 0, MAX_AGE);
        n.dissolve_state = DissolveState::None;

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(0));

        let no_minimum = GovernanceParameters {
            min_dissolve_delay_seconds: 0,
            ..params()
        };
        // no delay bonus, +25% age bonus
        assert_eq!(compute_voting_power(&n, &no_minimum, NOW), Ok(125_000_000));
    }

    #[test]
    fn zero_multiplier_is_zero() {
        let mut n = neuron(100_000_000, MAX_DELAY, MAX_AGE);
        n.voting_power_multiplier_percent = 0;

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(0));
    }

    #[test]
    fn multiplier_scales_final_stake() {
        let mut n = neuron(100_000_000, MAX_DELAY, MAX_AGE);
        n.voting_power_multiplier_percent = 50;

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(125_000_000));
    }

    #[test]
    fn delay_and_age_are_capped() {
        let at_cap = compute_voting_power(&neuron(100_000_000, MAX_DELAY, MAX_AGE), &params(), NOW);
        let beyond = compute_voting_power(
            &neuron(100_000_000, MAX_DELAY * 4, MAX_AGE + 1_000),
            &params(),
            NOW,
        );

        assert_eq!(at_cap, beyond);
    }

    #[test]
    fn future_aging_timestamp_gives_no_age_bonus() {
        let mut n = neuron(100_000_000, MAX_DELAY, 0);
        n.aging_since_timestamp_seconds = NOW + 10_000;

        assert_eq!(compute_voting_power(&n, &params(), NOW), Ok(200_000_000));
    }

    #[test]
    fn all_zero_parameters_give_plain_stake() {
        let n = neuron(100_000_000, MAX_DELAY, MAX_AGE);

        assert_eq!(
            compute_voting_power(&n, &GovernanceParameters::default(), NOW),
            Ok(100_000_000)
        );
    }

    #[test]
    fn huge_stake_reports_overflow() {
        let mut n = neuron(u64::MAX, u64::MAX, 0);
        n.staked_maturity = u64::MAX;

        let params = GovernanceParameters::new(0, u64::MAX, 0, u64::MAX, 0);

        assert_eq!(
            compute_voting_power(&n, &params, NOW),
            Err(VotingPowerError::Overflow {
                stage: VotingPowerStage::DissolveBonus
            })
        );
    }

    #[test]
    fn result_beyond_u64_reports_overflow() {
        let mut n = neuron(u64::MAX, 0, 0);
        n.voting_power_multiplier_percent = 200;

        assert_eq!(
            compute_voting_power(&n, &GovernanceParameters::default(), NOW),
            Err(VotingPowerError::Overflow {
                stage: VotingPowerStage::Total
            })
        );
    }
}
