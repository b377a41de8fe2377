//! Which of a voter's neurons can still vote on a proposal, and with how much
//! power.
//!
//! Callers may pass neuron lists that are already filtered or raw; vote
//! permission is always re-derived here.

use crate::{
    domain::policy::voting_power::{VotingPowerError, VotingPowerPolicy, VotingPowerStage},
    model::{GovernanceParameters, NeuronSnapshot, ProposalSnapshot},
    types::Principal,
};
use candid::CandidType;
use serde::{Deserialize, Serialize};

///
/// Eligibility
/// Aggregate for one (governing body, proposal) pair.
///

#[derive(CandidType, Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Eligibility {
    pub eligible_count: u64,
    pub total_voting_power: u128,
}

impl Eligibility {
    #[must_use]
    pub const fn has_eligible(&self) -> bool {
        self.eligible_count > 0
    }
}

///
/// NeuronEligibility
/// Per-neuron outcome, in the order the checks run.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NeuronEligibility {
    NoVotePermission,
    NoVotingPower,
    AlreadyVoted,
    Eligible { voting_power: u64 },
}

///
/// EligibilityPolicy
///

pub struct EligibilityPolicy;

impl EligibilityPolicy {
    /// Classify one neuron for `voter` on `proposal`.
    ///
    /// A neuron without an id has no ballot to look up and counts as not
    /// having voted.
    pub fn check_neuron(
        proposal: &ProposalSnapshot,
        neuron: &NeuronSnapshot,
        params: &GovernanceParameters,
        voter: &Principal,
        now: u64,
    ) -> Result<NeuronEligibility, VotingPowerError> {
        if !neuron.can_vote(voter) {
            return Ok(NeuronEligibility::NoVotePermission);
        }

        let voting_power = VotingPowerPolicy::compute(neuron, params, now)?;
        if voting_power == 0 {
            return Ok(NeuronEligibility::NoVotingPower);
        }

        if neuron.id.as_ref().is_some_and(|id| proposal.has_voted(id)) {
            return Ok(NeuronEligibility::AlreadyVoted);
        }

        Ok(NeuronEligibility::Eligible { voting_power })
    }

    /// Count the neurons `voter` can still vote with and sum their power.
    pub fn resolve(
        proposal: &ProposalSnapshot,
        neurons: &[NeuronSnapshot],
        params: &GovernanceParameters,
        voter: &Principal,
        now: u64,
    ) -> Result<Eligibility, VotingPowerError> {
        let mut eligibility = Eligibility::default();

        for neuron in neurons {
            let NeuronEligibility::Eligible { voting_power } =
                Self::check_neuron(proposal, neuron, params, voter, now)?
            else {
                continue;
            };

            eligibility.eligible_count += 1;
            eligibility.total_voting_power = eligibility
                .total_voting_power
                .checked_add(u128::from(voting_power))
                .ok_or(VotingPowerError::Overflow {
                    stage: VotingPowerStage::Total,
                })?;
        }

        Ok(eligibility)
    }
}

/// Free-function form of [`EligibilityPolicy::resolve`].
pub fn resolve_eligibility(
    proposal: &ProposalSnapshot,
    neurons: &[NeuronSnapshot],
    params: &GovernanceParameters,
    voter: &Principal,
    now: u64,
) -> Result<Eligibility, VotingPowerError> {
    EligibilityPolicy::resolve(proposal, neurons, params, voter, now)
}

///
/// TESTS
///
