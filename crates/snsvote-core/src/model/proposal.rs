use crate::types::NeuronId;
use derive_more::Display;
use std::{collections::BTreeMap, convert::Infallible};

///
/// RewardStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum RewardStatus {
    Unknown,
    AcceptVotes,
    ReadyToSettle,
    Settled,
}

impl RewardStatus {
    /// Map a governance status code; codes outside 0..=3 are `Unknown`.
    #[must_use]
    pub const fn from_code(code: u64) -> Self {
        match code {
            1 => Self::AcceptVotes,
            2 => Self::ReadyToSettle,
            3 => Self::Settled,
            _ => Self::Unknown,
        }
    }
}

///
/// BallotRecord
/// A neuron's ballot on one proposal.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BallotRecord {
    pub vote: i32,
    pub voting_power: u64,
    pub cast_timestamp_seconds: u64,
}

impl BallotRecord {
    /// A nonzero cast timestamp means the vote has been cast.
    #[must_use]
    pub const fn is_cast(&self) -> bool {
        self.cast_timestamp_seconds > 0
    }
}

///
/// ProposalSnapshot
///
/// Read-only view of one proposal. `None` means the field was absent in the
/// governance response.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProposalSnapshot {
    pub id: Option<u64>,
    pub deadline_timestamp_seconds: Option<u64>,
    pub wait_for_quiet_current_deadline: Option<u64>,
    pub reward_status: Option<RewardStatus>,
    pub creation_timestamp_seconds: Option<u64>,
    pub initial_voting_period_seconds: Option<u64>,
    pub executed_timestamp_seconds: Option<u64>,
    pub failed_timestamp_seconds: Option<u64>,
    pub decided_timestamp_seconds: Option<u64>,
    pub ballots: BTreeMap<NeuronId, BallotRecord>,
}

impl ProposalSnapshot {
    #[must_use]
    pub fn ballot_for(&self, neuron_id: &NeuronId) -> Option<&BallotRecord> {
        self.ballots.get(neuron_id)
    }

    /// True if `neuron_id` has a ballot with a nonzero cast timestamp.
    #[must_use]
    pub fn has_voted(&self, neuron_id: &NeuronId) -> bool {
        self.ballot_for(neuron_id).is_some_and(BallotRecord::is_cast)
    }
}

///
/// StatusFields
///
/// The fields the status rules read, one accessor each. A source whose
/// fields can fail to decode reports the failure only for the field asked
/// for, so rules that short-circuit never see a field they do not reach.
///

pub trait StatusFields {
    type Error;

    fn deadline(&self) -> Result<Option<u64>, Self::Error>;
    fn wait_for_quiet_deadline(&self) -> Result<Option<u64>, Self::Error>;
    fn reward_status(&self) -> Result<Option<RewardStatus>, Self::Error>;
    fn created_at(&self) -> Result<Option<u64>, Self::Error>;
    fn initial_voting_period(&self) -> Result<Option<u64>, Self::Error>;
    fn executed_at(&self) -> Result<Option<u64>, Self::Error>;
    fn failed_at(&self) -> Result<Option<u64>, Self::Error>;
    fn decided_at(&self) -> Result<Option<u64>, Self::Error>;
}

impl StatusFields for ProposalSnapshot {
    type Error = Infallible;

    fn deadline(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.deadline_timestamp_seconds)
    }

    fn wait_for_quiet_deadline(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.wait_for_quiet_current_deadline)
    }

    fn reward_status(&self) -> Result<Option<RewardStatus>, Infallible> {
        Ok(self.reward_status)
    }

    fn created_at(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.creation_timestamp_seconds)
    }

    fn initial_voting_period(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.initial_voting_period_seconds)
    }

    fn executed_at(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.executed_timestamp_seconds)
    }

    fn failed_at(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.failed_timestamp_seconds)
    }

    fn decided_at(&self) -> Result<Option<u64>, Infallible> {
        Ok(self.decided_timestamp_seconds)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reward_status_codes() {
        assert_eq!(RewardStatus::from_code(0), RewardStatus::Unknown);
        assert_eq!(RewardStatus::from_code(1), RewardStatus::AcceptVotes);
        assert_eq!(RewardStatus::from_code(3), RewardStatus::Settled);
        assert_eq!(RewardStatus::from_code(99), RewardStatus::Unknown);
    }

    #[test]
    fn uncast_ballot_is_not_a_vote() {
        let voted = NeuronId::from_bytes(&[1]);
        let pending = NeuronId::from_bytes(&[2]);
        let stranger = NeuronId::from_bytes(&[3]);

        let mut proposal = ProposalSnapshot::default();
        proposal.ballots.insert(
            voted.clone(),
            BallotRecord {
                vote: 1,
                voting_power: 10,
                cast_timestamp_seconds: 5,
            },
        );
        proposal.ballots.insert(pending.clone(), BallotRecord::default());

        assert!(proposal.has_voted(&voted));
        assert!(!proposal.has_voted(&pending));
        assert!(!proposal.has_voted(&stranger));
    }
}
