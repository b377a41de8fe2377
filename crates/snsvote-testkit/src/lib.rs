//! Test utilities and fixtures for exercising the snsvote engines.
//!
//! Provides stable dummy principals and neuron ids derived from a numeric
//! seed, plus builders for neuron and proposal snapshots.

use candid::Principal;
use snsvote_core::{
    model::{
        BallotRecord, DissolveState, GovernanceParameters, NeuronPermission,
        NeuronPermissionType, NeuronSnapshot, ProposalSnapshot, RewardStatus,
    },
    types::NeuronId,
};

pub const ONE_WEEK_SECONDS: u64 = 604_800;
pub const ONE_MONTH_SECONDS: u64 = 2_628_000;
pub const SIX_MONTHS_SECONDS: u64 = 15_778_800;

/// Parameters used throughout the worked examples: one week minimum, one
/// month maximum delay, six months maximum age, 100% and 25% bonuses.
#[must_use]
pub const fn reference_parameters() -> GovernanceParameters {
    GovernanceParameters::new(
        ONE_WEEK_SECONDS,
        ONE_MONTH_SECONDS,
        SIX_MONTHS_SECONDS,
        100,
        25,
    )
}

///
/// Deterministic dummy-value generator for tests.
///
/// Produces stable principals and neuron ids derived from a numeric seed,
/// which makes tests reproducible without hardcoding raw byte arrays.
///

pub struct Fake;

impl Fake {
    ///
    /// Deterministically derive a [`Principal`] from `seed`.
    ///
    #[must_use]
    pub fn principal(seed: u32) -> Principal {
        let mut buf = [0u8; 29];
        buf[..4].copy_from_slice(&seed.to_be_bytes());

        Principal::from_slice(&buf)
    }

    ///
    /// Deterministically derive a 32-byte [`NeuronId`] from `seed`.
    ///
    #[must_use]
    pub fn neuron_id(seed: u32) -> NeuronId {
        let mut buf = [0u8; 32];
        buf[28..].copy_from_slice(&seed.to_be_bytes());

        NeuronId::from_bytes(&buf)
    }
}

///
/// NeuronBuilder
///
/// Starts from a neuron that votes with full weight: 1 token staked, one
/// month fixed delay, multiplier 100, aging since `now`.
///

#[derive(Clone, Debug)]
pub struct NeuronBuilder {
    neuron: NeuronSnapshot,
}

impl NeuronBuilder {
    #[must_use]
    pub fn new(seed: u32, now: u64) -> Self {
        Self {
            neuron: NeuronSnapshot {
                id: Some(Fake::neuron_id(seed)),
                staked_amount: 100_000_000,
                staked_maturity: 0,
                dissolve_state: DissolveState::FixedDelay(ONE_MONTH_SECONDS),
                aging_since_timestamp_seconds: now,
                voting_power_multiplier_percent: 100,
                permissions: Vec::new(),
            },
        }
    }

    #[must_use]
    pub const fn stake(mut self, e8s: u64) -> Self {
        self.neuron.staked_amount = e8s;
        self
    }

    #[must_use]
    pub const fn maturity(mut self, e8s: u64) -> Self {
        self.neuron.staked_maturity = e8s;
        self
    }

    #[must_use]
    pub const fn dissolve_delay(mut self, seconds: u64) -> Self {
        self.neuron.dissolve_state = DissolveState::FixedDelay(seconds);
        self
    }

    #[must_use]
    pub const fn dissolving_at(mut self, timestamp: u64) -> Self {
        self.neuron.dissolve_state = DissolveState::ScheduledDissolveAt(timestamp);
        self
    }

    #[must_use]
    pub const fn no_dissolve_state(mut self) -> Self {
        self.neuron.dissolve_state = DissolveState::None;
        self
    }

    #[must_use]
    pub const fn aging_since(mut self, timestamp: u64) -> Self {
        self.neuron.aging_since_timestamp_seconds = timestamp;
        self
    }

    #[must_use]
    pub const fn multiplier(mut self, percent: u64) -> Self {
        self.neuron.voting_power_multiplier_percent = percent;
        self
    }

    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.neuron.id = None;
        self
    }

    /// Grant `principal` the vote permission.
    #[must_use]
    pub fn voter(self, principal: Principal) -> Self {
        self.permission(principal, [NeuronPermissionType::Vote])
    }

    #[must_use]
    pub fn permission(
        mut self,
        principal: Principal,
        types: impl IntoIterator<Item = NeuronPermissionType>,
    ) -> Self {
        self.neuron
            .permissions
            .push(NeuronPermission::new(principal, types));
        self
    }

    #[must_use]
    pub fn build(self) -> NeuronSnapshot {
        self.neuron
    }
}

///
/// ProposalBuilder
///

#[derive(Clone, Debug, Default)]
pub struct ProposalBuilder {
    proposal: ProposalSnapshot,
}

impl ProposalBuilder {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            proposal: ProposalSnapshot {
                id: Some(id),
                ..ProposalSnapshot::default()
            },
        }
    }

    #[must_use]
    pub const fn deadline(mut self, timestamp: u64) -> Self {
        self.proposal.deadline_timestamp_seconds = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn wait_for_quiet(mut self, timestamp: u64) -> Self {
        self.proposal.wait_for_quiet_current_deadline = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn reward_status(mut self, status: RewardStatus) -> Self {
        self.proposal.reward_status = Some(status);
        self
    }

    #[must_use]
    pub const fn created(mut self, timestamp: u64, initial_period: u64) -> Self {
        self.proposal.creation_timestamp_seconds = Some(timestamp);
        self.proposal.initial_voting_period_seconds = Some(initial_period);
        self
    }

    #[must_use]
    pub const fn executed(mut self, timestamp: u64) -> Self {
        self.proposal.executed_timestamp_seconds = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn failed(mut self, timestamp: u64) -> Self {
        self.proposal.failed_timestamp_seconds = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn decided(mut self, timestamp: u64) -> Self {
        self.proposal.decided_timestamp_seconds = Some(timestamp);
        self
    }

    /// Record a cast ballot for `neuron_id`.
    #[must_use]
    pub fn voted(mut self, neuron_id: NeuronId, cast_at: u64) -> Self {
        self.proposal.ballots.insert(
            neuron_id,
            BallotRecord {
                vote: 1,
                voting_power: 0,
                cast_timestamp_seconds: cast_at,
            },
        );
        self
    }

    /// Record an empty ballot, as governance lists for neurons yet to vote.
    #[must_use]
    pub fn pending(mut self, neuron_id: NeuronId) -> Self {
        self.proposal
            .ballots
            .insert(neuron_id, BallotRecord::default());
        self
    }

    #[must_use]
    pub fn build(self) -> ProposalSnapshot {
        self.proposal
    }
}

///
/// TESTS
///
