use crate::types::{NeuronId, Principal};
use std::collections::BTreeSet;

///
/// DissolveState
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DissolveState {
    /// Neuron is not dissolving; the delay is fixed.
    FixedDelay(u64),

    /// Neuron is dissolving and becomes liquid at this timestamp.
    ScheduledDissolveAt(u64),

    #[default]
    None,
}

impl DissolveState {
    /// Remaining dissolve delay at `now`, floored at 0.
    #[must_use]
    pub const fn delay_seconds(self, now: u64) -> u64 {
        match self {
            Self::FixedDelay(delay) => delay,
            Self::ScheduledDissolveAt(at) => at.saturating_sub(now),
            Self::None => 0,
        }
    }
}

///
/// NeuronPermissionType
/// Permission codes as used by SNS governance.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum NeuronPermissionType {
    Unspecified = 0,
    ConfigureDissolveState = 1,
    ManagePrincipals = 2,
    SubmitProposal = 3,
    Vote = 4,
    Disburse = 5,
    Split = 6,
    MergeMaturity = 7,
    DisburseMaturity = 8,
    StakeMaturity = 9,
    ManageVotingPermission = 10,
}

impl NeuronPermissionType {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

///
/// NeuronPermission
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NeuronPermission {
    pub principal: Principal,
    pub permission_types: BTreeSet<i32>,
}

impl NeuronPermission {
    #[must_use]
    pub fn new(principal: Principal, types: impl IntoIterator<Item = NeuronPermissionType>) -> Self {
        Self {
            principal,
            permission_types: types.into_iter().map(NeuronPermissionType::code).collect(),
        }
    }

    #[must_use]
    pub fn grants(&self, permission: NeuronPermissionType) -> bool {
        self.permission_types.contains(&permission.code())
    }
}

///
/// NeuronSnapshot
///
/// Point-in-time view of one neuron. Amounts are in e8s, timestamps in
/// seconds since the epoch.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NeuronSnapshot {
    pub id: Option<NeuronId>,
    pub staked_amount: u64,
    pub staked_maturity: u64,
    pub dissolve_state: DissolveState,
    pub aging_since_timestamp_seconds: u64,
    pub voting_power_multiplier_percent: u64,
    pub permissions: Vec<NeuronPermission>,
}

impl NeuronSnapshot {
    #[must_use]
    pub const fn dissolve_delay_seconds(&self, now: u64) -> u64 {
        self.dissolve_state.delay_seconds(now)
    }

    /// Neuron age at `now`; an aging timestamp in the future counts as 0.
    #[must_use]
    pub const fn age_seconds(&self, now: u64) -> u64 {
        now.saturating_sub(self.aging_since_timestamp_seconds)
    }

    /// True if `principal` holds `permission` on this neuron.
    #[must_use]
    pub fn has_permission(&self, principal: &Principal, permission: NeuronPermissionType) -> bool {
        self.permissions
            .iter()
            .any(|p| p.principal == *principal && p.grants(permission))
    }

    #[must_use]
    pub fn can_vote(&self, principal: &Principal) -> bool {
        self.has_permission(principal, NeuronPermissionType::Vote)
    }
}

///
/// TESTS
///
