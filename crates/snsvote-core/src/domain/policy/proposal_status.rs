//! Whether a proposal still accepts votes, its deadline, and the label shown
//! to the voter.
//!
//! Deadline data is populated inconsistently across governance responses, so
//! each answer walks a fixed priority of sources. When nothing is known the
//! proposal is reported as open.

use crate::model::{ProposalSnapshot, RewardStatus, StatusFields};
use derive_more::Display;
use std::fmt;

///
/// ExecutionLabel
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ExecutionLabel {
    Executed,
    Failed,
    Decided,
}

///
/// StatusLabel
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusLabel {
    OpenForVoting,
    VotingClosed,
    Execution {
        label: ExecutionLabel,
        voting_open: bool,
    },
    Unknown,
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenForVoting => f.write_str("Open for Voting"),
            Self::VotingClosed => f.write_str("Voting Closed"),
            Self::Execution { label, voting_open } => {
                let voting = if *voting_open {
                    "Voting Open"
                } else {
                    "Voting Closed"
                };
                write!(f, "{label} ({voting})")
            }
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

///
/// ProposalStatusPolicy
///
/// Every rule has a `try_` form over any [`StatusFields`] source. Fields are
/// read in priority order and reading stops at the first rule that decides,
/// so a field that fails to decode only matters once its rule is reached.
///

pub struct ProposalStatusPolicy;

impl ProposalStatusPolicy {
    /// Best-known voting deadline, or `None` when no source provides one.
    #[must_use]
    pub fn voting_deadline(proposal: &ProposalSnapshot) -> Option<u64> {
        let Ok(deadline) = Self::try_voting_deadline(proposal);
        deadline
    }

    pub fn try_voting_deadline<S: StatusFields>(source: &S) -> Result<Option<u64>, S::Error> {
        if let Some(deadline) = source.deadline()? {
            return Ok(Some(deadline));
        }

        if let Some(deadline) = source.wait_for_quiet_deadline()? {
            return Ok(Some(deadline));
        }

        // an overflowing estimate is no deadline
        Ok(Self::initial_period(source)?.and_then(|(created, period)| created.checked_add(period)))
    }

    #[must_use]
    pub fn is_accepting_votes(proposal: &ProposalSnapshot, now: u64) -> bool {
        let Ok(open) = Self::try_is_accepting_votes(proposal, now);
        open
    }

    pub fn try_is_accepting_votes<S: StatusFields>(source: &S, now: u64) -> Result<bool, S::Error> {
        if let Some(deadline) = source.deadline()? {
            return Ok(now < deadline);
        }

        if let Some(deadline) = source.wait_for_quiet_deadline()? {
            return Ok(now < deadline);
        }

        if let Some(status) = source.reward_status()? {
            return Ok(status == RewardStatus::AcceptVotes);
        }

        if let Some((created, period)) = Self::initial_period(source)? {
            // Heuristic bound, not a protocol guarantee: the initial period is
            // doubled to cover an unknown wait-for-quiet extension.
            return Ok(match period.checked_mul(2).and_then(|p| created.checked_add(p)) {
                Some(bound) => now < bound,
                None => true,
            });
        }

        Ok(true)
    }

    /// Terminal execution state, checked in order executed, failed, decided.
    #[must_use]
    pub fn execution_label(proposal: &ProposalSnapshot) -> Option<ExecutionLabel> {
        let Ok(label) = Self::try_execution_label(proposal);
        label
    }

    pub fn try_execution_label<S: StatusFields>(
        source: &S,
    ) -> Result<Option<ExecutionLabel>, S::Error> {
        let set = |ts: Option<u64>| ts.is_some_and(|t| t > 0);

        if set(source.executed_at()?) {
            return Ok(Some(ExecutionLabel::Executed));
        }
        if set(source.failed_at()?) {
            return Ok(Some(ExecutionLabel::Failed));
        }
        if set(source.decided_at()?) {
            return Ok(Some(ExecutionLabel::Decided));
        }

        Ok(None)
    }

    #[must_use]
    pub fn classify_status(proposal: &ProposalSnapshot, now: u64) -> StatusLabel {
        let Ok(label) = Self::try_classify_status(proposal, now);
        label
    }

    pub fn try_classify_status<S: StatusFields>(
        source: &S,
        now: u64,
    ) -> Result<StatusLabel, S::Error> {
        let voting_open = Self::try_is_accepting_votes(source, now)?;

        Ok(match Self::try_execution_label(source)? {
            Some(label) => StatusLabel::Execution { label, voting_open },
            None if voting_open => StatusLabel::OpenForVoting,
            None => StatusLabel::VotingClosed,
        })
    }

    /// Seconds until the voting deadline; `Some(0)` once it has passed.
    #[must_use]
    pub fn seconds_remaining(proposal: &ProposalSnapshot, now: u64) -> Option<u64> {
        Self::voting_deadline(proposal).map(|deadline| deadline.saturating_sub(now))
    }

    // creation time and initial period, both strictly positive
    fn initial_period<S: StatusFields>(source: &S) -> Result<Option<(u64, u64)>, S::Error> {
        let Some(created) = source.created_at()?.filter(|t| *t > 0) else {
            return Ok(None);
        };
        let Some(period) = source.initial_voting_period()?.filter(|p| *p > 0) else {
            return Ok(None);
        };

        Ok(Some((created, period)))
    }
}

#[must_use]
pub fn voting_deadline(proposal: &ProposalSnapshot) -> Option<u64> {
    ProposalStatusPolicy::voting_deadline(proposal)
}

#[must_use]
pub fn is_accepting_votes(proposal: &ProposalSnapshot, now: u64) -> bool {
    ProposalStatusPolicy::is_accepting_votes(proposal, now)
}

#[must_use]
pub fn classify_status(proposal: &ProposalSnapshot, now: u64) -> StatusLabel {
    ProposalStatusPolicy::classify_status(proposal, now)
}

///
/// TESTS
///
