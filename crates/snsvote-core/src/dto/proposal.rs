use crate::{
    dto::{NormalizeError, opt_u64, prelude::*, u64_or_zero},
    model::{BallotRecord, ProposalSnapshot, RewardStatus, StatusFields},
};
use std::collections::BTreeMap;

///
/// RawBallot
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawBallot {
    #[serde(default)]
    pub vote: Option<RawOptNumber>,

    #[serde(default)]
    pub voting_power: Option<RawOptNumber>,

    #[serde(default)]
    pub cast_timestamp_seconds: Option<RawOptNumber>,
}

impl From<&RawBallot> for BallotRecord {
    fn from(raw: &RawBallot) -> Self {
        let vote = raw
            .vote
            .as_ref()
            .and_then(RawOptNumber::get)
            .and_then(|v| v.to_i64().ok())
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(0);

        Self {
            vote,
            voting_power: u64_or_zero(raw.voting_power.as_ref()),
            cast_timestamp_seconds: u64_or_zero(raw.cast_timestamp_seconds.as_ref()),
        }
    }
}

///
/// RawBallots
/// Ballots keyed by neuron id hex, as a map or as `[id, ballot]` pairs.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawBallots {
    Map(BTreeMap<String, RawBallot>),
    Pairs(Vec<(String, RawBallot)>),
}

impl Default for RawBallots {
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

impl RawBallots {
    /// Entries whose key is not valid hex are dropped.
    #[must_use]
    pub fn normalize(&self) -> BTreeMap<NeuronId, BallotRecord> {
        match self {
            Self::Map(map) => collect_ballots(map.iter()),
            Self::Pairs(pairs) => collect_ballots(pairs.iter().map(|(k, v)| (k, v))),
        }
    }
}

fn collect_ballots<'a>(
    entries: impl Iterator<Item = (&'a String, &'a RawBallot)>,
) -> BTreeMap<NeuronId, BallotRecord> {
    entries
        .filter_map(|(key, ballot)| Some((NeuronId::from_hex(key)?, BallotRecord::from(ballot))))
        .collect()
}

///
/// RawWaitForQuietState
///

#[derive(Clone, Debug, Deserialize)]
pub struct RawWaitForQuietState {
    #[serde(default)]
    pub current_deadline_timestamp_seconds: Option<RawOptNumber>,
}

///
/// RawWaitForQuiet
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawWaitForQuiet {
    Wrapped(Vec<RawWaitForQuietState>),
    Value(RawWaitForQuietState),
}

impl RawWaitForQuiet {
    fn deadline(&self) -> Option<&RawOptNumber> {
        let state = match self {
            Self::Wrapped(values) => values.first()?,
            Self::Value(state) => state,
        };

        state.current_deadline_timestamp_seconds.as_ref()
    }
}

///
/// RawProposalId
///

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawProposalId {
    Wrapped(Vec<RawProposalId>),
    Record { id: RawNumber },
    Plain(RawNumber),
}

impl RawProposalId {
    fn normalize(&self) -> Option<u64> {
        match self {
            Self::Wrapped(values) => values.first().and_then(Self::normalize),
            Self::Record { id } | Self::Plain(id) => id.to_u64().ok(),
        }
    }
}

///
/// RawProposal
/// SNS `ProposalData` as returned by `list_proposals`, reduced to the fields
/// voting status and eligibility depend on.
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProposal {
    #[serde(default)]
    pub id: Option<RawProposalId>,

    #[serde(default)]
    pub deadline_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub wait_for_quiet_state: Option<RawWaitForQuiet>,

    #[serde(default)]
    pub reward_status: Option<RawOptNumber>,

    #[serde(default)]
    pub proposal_creation_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub initial_voting_period_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub executed_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub failed_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub decided_timestamp_seconds: Option<RawOptNumber>,

    #[serde(default)]
    pub ballots: RawBallots,
}

impl RawProposal {
    /// Proposal id when it decodes, independent of the other fields.
    #[must_use]
    pub fn proposal_id(&self) -> Option<u64> {
        self.id.as_ref().and_then(RawProposalId::normalize)
    }
}

// each field decodes on its own; a bad one fails only its own read
impl StatusFields for RawProposal {
    type Error = NormalizeError;

    fn deadline(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "deadline_timestamp_seconds",
            self.deadline_timestamp_seconds.as_ref(),
        )
    }

    fn wait_for_quiet_deadline(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "wait_for_quiet_state.current_deadline_timestamp_seconds",
            self.wait_for_quiet_state
                .as_ref()
                .and_then(RawWaitForQuiet::deadline),
        )
    }

    fn reward_status(&self) -> Result<Option<RewardStatus>, NormalizeError> {
        Ok(opt_u64("reward_status", self.reward_status.as_ref())?.map(RewardStatus::from_code))
    }

    fn created_at(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "proposal_creation_timestamp_seconds",
            self.proposal_creation_timestamp_seconds.as_ref(),
        )
    }

    fn initial_voting_period(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "initial_voting_period_seconds",
            self.initial_voting_period_seconds.as_ref(),
        )
    }

    fn executed_at(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "executed_timestamp_seconds",
            self.executed_timestamp_seconds.as_ref(),
        )
    }

    fn failed_at(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "failed_timestamp_seconds",
            self.failed_timestamp_seconds.as_ref(),
        )
    }

    fn decided_at(&self) -> Result<Option<u64>, NormalizeError> {
        opt_u64(
            "decided_timestamp_seconds",
            self.decided_timestamp_seconds.as_ref(),
        )
    }
}

impl TryFrom<&RawProposal> for ProposalSnapshot {
    type Error = NormalizeError;

    fn try_from(raw: &RawProposal) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.proposal_id(),
            deadline_timestamp_seconds: raw.deadline()?,
            wait_for_quiet_current_deadline: raw.wait_for_quiet_deadline()?,
            reward_status: StatusFields::reward_status(raw)?,
            creation_timestamp_seconds: raw.created_at()?,
            initial_voting_period_seconds: raw.initial_voting_period()?,
            executed_timestamp_seconds: raw.executed_at()?,
            failed_timestamp_seconds: raw.failed_at()?,
            decided_timestamp_seconds: raw.decided_at()?,
            ballots: raw.ballots.normalize(),
        })
    }
}

impl TryFrom<RawProposal> for ProposalSnapshot {
    type Error = NormalizeError;

    fn try_from(raw: RawProposal) -> Result<Self, Self::Error> {
        Self::try_from(&raw)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawProposal {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn agent_style_proposal_normalizes() {
        let raw = parse(
            r#"{
                "id": [{"id": "42"}],
                "deadline_timestamp_seconds": [],
                "wait_for_quiet_state": [{"current_deadline_timestamp_seconds": "1700000500"}],
                "proposal_creation_timestamp_seconds": 1700000000,
                "initial_voting_period_seconds": 345600,
                "executed_timestamp_seconds": "0",
                "ballots": [
                    ["0A0B", {"vote": 1, "voting_power": "100", "cast_timestamp_seconds": 1700000100}],
                    ["zz", {"vote": 1}]
                ]
            }"#,
        );

        let p = ProposalSnapshot::try_from(&raw).unwrap();

        assert_eq!(p.id, Some(42));
        assert_eq!(p.deadline_timestamp_seconds, None);
        assert_eq!(p.wait_for_quiet_current_deadline, Some(1_700_000_500));
        assert_eq!(p.creation_timestamp_seconds, Some(1_700_000_000));
        assert_eq!(p.executed_timestamp_seconds, Some(0));
        assert_eq!(p.ballots.len(), 1);
        assert!(p.has_voted(&NeuronId::from_hex("0a0b").unwrap()));
    }

    #[test]
    fn ballot_map_shape_normalizes() {
        let raw = parse(r#"{"ballots": {"ff": {"cast_timestamp_seconds": 0}}}"#);
        let p = ProposalSnapshot::try_from(raw).unwrap();

        let id = NeuronId::from_hex("ff").unwrap();
        assert_eq!(p.ballot_for(&id), Some(&BallotRecord::default()));
        assert!(!p.has_voted(&id));
    }

    #[test]
    fn reward_status_maps_codes() {
        let p = ProposalSnapshot::try_from(parse(r#"{"reward_status": 2}"#)).unwrap();

        assert_eq!(p.reward_status, Some(RewardStatus::ReadyToSettle));
    }

    #[test]
    fn malformed_status_field_is_an_error() {
        let err = ProposalSnapshot::try_from(parse(r#"{"deadline_timestamp_seconds": "tomorrow"}"#))
            .unwrap_err();

        assert!(matches!(
            err,
            NormalizeError::Malformed {
                field: "deadline_timestamp_seconds",
                ..
            }
        ));
    }

    #[test]
    fn negative_timestamp_is_malformed() {
        let raw = parse(r#"{"id": 7, "failed_timestamp_seconds": -1}"#);

        assert!(ProposalSnapshot::try_from(&raw).is_err());
        assert_eq!(raw.proposal_id(), Some(7));
    }

    #[test]
    fn status_fields_fail_independently() {
        let raw = parse(r#"{"deadline_timestamp_seconds": 100, "failed_timestamp_seconds": "garbage"}"#);

        assert_eq!(raw.deadline(), Ok(Some(100)));
        assert_eq!(raw.executed_at(), Ok(None));
        assert!(matches!(
            raw.failed_at(),
            Err(NormalizeError::Malformed {
                field: "failed_timestamp_seconds",
                ..
            })
        ));
    }

    #[test]
    fn malformed_ballot_fields_default_to_zero() {
        let raw = parse(r#"{"ballots": {"01": {"vote": "yes", "cast_timestamp_seconds": "?"}}}"#);
        let p = ProposalSnapshot::try_from(raw).unwrap();

        assert_eq!(
            p.ballot_for(&NeuronId::from_hex("01").unwrap()),
            Some(&BallotRecord::default())
        );
    }
}
