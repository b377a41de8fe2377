use crate::{
    domain::policy::eligibility::Eligibility,
    dto::{
        error::Error, neuron::RawNeuron, params::RawGovernanceParameters, prelude::*,
        proposal::RawProposal,
    },
};

///
/// RawGoverningBody
/// One SNS as fetched by the caller. `parameters` overrides the configured
/// set for this body when present.
///

#[derive(Clone, Debug, Deserialize)]
pub struct RawGoverningBody {
    pub id: GoverningBodyId,

    #[serde(default)]
    pub parameters: Option<RawGovernanceParameters>,

    #[serde(default)]
    pub proposals: Vec<RawProposal>,

    #[serde(default)]
    pub neurons: Vec<RawNeuron>,
}

///
/// ProposalSummary
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProposalSummary {
    pub proposal_id: Option<u64>,
    pub status: String,
    pub accepting_votes: bool,
    pub deadline_timestamp_seconds: Option<u64>,
    pub seconds_remaining: Option<u64>,
    pub eligibility: Eligibility,
}

impl ProposalSummary {
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        self.accepting_votes && self.eligibility.has_eligible()
    }
}

///
/// GoverningBodySummary
///
/// Open proposals for one governing body. `actionable_count` counts the
/// proposals where the voter still has at least one eligible neuron.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GoverningBodySummary {
    pub id: GoverningBodyId,
    pub open_proposals: Vec<ProposalSummary>,
    pub open_count: u64,
    pub actionable_count: u64,
    pub error: Option<Error>,
}

impl GoverningBodySummary {
    #[must_use]
    pub fn new(id: GoverningBodyId, open_proposals: Vec<ProposalSummary>) -> Self {
        let actionable = open_proposals.iter().filter(|p| p.is_actionable()).count();

        Self {
            id,
            open_count: count(open_proposals.len()),
            actionable_count: count(actionable),
            open_proposals,
            error: None,
        }
    }

    #[must_use]
    pub const fn failed(id: GoverningBodyId, error: Error) -> Self {
        Self {
            id,
            open_proposals: Vec::new(),
            open_count: 0,
            actionable_count: 0,
            error: Some(error),
        }
    }
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

///
/// TESTS
///
