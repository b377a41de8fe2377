use crate::{
    domain::policy::proposal_status::{ProposalStatusPolicy, StatusLabel},
    dto::proposal::RawProposal,
};

///
/// ProposalStatusWorkflow
///
/// Status rules over undecoded governance responses. A field that fails to
/// decode only counts once a rule reaches it; then the proposal is reported
/// as open, or `Unknown`.
///

pub struct ProposalStatusWorkflow;

impl ProposalStatusWorkflow {
    #[must_use]
    pub fn is_accepting_votes_raw(raw: &RawProposal, now: u64) -> bool {
        ProposalStatusPolicy::try_is_accepting_votes(raw, now).unwrap_or(true)
    }

    #[must_use]
    pub fn classify_status_raw(raw: &RawProposal, now: u64) -> StatusLabel {
        ProposalStatusPolicy::try_classify_status(raw, now).unwrap_or(StatusLabel::Unknown)
    }

    /// `None` when no deadline is known or the deciding field fails to decode.
    #[must_use]
    pub fn voting_deadline_raw(raw: &RawProposal) -> Option<u64> {
        ProposalStatusPolicy::try_voting_deadline(raw).ok().flatten()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn parse(json: &str) -> RawProposal {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn passed_deadline_stays_closed_despite_bad_failed_timestamp() {
        let raw = parse(r#"{"deadline_timestamp_seconds": 100, "failed_timestamp_seconds": "garbage"}"#);

        assert!(!ProposalStatusWorkflow::is_accepting_votes_raw(&raw, NOW));
        assert_eq!(ProposalStatusWorkflow::voting_deadline_raw(&raw), Some(100));
        assert_eq!(
            ProposalStatusWorkflow::classify_status_raw(&raw, NOW),
            StatusLabel::Unknown
        );
    }

    #[test]
    fn bad_lower_priority_field_behind_deadline_is_ignored() {
        let raw = parse(
            r#"{
                "deadline_timestamp_seconds": 100,
                "proposal_creation_timestamp_seconds": "yesterday",
                "reward_status": "?"
            }"#,
        );

        assert!(!ProposalStatusWorkflow::is_accepting_votes_raw(&raw, NOW));
        assert_eq!(
            ProposalStatusWorkflow::classify_status_raw(&raw, NOW),
            StatusLabel::VotingClosed
        );
    }

    #[test]
    fn bad_field_reached_by_a_rule_defaults_open() {
        let raw = parse(r#"{"reward_status": "settled", "decided_timestamp_seconds": 5}"#);

        assert!(ProposalStatusWorkflow::is_accepting_votes_raw(&raw, NOW));
        assert_eq!(ProposalStatusWorkflow::voting_deadline_raw(&raw), None);
        assert_eq!(
            ProposalStatusWorkflow::classify_status_raw(&raw, NOW),
            StatusLabel::Unknown
        );
    }
}
