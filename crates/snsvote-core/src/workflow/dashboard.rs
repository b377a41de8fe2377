use crate::{
    Error,
    config::ConfigModel,
    domain::policy::{
        eligibility::{Eligibility, EligibilityPolicy},
        proposal_status::ProposalStatusPolicy,
        voting_power::VotingPowerError,
    },
    dto::{
        dashboard::{GoverningBodySummary, ProposalSummary, RawGoverningBody},
        proposal::RawProposal,
    },
    time::now_secs,
    workflow::{prelude::*, proposal::ProposalStatusWorkflow},
};

///
/// GoverningBodyInput
/// Normalized inputs for one governing body.
///

#[derive(Clone, Debug)]
pub struct GoverningBodyInput {
    pub id: GoverningBodyId,
    pub parameters: GovernanceParameters,
    pub proposals: Vec<ProposalSnapshot>,
    pub neurons: Vec<NeuronSnapshot>,
}

///
/// DashboardWorkflow
///
/// Builds the per-body open-proposal view for one voter. A body that fails
/// is reported with its error; the others are still evaluated.
///

pub struct DashboardWorkflow;

impl DashboardWorkflow {
    #[must_use]
    pub fn summarize_body(
        input: &GoverningBodyInput,
        voter: &Principal,
        now: u64,
    ) -> GoverningBodySummary {
        let open = input
            .proposals
            .iter()
            .filter_map(|proposal| {
                Self::evaluate(&input.id, proposal, &input.neurons, &input.parameters, voter, now)
                    .transpose()
            })
            .collect();

        Self::finish(input.id.clone(), open)
    }

    /// Raw form of [`Self::summarize_body`]. Parameters come from the body
    /// when present, otherwise from `config`. A proposal is dropped once a
    /// decodable status field shows it closed; an open one that does not fully
    /// decode is kept with empty eligibility.
    #[must_use]
    pub fn summarize_raw(
        config: &ConfigModel,
        raw: &RawGoverningBody,
        voter: &Principal,
        now: u64,
    ) -> GoverningBodySummary {
        let params = raw
            .parameters
            .as_ref()
            .map_or_else(|| config.parameters(&raw.id), GovernanceParameters::from);
        let neurons: Vec<NeuronSnapshot> = raw.neurons.iter().map(NeuronSnapshot::from).collect();

        let mut open = Vec::new();
        for raw_proposal in &raw.proposals {
            if !ProposalStatusWorkflow::is_accepting_votes_raw(raw_proposal, now) {
                continue;
            }

            match ProposalSnapshot::try_from(raw_proposal) {
                Ok(proposal) => {
                    match Self::evaluate(&raw.id, &proposal, &neurons, &params, voter, now) {
                        Ok(Some(summary)) => open.push(summary),
                        Ok(None) => {}
                        Err(err) => return Self::finish(raw.id.clone(), Err(err)),
                    }
                }
                Err(err) => {
                    let proposal_id = raw_proposal.proposal_id();
                    log!(
                        Topic::Normalize,
                        Warn,
                        "{}: proposal {proposal_id:?} kept open: {err}",
                        raw.id
                    );
                    open.push(Self::undecoded(raw_proposal, now));
                }
            }
        }

        Self::finish(raw.id.clone(), Ok(open))
    }

    /// Summaries ordered by open-proposal count, most first; ties by id.
    #[must_use]
    pub fn build(
        inputs: &[GoverningBodyInput],
        voter: &Principal,
        now: u64,
    ) -> Vec<GoverningBodySummary> {
        let mut summaries: Vec<_> = inputs
            .iter()
            .map(|input| Self::summarize_body(input, voter, now))
            .collect();
        Self::sort(&mut summaries);

        summaries
    }

    #[must_use]
    pub fn build_raw(
        config: &ConfigModel,
        bodies: &[RawGoverningBody],
        voter: &Principal,
        now: u64,
    ) -> Vec<GoverningBodySummary> {
        let mut summaries: Vec<_> = bodies
            .iter()
            .map(|body| Self::summarize_raw(config, body, voter, now))
            .collect();
        Self::sort(&mut summaries);

        summaries
    }

    /// [`Self::build`] at the current wall-clock time.
    #[must_use]
    pub fn build_now(inputs: &[GoverningBodyInput], voter: &Principal) -> Vec<GoverningBodySummary> {
        Self::build(inputs, voter, now_secs())
    }

    pub fn sort(summaries: &mut [GoverningBodySummary]) {
        summaries.sort_by(|a, b| {
            b.open_count
                .cmp(&a.open_count)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    // open proposals only; closed ones yield None
    fn evaluate(
        body: &GoverningBodyId,
        proposal: &ProposalSnapshot,
        neurons: &[NeuronSnapshot],
        params: &GovernanceParameters,
        voter: &Principal,
        now: u64,
    ) -> Result<Option<ProposalSummary>, VotingPowerError> {
        if !ProposalStatusPolicy::is_accepting_votes(proposal, now) {
            return Ok(None);
        }

        let eligibility = EligibilityPolicy::resolve(proposal, neurons, params, voter, now)?;
        log!(
            Topic::Eligibility,
            Debug,
            "{body}: proposal {:?} has {} eligible neurons",
            proposal.id,
            eligibility.eligible_count
        );

        Ok(Some(ProposalSummary {
            proposal_id: proposal.id,
            status: ProposalStatusPolicy::classify_status(proposal, now).to_string(),
            accepting_votes: true,
            deadline_timestamp_seconds: ProposalStatusPolicy::voting_deadline(proposal),
            seconds_remaining: ProposalStatusPolicy::seconds_remaining(proposal, now),
            eligibility,
        }))
    }

    // open but not fully decodable; eligibility stays empty
    fn undecoded(raw: &RawProposal, now: u64) -> ProposalSummary {
        let deadline = ProposalStatusWorkflow::voting_deadline_raw(raw);

        ProposalSummary {
            proposal_id: raw.proposal_id(),
            status: ProposalStatusWorkflow::classify_status_raw(raw, now).to_string(),
            accepting_votes: true,
            deadline_timestamp_seconds: deadline,
            seconds_remaining: deadline.map(|d| d.saturating_sub(now)),
            eligibility: Eligibility::default(),
        }
    }

    fn finish(
        id: GoverningBodyId,
        open: Result<Vec<ProposalSummary>, VotingPowerError>,
    ) -> GoverningBodySummary {
        match open {
            Ok(open) => {
                let summary = GoverningBodySummary::new(id, open);
                log!(
                    Topic::Dashboard,
                    Debug,
                    "{}: {} open, {} actionable",
                    summary.id,
                    summary.open_count,
                    summary.actionable_count
                );

                summary
            }
            Err(err) => {
                log!(Topic::Dashboard, Error, "{id}: {err}");

                GoverningBodySummary::failed(id, Error::from(err).public())
            }
        }
    }
}

///
/// TESTS
///
