use snsvote_core::{
    domain::policy::eligibility::NeuronEligibility, model::NeuronPermissionType, prelude::*,
};
use snsvote_testkit::{Fake, NeuronBuilder, ProposalBuilder, SIX_MONTHS_SECONDS, reference_parameters};

const NOW: u64 = 1_700_000_000;

#[test]
fn counts_only_neurons_the_voter_can_still_use() {
    let voter = Fake::principal(1);
    let other = Fake::principal(2);

    let neurons = [
        // eligible: 2 tokens of power
        NeuronBuilder::new(1, NOW).voter(voter).build(),
        // eligible: 2.5 tokens of power
        NeuronBuilder::new(2, NOW)
            .aging_since(NOW - SIX_MONTHS_SECONDS)
            .voter(voter)
            .build(),
        // already voted
        NeuronBuilder::new(3, NOW).voter(voter).build(),
        // someone else's neuron
        NeuronBuilder::new(4, NOW).voter(other).build(),
        // voter holds permissions, but not vote
        NeuronBuilder::new(5, NOW)
            .permission(voter, [NeuronPermissionType::ManagePrincipals])
            .build(),
        // below the minimum dissolve delay
        NeuronBuilder::new(6, NOW).dissolve_delay(1).voter(voter).build(),
    ];

    let proposal = ProposalBuilder::new(1)
        .deadline(NOW + 100)
        .voted(Fake::neuron_id(3), NOW - 5)
        .pending(Fake::neuron_id(1))
        .build();

    let eligibility =
        resolve_eligibility(&proposal, &neurons, &reference_parameters(), &voter, NOW).unwrap();

    assert_eq!(eligibility.eligible_count, 2);
    assert_eq!(eligibility.total_voting_power, 450_000_000);
}

#[test]
fn per_neuron_checks_run_in_order() {
    let voter = Fake::principal(1);
    let params = reference_parameters();
    let proposal = ProposalBuilder::new(1).voted(Fake::neuron_id(1), NOW).build();

    // no power is reported before the ballot is looked at
    let voted_without_power = NeuronBuilder::new(1, NOW).stake(0).voter(voter).build();
    let voted = NeuronBuilder::new(1, NOW).voter(voter).build();
    let stranger = NeuronBuilder::new(1, NOW).build();

    let check = |neuron| EligibilityPolicy::check_neuron(&proposal, neuron, &params, &voter, NOW);

    assert_eq!(check(&voted_without_power), Ok(NeuronEligibility::NoVotingPower));
    assert_eq!(check(&voted), Ok(NeuronEligibility::AlreadyVoted));
    assert_eq!(check(&stranger), Ok(NeuronEligibility::NoVotePermission));
}

#[test]
fn neuron_without_id_has_not_voted() {
    let voter = Fake::principal(9);
    let neuron = NeuronBuilder::new(1, NOW).without_id().voter(voter).build();
    let proposal = ProposalBuilder::new(1).voted(Fake::neuron_id(1), NOW).build();

    let eligibility =
        resolve_eligibility(&proposal, &[neuron], &reference_parameters(), &voter, NOW).unwrap();

    assert!(eligibility.has_eligible());
}

#[test]
fn order_of_neurons_does_not_matter() {
    let voter = Fake::principal(1);
    let params = reference_parameters();
    let proposal = ProposalBuilder::new(1).build();

    let mut neurons: Vec<_> = (1..=20)
        .map(|seed| {
            NeuronBuilder::new(seed, NOW)
                .stake(u64::from(seed) * 12_345_678)
                .aging_since(NOW - u64::from(seed) * 86_400)
                .voter(voter)
                .build()
        })
        .collect();

    let forward = resolve_eligibility(&proposal, &neurons, &params, &voter, NOW).unwrap();
    neurons.reverse();
    let backward = resolve_eligibility(&proposal, &neurons, &params, &voter, NOW).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.eligible_count, 20);
}

#[test]
fn overflowing_neuron_is_an_error_not_a_skip() {
    let voter = Fake::principal(1);
    let neuron = NeuronBuilder::new(1, NOW)
        .stake(u64::MAX)
        .multiplier(u64::MAX)
        .voter(voter)
        .build();

    let result = resolve_eligibility(
        &ProposalBuilder::new(1).build(),
        &[neuron],
        &reference_parameters(),
        &voter,
        NOW,
    );

    assert!(result.is_err());
}
