mod common;

use common::{diamond, ScriptedSampler};
use nudge_core::{Player, RngHandle};
use nudge_game::{canonical_hash, Game};
use nudge_mutate::{mutate, mutate_with_config, MutationConfig, Profile, SeedPolicy};

#[test]
fn deleting_node_three_matches_the_worked_example() {
    let mut game = diamond();
    // node 3, then slot 2 of the full profile (delete-node).
    let mut sampler = ScriptedSampler::new(&[3, 2]);
    let summary = mutate(&mut game, 1, Profile::Full, &mut sampler).unwrap();

    assert_eq!(game.node_count(), 3);
    assert_eq!(game.edges(), vec![(0, 1), (1, 2), (2, 0)]);
    assert_eq!(game.owners(), &[Player::Even, Player::Odd, Player::Even]);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.attempts, 1);
    assert_eq!(summary.initial_nodes, 4);
    assert_eq!(summary.final_edges, 3);
    assert_eq!(summary.tallies["delete-node"].succeeded, 1);
}

#[test]
fn rejected_attempts_do_not_consume_budget() {
    let mut game = diamond();
    // node 0 / remove-edge is rejected (one successor), node 3 / flip-owner applies.
    let mut sampler = ScriptedSampler::new(&[0, 0, 3, 3]);
    let summary = mutate(&mut game, 1, Profile::RemoveOnly, &mut sampler).unwrap();

    assert_eq!(summary.attempts, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.tallies["remove-edge"].attempted, 1);
    assert_eq!(summary.tallies["remove-edge"].succeeded, 0);
    assert_eq!(summary.tallies["flip-owner"].succeeded, 1);
    assert_eq!(game.owner(3).unwrap(), Player::Even);
    assert_eq!(sampler.remaining(), 0);
}

#[test]
fn remove_or_add_redirects_its_slots() {
    let mut game = diamond();
    // slot 2 is add-edge (0->1 already exists), slot 1 is flip-owner.
    let mut sampler = ScriptedSampler::new(&[0, 2, 1, 0, 1]);
    let summary = mutate(&mut game, 1, Profile::RemoveOrAdd, &mut sampler).unwrap();

    assert_eq!(summary.attempts, 2);
    assert_eq!(summary.tallies["add-edge"].attempted, 1);
    assert_eq!(summary.tallies["add-edge"].succeeded, 0);
    assert_eq!(summary.tallies["flip-owner"].succeeded, 1);
    assert_eq!(game.owner(0).unwrap(), Player::Odd);
}

#[test]
fn successes_match_the_target_exactly() {
    let mut rng = RngHandle::from_seed(11);
    let mut game = nudge_game::gen_random_game(40, 3, 8, &mut rng).unwrap();
    let summary = mutate(&mut game, 25, Profile::Full, &mut rng).unwrap();

    let succeeded: usize = summary.tallies.values().map(|tally| tally.succeeded).sum();
    let attempted: usize = summary.tallies.values().map(|tally| tally.attempted).sum();
    assert_eq!(summary.completed, 25);
    assert_eq!(succeeded, 25);
    assert_eq!(attempted, summary.attempts);
    assert!(summary.attempts >= 25);
    assert_eq!(summary.final_hash, canonical_hash(&game));
    game.check_invariants().unwrap();
}

#[test]
fn attempt_cap_raises_a_distinguishable_error() {
    let mut game = diamond();
    let config = MutationConfig {
        successes: 5,
        max_attempts: Some(1),
        ..MutationConfig::default()
    };
    let mut rng = RngHandle::from_seed(3);
    let err = mutate_with_config(&mut game, &config, &mut rng).unwrap_err();

    assert_eq!(err.code(), "mutation-exhausted");
    assert_eq!(err.info().context["attempts"], "1");
    assert_eq!(err.info().context["target"], "5");
    assert!(err.info().hint.is_some());
}

#[test]
fn empty_games_cannot_be_mutated() {
    let mut game = Game::new();
    let mut rng = RngHandle::from_seed(3);
    let err = mutate(&mut game, 1, Profile::Full, &mut rng).unwrap_err();
    assert_eq!(err.code(), "empty-game");
}

#[test]
fn zero_target_is_a_no_op() {
    let mut game = diamond();
    let mut sampler = ScriptedSampler::new(&[]);
    let summary = mutate(&mut game, 0, Profile::Full, &mut sampler).unwrap();
    assert_eq!(summary.attempts, 0);
    assert_eq!(summary.initial_hash, summary.final_hash);
    assert_eq!(game, diamond());
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = MutationConfig {
        successes: 12,
        profile: Profile::Full,
        seed_policy: SeedPolicy {
            master_seed: Some(2024),
        },
        ..MutationConfig::default()
    };
    let mut base_rng = RngHandle::from_seed(5);
    let base = nudge_game::gen_random_game(30, 3, 6, &mut base_rng).unwrap();

    let mut game_a = base.clone();
    let mut game_b = base.clone();
    let summary_a =
        mutate_with_config(&mut game_a, &config, &mut config.seed_policy.mutation_rng()).unwrap();
    let summary_b =
        mutate_with_config(&mut game_b, &config, &mut config.seed_policy.mutation_rng()).unwrap();

    assert_eq!(summary_a, summary_b);
    assert_eq!(game_a, game_b);
}

#[test]
fn summaries_serialize_to_json() {
    let mut game = diamond();
    let mut sampler = ScriptedSampler::new(&[1, 3]);
    let summary = mutate(&mut game, 1, Profile::Full, &mut sampler).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["tallies"]["flip-owner"]["succeeded"], 1);
    let back: nudge_mutate::RunSummary = serde_json::from_value(json).unwrap();
    assert_eq!(back, summary);
}
