use std::collections::BTreeMap;

use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::Sampler;
use nudge_game::{canonical_hash, Game};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::action::ActionOutcome;
use crate::config::MutationConfig;
use crate::metrics::{ActionTally, TallyRecorder};
use crate::profile::Profile;

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Requested number of successful edits.
    pub target: usize,
    /// Edits actually performed; equals `target` for a returned summary.
    pub completed: usize,
    /// Attempts made, successful or not.
    pub attempts: usize,
    /// Per-action tallies keyed by action name.
    pub tallies: BTreeMap<String, ActionTally>,
    /// Node count before the run.
    pub initial_nodes: usize,
    /// Edge count before the run.
    pub initial_edges: usize,
    /// Node count after the run.
    pub final_nodes: usize,
    /// Edge count after the run.
    pub final_edges: usize,
    /// Canonical hash of the game before the run.
    pub initial_hash: String,
    /// Canonical hash of the game after the run.
    pub final_hash: String,
}

/// Performs `target` successful edits drawn from `profile`.
///
/// Uses the default attempt cap of [`MutationConfig`].
pub fn mutate<S: Sampler + ?Sized>(
    game: &mut Game,
    target: usize,
    profile: Profile,
    sampler: &mut S,
) -> Result<RunSummary, NudgeError> {
    let config = MutationConfig {
        successes: target,
        profile,
        ..MutationConfig::default()
    };
    mutate_with_config(game, &config, sampler)
}

/// Runs the mutation loop described by `config`.
///
/// Each attempt samples a node, then an action, then whatever the action
/// needs. Rejected attempts cost nothing from the budget but count against
/// the attempt cap. The game is left in its partially mutated state when
/// an error is returned.
pub fn mutate_with_config<S: Sampler + ?Sized>(
    game: &mut Game,
    config: &MutationConfig,
    sampler: &mut S,
) -> Result<RunSummary, NudgeError> {
    let target = config.successes;
    let cap = config.attempt_cap();
    let initial_nodes = game.node_count();
    let initial_edges = game.edge_count();
    let initial_hash = canonical_hash(game);

    let mut recorder = TallyRecorder::new();
    let mut completed = 0usize;
    let mut attempts = 0usize;
    while completed < target {
        if game.is_empty() {
            warn!(requested = target, completed, attempts, "no nodes left to mutate");
            return Err(NudgeError::Mutation(exhausted(
                "empty-game",
                "game has no nodes left to mutate",
                target,
                completed,
                attempts,
            )));
        }
        if attempts >= cap {
            warn!(requested = target, completed, attempts, "mutation attempt cap reached");
            return Err(NudgeError::Mutation(
                exhausted(
                    "mutation-exhausted",
                    "attempt cap reached before the requested edits succeeded",
                    target,
                    completed,
                    attempts,
                )
                .with_hint("raise max_attempts or pick a profile that can add edges"),
            ));
        }
        attempts += 1;

        let node = sampler.uniform(0, game.node_count() - 1);
        let action = config.profile.sample_action(sampler);
        match action.apply(game, node, sampler)? {
            ActionOutcome::Applied => {
                completed += 1;
                recorder.record(action, true);
                debug!(
                    action = action.name(),
                    node,
                    nodes = game.node_count(),
                    edges = game.edge_count(),
                    "applied mutation"
                );
            }
            ActionOutcome::Rejected(reason) => {
                recorder.record(action, false);
                trace!(action = action.name(), node, ?reason, "rejected mutation");
            }
        }
    }

    let summary = RunSummary {
        target,
        completed,
        attempts,
        tallies: recorder.into_named(),
        initial_nodes,
        initial_edges,
        final_nodes: game.node_count(),
        final_edges: game.edge_count(),
        initial_hash,
        final_hash: canonical_hash(game),
    };
    info!(
        requested = target,
        attempts,
        nodes = summary.final_nodes,
        edges = summary.final_edges,
        "mutation run finished"
    );
    Ok(summary)
}

fn exhausted(
    code: &str,
    message: &str,
    target: usize,
    completed: usize,
    attempts: usize,
) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("target", target)
        .with_context("completed", completed)
        .with_context("attempts", attempts)
}
