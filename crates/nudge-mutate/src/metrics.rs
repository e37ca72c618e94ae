use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Attempt and success counts for one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTally {
    /// Number of times the action was drawn.
    pub attempted: usize,
    /// Number of times it applied.
    pub succeeded: usize,
}

/// Collects per-action tallies during a run.
#[derive(Debug, Default)]
pub struct TallyRecorder {
    tallies: BTreeMap<Action, ActionTally>,
}

impl TallyRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one attempt of `action`.
    pub fn record(&mut self, action: Action, succeeded: bool) {
        let tally = self.tallies.entry(action).or_default();
        tally.attempted += 1;
        if succeeded {
            tally.succeeded += 1;
        }
    }

    /// Tallies keyed by action name.
    pub fn into_named(self) -> BTreeMap<String, ActionTally> {
        self.tallies
            .into_iter()
            .map(|(action, tally)| (action.name().to_string(), tally))
            .collect()
    }
}
