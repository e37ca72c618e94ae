use nudge_core::Sampler;
use serde::{Deserialize, Serialize};

use crate::action::Action;

/// Which actions a run may pick, each with equal probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Actions 0, 1, 2 and 3.
    RemoveOnly,
    /// Actions 0, 3 and 5.
    RemoveOrAdd,
    /// All six actions.
    #[default]
    Full,
}

impl Profile {
    /// Decodes the numeric profile used on the command line: 0 and 1 pick
    /// the restricted profiles, anything else selects [`Profile::Full`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Profile::RemoveOnly,
            1 => Profile::RemoveOrAdd,
            _ => Profile::Full,
        }
    }

    /// Actions eligible under this profile, in index order.
    pub fn actions(self) -> &'static [Action] {
        match self {
            Profile::RemoveOnly => &[
                Action::RemoveEdge,
                Action::BypassNode,
                Action::DeleteNode,
                Action::FlipOwner,
            ],
            Profile::RemoveOrAdd => &[Action::RemoveEdge, Action::FlipOwner, Action::AddEdge],
            Profile::Full => &Action::ALL,
        }
    }

    /// Draws one action uniformly from [`Profile::actions`].
    pub fn sample_action<S: Sampler + ?Sized>(self, sampler: &mut S) -> Action {
        let actions = self.actions();
        actions[sampler.uniform(0, actions.len() - 1)]
    }
}
