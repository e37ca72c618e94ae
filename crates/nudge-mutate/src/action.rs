use nudge_core::errors::NudgeError;
use nudge_core::{NodeIndex, Sampler};
use nudge_game::Game;
use serde::{Deserialize, Serialize};

/// Graph editing actions, numbered as in the profile tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// 0: drop one outgoing edge of a node with at least two successors.
    RemoveEdge,
    /// 1: splice out a node with a single non-self successor, wiring its predecessors to that successor.
    BypassNode,
    /// 2: delete the node.
    DeleteNode,
    /// 3: hand the node to the other player.
    FlipOwner,
    /// 4: redirect one predecessor past the node to all of its successors.
    ReroutePredecessor,
    /// 5: add an edge to a random target.
    AddEdge,
}

/// Why an attempted action did not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Action 0 needs at least two successors.
    TooFewSuccessors,
    /// Action 1 needs exactly one successor other than the node itself.
    NotBypassable,
    /// Action 4 needs a predecessor.
    NoPredecessors,
    /// Action 4 drew the node's own self-loop.
    SelfPredecessor,
    /// Action 5 drew an edge that already exists.
    EdgeExists,
}

/// Result of applying an action to a sampled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The edit happened and counts against the budget.
    Applied,
    /// The precondition failed; the game is unchanged.
    Rejected(Rejection),
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 6] = [
        Action::RemoveEdge,
        Action::BypassNode,
        Action::DeleteNode,
        Action::FlipOwner,
        Action::ReroutePredecessor,
        Action::AddEdge,
    ];

    /// Looks up an action by its table index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of the action.
    pub fn index(self) -> usize {
        match self {
            Action::RemoveEdge => 0,
            Action::BypassNode => 1,
            Action::DeleteNode => 2,
            Action::FlipOwner => 3,
            Action::ReroutePredecessor => 4,
            Action::AddEdge => 5,
        }
    }

    /// Stable name used in logs and run summaries.
    pub fn name(self) -> &'static str {
        match self {
            Action::RemoveEdge => "remove-edge",
            Action::BypassNode => "bypass-node",
            Action::DeleteNode => "delete-node",
            Action::FlipOwner => "flip-owner",
            Action::ReroutePredecessor => "reroute-predecessor",
            Action::AddEdge => "add-edge",
        }
    }

    /// Applies the action to `node`, drawing any further choices from `sampler`.
    ///
    /// Actions that delete a node replace `game` with a compacted copy, so
    /// every identity held by the caller is stale afterwards.
    pub fn apply<S: Sampler + ?Sized>(
        self,
        game: &mut Game,
        node: NodeIndex,
        sampler: &mut S,
    ) -> Result<ActionOutcome, NudgeError> {
        game.ensure_node(node)?;
        match self {
            Action::RemoveEdge => remove_edge(game, node, sampler),
            Action::BypassNode => bypass_node(game, node),
            Action::DeleteNode => {
                *game = game.without_node(node)?;
                Ok(ActionOutcome::Applied)
            }
            Action::FlipOwner => {
                game.flip_owner(node)?;
                Ok(ActionOutcome::Applied)
            }
            Action::ReroutePredecessor => reroute_predecessor(game, node, sampler),
            Action::AddEdge => add_edge(game, node, sampler),
        }
    }
}

fn remove_edge<S: Sampler + ?Sized>(
    game: &mut Game,
    node: NodeIndex,
    sampler: &mut S,
) -> Result<ActionOutcome, NudgeError> {
    let successors = game.successors(node)?;
    if successors.len() < 2 {
        return Ok(ActionOutcome::Rejected(Rejection::TooFewSuccessors));
    }
    let target = successors[sampler.uniform(0, successors.len() - 1)];
    game.remove_edge(node, target)?;
    Ok(ActionOutcome::Applied)
}

fn bypass_node(game: &mut Game, node: NodeIndex) -> Result<ActionOutcome, NudgeError> {
    let successors = game.successors(node)?.to_vec();
    if successors.len() != 1 || successors[0] == node {
        return Ok(ActionOutcome::Rejected(Rejection::NotBypassable));
    }
    let predecessors = game.predecessors(node)?.to_vec();
    for &from in &predecessors {
        for &to in &successors {
            game.add_edge(from, to)?;
        }
    }
    *game = game.without_node(node)?;
    Ok(ActionOutcome::Applied)
}

fn reroute_predecessor<S: Sampler + ?Sized>(
    game: &mut Game,
    node: NodeIndex,
    sampler: &mut S,
) -> Result<ActionOutcome, NudgeError> {
    let predecessors = game.predecessors(node)?;
    if predecessors.is_empty() {
        return Ok(ActionOutcome::Rejected(Rejection::NoPredecessors));
    }
    let from = predecessors[sampler.uniform(0, predecessors.len() - 1)];
    if from == node {
        return Ok(ActionOutcome::Rejected(Rejection::SelfPredecessor));
    }
    game.remove_edge(from, node)?;
    let successors = game.successors(node)?.to_vec();
    for to in successors {
        game.add_edge(from, to)?;
    }
    Ok(ActionOutcome::Applied)
}

fn add_edge<S: Sampler + ?Sized>(
    game: &mut Game,
    node: NodeIndex,
    sampler: &mut S,
) -> Result<ActionOutcome, NudgeError> {
    let target = sampler.uniform(0, game.node_count() - 1);
    if game.add_edge(node, target)? {
        Ok(ActionOutcome::Applied)
    } else {
        Ok(ActionOutcome::Rejected(Rejection::EdgeExists))
    }
}
