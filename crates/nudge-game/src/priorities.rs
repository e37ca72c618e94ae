//! Priority transforms. None of them touches the edge structure except
//! [`Game::reindex_with_mapping`], which renumbers nodes through
//! [`Game::permute`].

use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::NodeIndex;

use crate::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relabel {
    Inflate,
    Renumber,
    Compress,
}

impl Game {
    /// Gives every node a distinct priority, keeping order and parity.
    pub fn inflate(&mut self) {
        self.relabel(Relabel::Inflate);
    }

    /// Maps distinct priorities onto the smallest values that keep order and parity.
    pub fn renumber(&mut self) {
        self.relabel(Relabel::Renumber);
    }

    /// Like [`Game::renumber`], but neighbouring priorities of equal parity merge.
    pub fn compress(&mut self) {
        self.relabel(Relabel::Compress);
    }

    /// Renumbers nodes by ascending priority (ties keep identity order).
    ///
    /// Returns `mapping` with `mapping[new] = old`; passing it to
    /// [`Game::permute`] restores the previous numbering.
    pub fn reindex_with_mapping(&mut self) -> Result<Vec<NodeIndex>, NudgeError> {
        let order = self.priority_order();
        let mut position = vec![0; order.len()];
        for (new_id, &old_id) in order.iter().enumerate() {
            position[old_id] = new_id;
        }
        self.permute(&position)?;
        Ok(order)
    }

    /// Renumbers nodes by ascending priority.
    pub fn reindex(&mut self) -> Result<(), NudgeError> {
        self.reindex_with_mapping().map(|_| ())
    }

    /// Swaps the roles of the players: every priority shifts by one and every owner flips.
    pub fn evenodd(&mut self) -> Result<(), NudgeError> {
        for node in 0..self.node_count() {
            self.priority[node] = self.priority[node]
                .checked_add(1)
                .ok_or_else(|| overflow(node))?;
            self.owner[node] = self.owner[node].opponent();
        }
        Ok(())
    }

    /// Turns a min-game into a max-game and back.
    ///
    /// Priorities are reflected around the largest priority rounded up to
    /// an even value, so parity is kept and order is reversed.
    pub fn minmax(&mut self) -> Result<(), NudgeError> {
        let Some(&max) = self.priority.iter().max() else {
            return Ok(());
        };
        let pivot = max.checked_add(max & 1).ok_or_else(|| {
            NudgeError::Game(
                ErrorInfo::new("priority-overflow", "priority is too large to reflect")
                    .with_context("priority", max),
            )
        })?;
        for priority in &mut self.priority {
            *priority = pivot - *priority;
        }
        Ok(())
    }

    fn priority_order(&self) -> Vec<NodeIndex> {
        let mut order: Vec<NodeIndex> = self.nodes().collect();
        order.sort_by_key(|&node| self.priority[node]);
        order
    }

    fn relabel(&mut self, mode: Relabel) {
        let mut last: Option<(u64, u64)> = None;
        for node in self.priority_order() {
            let original = self.priority[node];
            let parity = original & 1;
            let value = match last {
                None => parity,
                Some((prev_original, prev_value)) => {
                    let same_priority = prev_original == original && mode != Relabel::Inflate;
                    let same_parity = mode == Relabel::Compress && prev_original & 1 == parity;
                    if same_priority || same_parity {
                        prev_value
                    } else {
                        next_with_parity(prev_value, parity)
                    }
                }
            };
            self.priority[node] = value;
            last = Some((original, value));
        }
    }
}

fn next_with_parity(previous: u64, parity: u64) -> u64 {
    let candidate = previous + 1;
    if candidate & 1 == parity {
        candidate
    } else {
        candidate + 1
    }
}

fn overflow(node: NodeIndex) -> NudgeError {
    NudgeError::Game(
        ErrorInfo::new("priority-overflow", "priority cannot be shifted").with_context("node", node),
    )
}
