#![allow(dead_code)]

use std::collections::VecDeque;

use nudge_core::Player;
use nudge_core::Sampler;
use nudge_game::Game;

/// Sampler that replays a fixed list of draws and checks each one is in range.
pub struct ScriptedSampler {
    draws: VecDeque<usize>,
}

impl ScriptedSampler {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl Sampler for ScriptedSampler {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        let value = self.draws.pop_front().expect("script exhausted");
        assert!(
            low <= value && value <= high,
            "scripted draw {value} outside {low}..={high}"
        );
        value
    }
}

/// `0->1, 1->2, 2->0, 2->3` with owners `[0, 1, 0, 1]`.
pub fn diamond() -> Game {
    Game::from_edges(
        &[Player::Even, Player::Odd, Player::Even, Player::Odd],
        &[(0, 1), (1, 2), (2, 0), (2, 3)],
    )
    .unwrap()
}
