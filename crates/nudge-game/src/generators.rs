use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::rng::RngHandle;
use nudge_core::Player;
use rand::Rng;

use crate::game::Game;

/// Generates a random game where every node has between one and `max_out` successors.
pub fn gen_random_game(
    n_nodes: usize,
    max_out: usize,
    max_priority: u64,
    rng: &mut RngHandle,
) -> Result<Game, NudgeError> {
    if n_nodes == 0 {
        return Err(NudgeError::Game(ErrorInfo::new(
            "empty-game",
            "random game generator requires at least one node",
        )));
    }
    let mut game = Game::new();
    for _ in 0..n_nodes {
        let priority = rng.inner_mut().gen_range(0..=max_priority);
        let owner = if rng.inner_mut().gen_bool(0.5) {
            Player::Odd
        } else {
            Player::Even
        };
        game.add_node(priority, owner);
    }
    for node in 0..n_nodes {
        let degree = rng.inner_mut().gen_range(1..=max_out.max(1));
        for _ in 0..degree {
            let target = rng.inner_mut().gen_range(0..n_nodes);
            game.add_edge(node, target)?;
        }
    }
    Ok(game)
}
