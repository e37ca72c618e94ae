//! The two players of a parity game.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner label of a node. `Even` is written as `0`, `Odd` as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 0.
    Even,
    /// Player 1.
    Odd,
}

impl Player {
    /// Decodes the wire representation; only `0` and `1` are valid.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Player::Even),
            1 => Some(Player::Odd),
            _ => None,
        }
    }

    /// Returns the wire representation.
    pub fn code(self) -> u8 {
        match self {
            Player::Even => 0,
            Player::Odd => 1,
        }
    }

    /// Returns the opponent.
    pub fn opponent(self) -> Self {
        match self {
            Player::Even => Player::Odd,
            Player::Odd => Player::Even,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
