#![deny(missing_docs)]

//! Parity game store used by nudge.
//!
//! [`Game`] owns the node set (priority, owner, optional label) and the
//! forward and backward adjacency lists. Node identities are always dense;
//! removing nodes goes through [`Game::extract_subgame`], which rebuilds the
//! store over the surviving nodes. The remaining modules layer the pgsolver
//! text format, bottom SCC selection and the priority transforms on top of
//! the store without touching its invariants.

mod game;
mod generators;
mod hash;
mod pgsolver;
mod priorities;
mod scc;

pub use game::Game;
pub use generators::gen_random_game;
pub use hash::canonical_hash;
pub use pgsolver::{parse_pgsolver, parse_pgsolver_str, to_pgsolver_string, write_pgsolver};
pub use scc::bottom_scc;
