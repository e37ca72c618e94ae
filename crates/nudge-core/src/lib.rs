#![deny(missing_docs)]
#![doc = "Core types shared by the nudge crates: the structured error taxonomy, player labels and the sampling source used by the mutation engine."]

pub mod errors;
pub mod player;
pub mod rng;

pub use errors::{ErrorInfo, NudgeError};
pub use player::Player;
pub use rng::{derive_substream_seed, RngHandle, Sampler};

/// Dense node identity within a game. Identities are always `0..n`.
pub type NodeIndex = usize;
