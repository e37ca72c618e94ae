#![deny(missing_docs)]

//! Randomized mutation engine for parity games.
//!
//! The engine samples a node and one of six editing actions per attempt,
//! applies the action when its structural precondition holds, and stops
//! once the requested number of edits has succeeded or the attempt cap is
//! reached.

/// Editing actions and their preconditions.
pub mod action;
/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Retry loop and public `mutate` entry points.
pub mod engine;
/// Per-action attempt and success counters.
pub mod metrics;
/// Action profiles.
pub mod profile;

pub use action::{Action, ActionOutcome, Rejection};
pub use config::{MutationConfig, SeedPolicy};
pub use engine::{mutate, mutate_with_config, RunSummary};
pub use metrics::{ActionTally, TallyRecorder};
pub use profile::Profile;
