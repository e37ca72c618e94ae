use std::fs;
use std::path::Path;

use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::RngHandle;
use serde::{Deserialize, Serialize};

use crate::determinism;
use crate::profile::Profile;

/// YAML-configurable parameters governing a mutation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Number of successful edits to perform.
    #[serde(default = "default_successes")]
    pub successes: usize,
    /// Action profile.
    #[serde(default)]
    pub profile: Profile,
    /// Attempts allowed per requested success when `max_attempts` is unset.
    #[serde(default = "default_attempt_factor")]
    pub attempt_factor: usize,
    /// Explicit cap on the total number of attempts.
    #[serde(default)]
    pub max_attempts: Option<usize>,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_successes() -> usize {
    1
}

fn default_attempt_factor() -> usize {
    1000
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            successes: default_successes(),
            profile: Profile::default(),
            attempt_factor: default_attempt_factor(),
            max_attempts: None,
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl MutationConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, NudgeError> {
        serde_yaml::from_str(text)
            .map_err(|err| NudgeError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, NudgeError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            NudgeError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            NudgeError::Config(info) => NudgeError::Config(info.with_context("path", path.display())),
            other => other,
        })
    }

    /// Total number of attempts the engine may make before giving up.
    pub fn attempt_cap(&self) -> usize {
        self.max_attempts.unwrap_or_else(|| {
            self.successes
                .saturating_mul(self.attempt_factor)
                .max(self.attempt_factor)
        })
    }
}

/// Seeding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed; runs without one draw from operating system entropy.
    #[serde(default)]
    pub master_seed: Option<u64>,
}

impl SeedPolicy {
    /// Sampler for the mutation loop.
    pub fn mutation_rng(&self) -> RngHandle {
        match self.master_seed {
            Some(seed) => RngHandle::from_seed(determinism::mutation_seed(seed)),
            None => RngHandle::from_entropy(),
        }
    }

    /// Sampler for choosing the bottom SCC start node.
    pub fn selection_rng(&self) -> RngHandle {
        match self.master_seed {
            Some(seed) => RngHandle::from_seed(determinism::selection_seed(seed)),
            None => RngHandle::from_entropy(),
        }
    }
}
