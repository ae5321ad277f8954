use serde::{Deserialize, Serialize};

use super::error::EvolutionError;

/// Number of rockets per generation.
pub const POOL_SIZE: usize = 30;
/// Number of genes per genome, which is also the number of ticks per generation.
pub const GENOME_LENGTH: usize = 200;
/// Bound on each component of a randomly drawn gene.
pub const MAX_ACCELERATION: f32 = 0.5;
/// Speed cap applied after every integration step.
pub const MAX_SPEED: f32 = 5.0;

/// Constants of one simulation run.
///
/// The defaults are the canonical values; other values exist for tests and for
/// hosts that load a parameter file at startup. Params never change mid-run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Rockets per generation (and mating pool size).
    pub pool_size: usize,
    /// Genes per genome.
    pub genome_length: usize,
    /// Bound on each random gene component.
    pub max_acceleration: f32,
    /// Velocity magnitude cap.
    pub max_speed: f32,
    /// Per-gene mutation probability.
    pub mutation_rate: f32,
    /// Mutation probability used when the whole outgoing generation crashed.
    pub stagnation_mutation_rate: f32,
    /// Standard deviation of mutation noise, relative to `max_acceleration`.
    pub mutation_noise_ratio: f32,
    /// Fitness multiplier for rockets that reached the target.
    pub completion_bonus: f32,
    /// Fitness multiplier for rockets that crashed.
    pub crash_penalty: f32,
    /// Number of generation summaries kept in the history.
    pub history_size: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            genome_length: GENOME_LENGTH,
            max_acceleration: MAX_ACCELERATION,
            max_speed: MAX_SPEED,
            mutation_rate: 0.1,
            stagnation_mutation_rate: 0.5,
            mutation_noise_ratio: 0.2,
            completion_bonus: 5.0,
            crash_penalty: 0.2,
            history_size: 100,
            seed: None,
        }
    }
}

impl Params {
    /// Standard deviation of the Gaussian noise added by mutation.
    pub fn mutation_sigma(&self) -> f32 {
        self.mutation_noise_ratio * self.max_acceleration
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        let invalid = |msg: &str| Err(EvolutionError::InvalidParams(msg.to_string()));

        if self.pool_size == 0 {
            return invalid("pool_size must be at least 1");
        }
        if self.genome_length == 0 {
            return invalid("genome_length must be at least 1");
        }
        if !(self.max_acceleration.is_finite() && self.max_acceleration > 0.0) {
            return invalid("max_acceleration must be finite and positive");
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return invalid("max_speed must be finite and positive");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate)
            || !(0.0..=1.0).contains(&self.stagnation_mutation_rate)
        {
            return invalid("mutation rates must lie in [0, 1]");
        }
        if !(self.mutation_noise_ratio.is_finite() && self.mutation_noise_ratio >= 0.0) {
            return invalid("mutation_noise_ratio must be finite and non-negative");
        }
        if !(self.completion_bonus >= 0.0 && self.crash_penalty >= 0.0) {
            return invalid("fitness multipliers must be non-negative");
        }
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: &str) -> Result<Self, EvolutionError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), EvolutionError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
