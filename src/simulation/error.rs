//! Error taxonomy for the evolution core.

use thiserror::Error;

/// Errors raised by the simulation.
///
/// Degenerate fitness totals and selection overruns are not errors: they are
/// resolved in place and surfaced through the generation report.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// A genome entered crossover with the wrong number of genes.
    #[error("genome has {actual} genes, expected {expected}")]
    InvalidGenomeLength {
        /// Genome length the run is configured for.
        expected: usize,
        /// Length of the offending genome.
        actual: usize,
    },

    /// Run parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Mutation noise distribution could not be built.
    #[error("invalid mutation noise: {0}")]
    Noise(#[from] rand_distr::NormalError),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
