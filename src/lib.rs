//! # Krokets - Evolving Rockets
//!
//! A population of rockets learns, generation by generation, to fly from a
//! spawn point to a target while avoiding an obstacle.
//!
//! ## Features
//!
//! - Genomes of per-tick force vectors, one gene applied per tick
//! - Simple kinematics with a speed cap
//! - Fitness by proximity to the target, with completion bonus and crash penalty
//! - Roulette wheel selection, single-point crossover and Gaussian mutation
//! - Seeded, reproducible runs
//! - Per-generation diagnostics for host-side logging
//!
//! ## Core Modules
//!
//! - [`simulation::genome`] - Force sequences, crossover and mutation
//! - [`simulation::rocket`] - Rocket state machine and fitness
//! - [`simulation::population`] - Selection and breeding
//! - [`simulation::driver`] - Tick-driven entry point for the host
//!
//! The host (a renderer, or the headless binary in this crate) owns the arena
//! geometry and calls [`simulation::driver::Driver::tick`] once per frame.

/// Core simulation logic and data structures.
pub mod simulation {
    /// Tick counting and generation boundaries.
    pub mod driver;
    /// Arena geometry supplied by the host.
    pub mod environment;
    /// Error types.
    pub mod error;
    /// Force-vector genomes.
    pub mod genome;
    /// Simulation parameters.
    pub mod params;
    /// Population lifecycle, selection and reproduction.
    pub mod population;
    /// Generation diagnostics and fitness history.
    pub mod report;
    /// Rocket kinematics, state, and fitness.
    pub mod rocket;
    /// Two-dimensional vector math.
    pub mod vector;
}
