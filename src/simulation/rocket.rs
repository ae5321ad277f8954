//! Rocket behavior, state, and fitness.
//!
//! A rocket replays its genome one force per tick. It stops moving for good
//! once it reaches the target or crashes.

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::genome::Genome;
use super::params::Params;
use super::vector::Vector2;

/// Lifecycle of a rocket within one generation. Transitions are one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RocketState {
    /// Still moving.
    Flying,
    /// Reached the target and was snapped onto its center.
    Completed,
    /// Hit the obstacle or left the arena.
    Crashed,
}

/// A simulated rocket driven by its genome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Position in 2D space.
    pub pos: Vector2,
    /// Current velocity.
    pub vel: Vector2,
    /// Acceleration accumulated during the current tick.
    pub acc: Vector2,
    /// Force sequence, one gene per tick.
    pub genome: Genome,
    /// Flying, completed or crashed.
    pub state: RocketState,
    /// Raw fitness after evaluation, normalized once the generation advances.
    pub fitness: f32,
}

impl Rocket {
    /// Creates a flying rocket at rest at `spawn`.
    pub fn new(genome: Genome, spawn: Vector2) -> Self {
        Self {
            pos: spawn,
            vel: Vector2::ZERO,
            acc: Vector2::ZERO,
            genome,
            state: RocketState::Flying,
            fitness: 0.0,
        }
    }

    /// Current position.
    pub fn position(&self) -> Vector2 {
        self.pos
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RocketState {
        self.state
    }

    /// Checks if the rocket reached the target.
    pub fn is_completed(&self) -> bool {
        self.state == RocketState::Completed
    }

    /// Checks if the rocket crashed.
    pub fn is_crashed(&self) -> bool {
        self.state == RocketState::Crashed
    }

    /// Checks if the rocket is still moving.
    pub fn is_flying(&self) -> bool {
        self.state == RocketState::Flying
    }

    /// Adds a force to this tick's acceleration.
    pub fn apply_force(&mut self, force: Vector2) {
        self.acc += force;
    }

    /// Advances the rocket by one tick.
    ///
    /// # Arguments
    ///
    /// * `environment` - Target, obstacle and arena for this tick
    /// * `tick` - Index of the gene to apply
    /// * `params` - Simulation parameters (speed cap)
    pub fn update(&mut self, environment: &Environment, tick: usize, params: &Params) {
        if self.is_flying() {
            if environment.reached_target(self.pos) {
                self.state = RocketState::Completed;
                self.pos = environment.target.center;
            } else if environment.collides(self.pos) {
                self.state = RocketState::Crashed;
            }
        }

        if !self.is_flying() {
            return;
        }

        if let Some(force) = self.genome.gene(tick) {
            self.apply_force(force);
        }

        self.vel = (self.vel + self.acc).limit(params.max_speed);
        self.pos += self.vel;
        self.acc = Vector2::ZERO;
    }

    /// Scores the rocket by its proximity to the target.
    ///
    /// The score is `max(0, arena_width - distance)`, multiplied by the
    /// completion bonus or the crash penalty. It is stored in `fitness` and
    /// returned.
    pub fn calculate_fitness(&mut self, environment: &Environment, params: &Params) -> f32 {
        let distance = environment.distance_to_target(self.pos);
        let mut fitness = (environment.arena.width - distance).max(0.0);

        match self.state {
            RocketState::Completed => fitness *= params.completion_bonus,
            RocketState::Crashed => fitness *= params.crash_penalty,
            RocketState::Flying => {}
        }

        self.fitness = fitness;
        fitness
    }
}
