//! Population of rockets and the generational genetic algorithm.
//!
//! Each generation is evaluated by fitness, a mating pool is drawn by
//! fitness-proportionate (roulette wheel) selection, and the next generation is
//! bred from one mother/father pair taken from that pool.

use log::{debug, info, warn};
use rand::Rng;
use rand_distr::Normal;

use super::environment::Environment;
use super::error::EvolutionError;
use super::genome::Genome;
use super::params::Params;
use super::report::{FitnessEntry, FitnessSummary, GenerationReport, Selection};
use super::rocket::Rocket;

/// Fixed-size set of rockets flying the same generation.
#[derive(Debug, Clone)]
pub struct Population {
    rockets: Vec<Rocket>,
    noise: Normal<f32>,
    generation: u32,
}

impl Population {
    /// Creates a first generation of rockets with random genomes at the spawn point.
    pub fn new<R: Rng + ?Sized>(
        params: &Params,
        environment: &Environment,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        params.validate()?;

        let spawn = environment.spawn_point();
        let rockets = (0..params.pool_size)
            .map(|_| {
                Rocket::new(
                    Genome::random(params.genome_length, params.max_acceleration, rng),
                    spawn,
                )
            })
            .collect();

        Self::from_rockets(rockets, params)
    }

    /// Wraps an existing set of rockets as generation 0.
    ///
    /// The set must hold exactly `params.pool_size` rockets.
    pub fn from_rockets(rockets: Vec<Rocket>, params: &Params) -> Result<Self, EvolutionError> {
        params.validate()?;
        if rockets.len() != params.pool_size {
            return Err(EvolutionError::InvalidParams(format!(
                "a population needs {} rockets, got {}",
                params.pool_size,
                rockets.len()
            )));
        }

        Ok(Self {
            rockets,
            noise: Normal::new(0.0, params.mutation_sigma())?,
            generation: 0,
        })
    }

    /// Rockets of the current generation, in population order.
    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    /// Mutable access to the rockets, for hosts that place them explicitly.
    pub fn rockets_mut(&mut self) -> &mut [Rocket] {
        &mut self.rockets
    }

    /// Number of the generation currently flying.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Advances every rocket by one tick. Rockets do not interact.
    pub fn update(&mut self, environment: &Environment, tick: usize, params: &Params) {
        for rocket in &mut self.rockets {
            rocket.update(environment, tick, params);
        }
    }

    /// Evaluates the current generation and replaces it with its offspring.
    ///
    /// Returns the diagnostics of the generation that was evaluated.
    pub fn advance_generation<R: Rng + ?Sized>(
        &mut self,
        environment: &Environment,
        params: &Params,
        rng: &mut R,
    ) -> Result<GenerationReport, EvolutionError> {
        let (fitness, degenerate) = self.normalize_fitness(environment, params);

        let selections: Vec<Selection> = (0..params.pool_size)
            .map(|slot| self.select(slot, rng))
            .collect();

        let all_crashed = self.rockets.iter().all(Rocket::is_crashed);
        let mutation_rate = if all_crashed {
            params.stagnation_mutation_rate
        } else {
            params.mutation_rate
        };

        let completed = self.rockets.iter().filter(|r| r.is_completed()).count();
        let crashed = self.rockets.iter().filter(|r| r.is_crashed()).count();

        let mother_slot = rng.random_range(0..selections.len());
        let father_slot = rng.random_range(0..selections.len());
        let mother = &self.rockets[selections[mother_slot].index].genome;
        let father = &self.rockets[selections[father_slot].index].genome;

        let spawn = environment.spawn_point();
        let mut offspring = Vec::with_capacity(params.pool_size);
        for _ in 0..params.pool_size {
            let mut genome = Genome::crossover(mother, father, params.genome_length, rng)?;
            genome.mutate(mutation_rate, &self.noise, rng);
            offspring.push(Rocket::new(genome, spawn));
        }
        // the evaluated generation is dropped here
        self.rockets = offspring;

        let summary = FitnessSummary::from_entries(&fitness);
        let report = GenerationReport {
            generation: self.generation,
            fitness,
            selections,
            parents: (mother_slot, father_slot),
            mutation_rate,
            degenerate,
            completed,
            crashed,
            summary,
        };

        info!(
            "generation {}: min {:.4} ({}), avg {:.4}, max {:.4} ({}), completed {}, crashed {}, mutation rate {}",
            report.generation,
            summary.min,
            summary.min_index,
            summary.avg,
            summary.max,
            summary.max_index,
            completed,
            crashed,
            mutation_rate,
        );

        self.generation += 1;
        Ok(report)
    }

    /// Scores every rocket and rescales the scores into a probability distribution.
    ///
    /// When the total is zero (or not finite) every rocket gets the same share.
    /// Returns the per-rocket entries and whether that fallback was used.
    fn normalize_fitness(
        &mut self,
        environment: &Environment,
        params: &Params,
    ) -> (Vec<FitnessEntry>, bool) {
        let raw: Vec<f32> = self
            .rockets
            .iter_mut()
            .map(|rocket| rocket.calculate_fitness(environment, params))
            .collect();
        let total: f32 = raw.iter().sum();

        let degenerate = !(total.is_finite() && total > 0.0);
        if degenerate {
            warn!(
                "generation {}: total fitness is {}, falling back to uniform selection",
                self.generation, total
            );
        }

        let uniform = 1.0 / self.rockets.len() as f32;
        let entries = self
            .rockets
            .iter_mut()
            .zip(raw)
            .enumerate()
            .map(|(index, (rocket, raw))| {
                rocket.fitness = if degenerate { uniform } else { raw / total };
                debug!("{}: {:.6}", index, rocket.fitness);
                FitnessEntry {
                    index,
                    raw,
                    normalized: rocket.fitness,
                }
            })
            .collect();

        (entries, degenerate)
    }

    /// Draws one mating pool member with [`roulette_pick`] over the normalized
    /// fitness and a uniform threshold in `[0, 1)`.
    fn select<R: Rng + ?Sized>(&self, slot: usize, rng: &mut R) -> Selection {
        let threshold = rng.random::<f32>();
        let weights: Vec<f32> = self.rockets.iter().map(|rocket| rocket.fitness).collect();

        let (index, clamped) = roulette_pick(&weights, threshold);
        if clamped {
            warn!(
                "slot {}: selection ran past the last rocket (threshold {}), clamping",
                slot, threshold
            );
        }

        let normalized = self.rockets[index].fitness;
        debug!("Picked {} ({:.6})", index, normalized);

        Selection {
            slot,
            index,
            normalized,
            clamped,
        }
    }
}

/// Roulette wheel walk: subtracts each weight from `threshold` in order and
/// returns the first index where the threshold drops strictly below zero.
///
/// The stop test is `< 0.0`, not `<= 0.0`, so a zero weight is never picked,
/// not even with a zero threshold.
///
/// Floating-point drift can leave the threshold non-negative after the last
/// weight; the pick is then clamped to the last index and the returned flag is
/// `true`.
// TODO: switch to a prefix-sum table with binary search if pool sizes grow
// well beyond a few hundred rockets.
pub fn roulette_pick(weights: &[f32], threshold: f32) -> (usize, bool) {
    let mut remaining = threshold;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining < 0.0 {
            return (index, false);
        }
    }

    (weights.len().saturating_sub(1), true)
}
