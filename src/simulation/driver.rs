//! Tick-driven entry point called by the host once per frame.
//!
//! The driver counts ticks, creates the population on the first tick and
//! advances a generation once the tick counter runs past the genome length,
//! so every gene is replayed exactly once per generation.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::environment::Environment;
use super::error::EvolutionError;
use super::params::Params;
use super::population::Population;
use super::report::{FitnessHistory, GenerationReport};
use super::rocket::Rocket;

/// Owns the population and the random number generator of one run.
#[derive(Debug)]
pub struct Driver {
    params: Params,
    rng: StdRng,
    population: Option<Population>,
    tick: usize,
    last_report: Option<GenerationReport>,
    history: FitnessHistory,
}

impl Driver {
    /// Creates a driver. The population is created lazily on the first tick.
    ///
    /// The RNG is seeded from `params.seed`, or from the operating system if unset.
    pub fn new(params: Params) -> Result<Self, EvolutionError> {
        params.validate()?;

        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let history = FitnessHistory::new(params.history_size);

        Ok(Self {
            params,
            rng,
            population: None,
            tick: 0,
            last_report: None,
            history,
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// Returns the report of the evaluated generation on the tick that advanced it.
    pub fn tick(
        &mut self,
        environment: &Environment,
    ) -> Result<Option<&GenerationReport>, EvolutionError> {
        let population = match self.population.take() {
            Some(population) => population,
            None => Population::new(&self.params, environment, &mut self.rng)?,
        };
        let population = self.population.insert(population);

        population.update(environment, self.tick, &self.params);
        self.tick += 1;

        if self.tick <= self.params.genome_length {
            return Ok(None);
        }

        let report = population.advance_generation(environment, &self.params, &mut self.rng)?;
        self.tick = 0;
        self.history.record(&report);

        Ok(Some(&*self.last_report.insert(report)))
    }

    /// Drops the population and restarts from generation 0 on the next tick.
    ///
    /// The RNG keeps its state, so a reset run does not repeat the previous one.
    pub fn reset(&mut self) {
        self.population = None;
        self.tick = 0;
        self.last_report = None;
        self.history.clear();
    }

    /// Index of the gene the next tick applies.
    pub fn tick_index(&self) -> usize {
        self.tick
    }

    /// Number of the generation currently flying.
    pub fn generation(&self) -> u32 {
        self.population.as_ref().map_or(0, Population::generation)
    }

    /// Rockets of the current generation. Empty before the first tick.
    pub fn rockets(&self) -> &[Rocket] {
        self.population
            .as_ref()
            .map(Population::rockets)
            .unwrap_or_default()
    }

    /// Current population, if one exists yet.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Report of the most recently evaluated generation.
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.last_report.as_ref()
    }

    /// Summaries of recent generations.
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Parameters of this run.
    pub fn params(&self) -> &Params {
        &self.params
    }
}
