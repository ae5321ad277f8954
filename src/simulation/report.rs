use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Fitness of one rocket at the end of a generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessEntry {
    /// Index of the rocket in the population.
    pub index: usize,
    /// Fitness before normalization.
    pub raw: f32,
    /// Share of the population's total fitness.
    pub normalized: f32,
}

/// Outcome of one mating pool draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Mating pool slot.
    pub slot: usize,
    /// Index of the selected rocket.
    pub index: usize,
    /// Normalized fitness of the selected rocket.
    pub normalized: f32,
    /// The selection walk ran past the last rocket and was clamped.
    pub clamped: bool,
}

/// Aggregate normalized fitness of a generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessSummary {
    /// Lowest normalized fitness.
    pub min: f32,
    /// Index of the rocket with the lowest fitness.
    pub min_index: usize,
    /// Mean normalized fitness.
    pub avg: f32,
    /// Highest normalized fitness.
    pub max: f32,
    /// Index of the rocket with the highest fitness.
    pub max_index: usize,
}

impl FitnessSummary {
    /// Summarizes normalized fitness values. Ties resolve to the first index.
    pub fn from_entries(entries: &[FitnessEntry]) -> Self {
        let Some(first) = entries.first() else {
            return Self::default();
        };

        let mut summary = Self {
            min: first.normalized,
            min_index: first.index,
            avg: 0.0,
            max: first.normalized,
            max_index: first.index,
        };
        let mut total = 0.0;

        for entry in entries {
            total += entry.normalized;
            if entry.normalized < summary.min {
                summary.min = entry.normalized;
                summary.min_index = entry.index;
            }
            if entry.normalized > summary.max {
                summary.max = entry.normalized;
                summary.max_index = entry.index;
            }
        }

        summary.avg = total / entries.len() as f32;
        summary
    }
}

/// Diagnostics produced each time a generation advances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Number of the generation that was evaluated (the first is 0).
    pub generation: u32,
    /// Per-rocket fitness, in population order.
    pub fitness: Vec<FitnessEntry>,
    /// Mating pool draws, in slot order.
    pub selections: Vec<Selection>,
    /// Mating pool slots picked as mother and father.
    pub parents: (usize, usize),
    /// Mutation rate applied to the offspring.
    pub mutation_rate: f32,
    /// Total fitness was zero and selection fell back to uniform.
    pub degenerate: bool,
    /// Rockets that reached the target.
    pub completed: usize,
    /// Rockets that crashed.
    pub crashed: usize,
    /// Min/avg/max of the normalized fitness.
    pub summary: FitnessSummary,
}

/// One generation in the fitness history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Generation number.
    pub generation: u32,
    /// Best raw fitness of the generation.
    pub best_raw: f32,
    /// Normalized fitness summary.
    pub summary: FitnessSummary,
    /// Rockets that reached the target.
    pub completed: usize,
    /// Rockets that crashed.
    pub crashed: usize,
}

impl From<&GenerationReport> for HistoryEntry {
    fn from(report: &GenerationReport) -> Self {
        Self {
            generation: report.generation,
            best_raw: report.fitness.iter().map(|e| e.raw).fold(0.0, f32::max),
            summary: report.summary,
            completed: report.completed,
            crashed: report.crashed,
        }
    }
}

/// Bounded record of recent generations, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessHistory {
    entries: VecDeque<HistoryEntry>,
    max_history: usize,
}

impl Default for FitnessHistory {
    fn default() -> Self {
        Self::new(100)
    }
}

impl FitnessHistory {
    /// Creates an empty history keeping at most `max_history` generations.
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Records a finished generation, evicting the oldest one when full.
    pub fn record(&mut self, report: &GenerationReport) {
        self.entries.push_back(HistoryEntry::from(report));
        while self.entries.len() > self.max_history {
            self.entries.pop_front();
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Number of generations tracked.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no generation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best raw fitness over the tracked generations.
    pub fn best_raw(&self) -> Option<f32> {
        self.entries.iter().map(|e| e.best_raw).reduce(f32::max)
    }

    /// Average number of rockets reaching the target per tracked generation.
    pub fn average_completed(&self) -> f64 {
        if self.entries.is_empty() {
            0.0
        } else {
            self.entries.iter().map(|e| e.completed as f64).sum::<f64>() / self.entries.len() as f64
        }
    }

    /// Forgets all recorded generations.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
