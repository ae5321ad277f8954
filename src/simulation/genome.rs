//! Genomes: the per-tick force sequence that drives a rocket.
//!
//! Genes are stored row-wise in an `(n, 2)` array, so gene `i` is the force
//! `(genes[[i, 0]], genes[[i, 1]])` applied on tick `i`.

use ndarray::{Array2, s};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use super::error::EvolutionError;
use super::vector::Vector2;

/// Fixed-length sequence of force vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    genes: Array2<f32>,
}

impl Genome {
    /// Creates a genome whose gene components are uniform in
    /// `[-max_acceleration, max_acceleration]`.
    pub fn random<R: Rng + ?Sized>(length: usize, max_acceleration: f32, rng: &mut R) -> Self {
        let genes = Array2::from_shape_fn((length, 2), |_| {
            rng.random_range(-max_acceleration..=max_acceleration)
        });
        Self { genes }
    }

    /// Creates a genome from an explicit gene list.
    pub fn from_genes(genes: &[Vector2]) -> Self {
        let genes = Array2::from_shape_fn((genes.len(), 2), |(i, axis)| {
            if axis == 0 { genes[i].x } else { genes[i].y }
        });
        Self { genes }
    }

    /// Genome of `length` zero forces.
    pub fn zeros(length: usize) -> Self {
        Self {
            genes: Array2::zeros((length, 2)),
        }
    }

    /// Genome repeating the same force `length` times.
    pub fn constant(length: usize, gene: Vector2) -> Self {
        Self::from_genes(&vec![gene; length])
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.nrows()
    }

    /// Returns `true` if the genome holds no genes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Force applied on tick `index`, if the genome is that long.
    pub fn gene(&self, index: usize) -> Option<Vector2> {
        (index < self.len()).then(|| Vector2::new(self.genes[[index, 0]], self.genes[[index, 1]]))
    }

    /// Iterates over the genes in tick order.
    pub fn genes(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.genes.rows().into_iter().map(|row| Vector2::new(row[0], row[1]))
    }

    /// Single-point crossover at a uniformly random midpoint in `[0, expected_len)`.
    ///
    /// Both parents must have exactly `expected_len` genes.
    pub fn crossover<R: Rng + ?Sized>(
        mother: &Genome,
        father: &Genome,
        expected_len: usize,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        for parent in [mother, father] {
            if parent.len() != expected_len {
                return Err(EvolutionError::InvalidGenomeLength {
                    expected: expected_len,
                    actual: parent.len(),
                });
            }
        }

        let midpoint = rng.random_range(0..=expected_len.saturating_sub(1));
        Ok(Self::crossover_at(mother, father, midpoint))
    }

    /// Child taking the mother's genes before `midpoint` and the father's from
    /// `midpoint` on. The parents are left untouched.
    ///
    /// Both parents must have the same length; use [`Genome::crossover`] when
    /// that is not already known.
    pub fn crossover_at(mother: &Genome, father: &Genome, midpoint: usize) -> Self {
        debug_assert_eq!(mother.len(), father.len(), "parents differ in length");
        let midpoint = midpoint.min(mother.len()).min(father.len());
        let mut genes = father.genes.clone();
        genes
            .slice_mut(s![..midpoint, ..])
            .assign(&mother.genes.slice(s![..midpoint, ..]));
        Self { genes }
    }

    /// Perturbs each gene with probability `rate` by adding `noise` to both
    /// components.
    ///
    /// Returns the number of genes that were mutated.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rate: f32, noise: &Normal<f32>, rng: &mut R) -> usize {
        let mut mutated = 0;
        for mut gene in self.genes.rows_mut() {
            if rng.random::<f32>() < rate {
                gene[0] += noise.sample(rng);
                gene[1] += noise.sample(rng);
                mutated += 1;
            }
        }
        mutated
    }
}
