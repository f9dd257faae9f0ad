use tracing::{trace, warn};

use super::crossover::crossover;
use super::mutation::{mutate, MutationRate};
use crate::error::{GeneticError, OptionExt, Result};
use crate::pool::GenePool;
use crate::rng::RandomSource;

/// Refills the empty tail of a pool with mutated crossover children of its
/// survivors.
///
/// # Examples
///
/// ```
/// use genmeal::breeding::Reproduction;
/// use genmeal::gene::Gene;
/// use genmeal::pool::GenePool;
/// use genmeal::rng::RandomNumberGenerator;
///
/// let mut pool = GenePool::empty(6, 4);
/// pool.set(0, Gene::from_bits(vec![1, 1, 0, 0]).unwrap()).unwrap();
/// pool.set(1, Gene::from_bits(vec![0, 0, 1, 1]).unwrap()).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let full = Reproduction::default().reproduce(pool, &mut rng).unwrap();
/// assert!(full.is_full());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Reproduction {
    mutation_rate: MutationRate,
}

impl Reproduction {
    pub fn new(mutation_rate: MutationRate) -> Self {
        Self { mutation_rate }
    }

    pub fn mutation_rate(&self) -> MutationRate {
        self.mutation_rate
    }

    /// Fills every slot after the leading run of survivors.
    ///
    /// For each empty slot two distinct survivors are drawn uniformly (both
    /// indices are redrawn until they differ), crossed over, and the child is
    /// mutated before being placed.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InsufficientSurvivors` if fewer than two slots
    /// at the front of the pool are occupied, and `GeneticError::Configuration`
    /// if the mutation rate is `OneIn(0)` for non-empty genes.
    pub fn reproduce<R>(&self, mut population: GenePool, rng: &mut R) -> Result<GenePool>
    where
        R: RandomSource + ?Sized,
    {
        let num_survivors = population.leading_survivors();
        if num_survivors < 2 {
            warn!(survivors = num_survivors, "cannot reproduce without two parents");
            return Err(GeneticError::InsufficientSurvivors {
                found: num_survivors,
            });
        }

        let denominator = self.mutation_rate.denominator(population.gene_len());
        if denominator == 0 && population.gene_len() > 0 {
            return Err(GeneticError::Configuration(
                "Mutation rate denominator must be at least 1".to_string(),
            ));
        }

        for slot in num_survivors..population.capacity() {
            let (first, second) = pick_parents(rng, num_survivors);
            let mut child = {
                let first_parent = population.get(first).ok_or_else_genetic(|| {
                    GeneticError::Other(format!("Survivor slot {} is empty", first))
                })?;
                let second_parent = population.get(second).ok_or_else_genetic(|| {
                    GeneticError::Other(format!("Survivor slot {} is empty", second))
                })?;
                crossover(rng, first_parent, second_parent)?
            };
            let flipped = mutate(rng, &mut child, denominator);
            trace!(slot, first, second, flipped, "bred child");
            population.set(slot, child)?;
        }

        Ok(population)
    }
}

/// Draws two distinct indices below `num_survivors`, redrawing the pair until
/// they differ. `num_survivors` must be at least 2.
pub fn pick_parents<R>(rng: &mut R, num_survivors: usize) -> (usize, usize)
where
    R: RandomSource + ?Sized,
{
    let mut first = 0;
    let mut second = 0;
    while first == second {
        first = rng.next_int_in_range(num_survivors);
        second = rng.next_int_in_range(num_survivors);
    }
    (first, second)
}
