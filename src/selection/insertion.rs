use tracing::trace;

use crate::coefficients::CoefficientTable;
use crate::error::Result;
use crate::fitness::{meal_calories, meal_value, ValueFunction};
use crate::pool::GenePool;

/// Survivor selection by insertion sort under a calorie limit.
///
/// Genes over the calorie limit are dropped. The rest are inserted, in their
/// original order, into a fresh pool kept sorted by descending value; a gene
/// is placed before the first occupant with a strictly lower value, so equal
/// values keep their insertion order. Finally every slot from
/// `max_survivors` onward is emptied.
///
/// # Examples
///
/// ```
/// use genmeal::coefficients::{CoefficientTable, Item};
/// use genmeal::fitness::WeightedNutrition;
/// use genmeal::gene::Gene;
/// use genmeal::pool::GenePool;
/// use genmeal::selection::InsertionSelection;
///
/// let table = CoefficientTable::new(
///     vec![
///         Item::new("a", 2.0, vec![1.0]),
///         Item::new("b", 3.0, vec![4.0]),
///     ],
///     vec![1.0],
/// )
/// .unwrap();
/// let pool = GenePool::from_genes(vec![
///     Gene::from_bits(vec![1, 0]).unwrap(),
///     Gene::from_bits(vec![1, 1]).unwrap(),
///     Gene::from_bits(vec![0, 1]).unwrap(),
/// ])
/// .unwrap();
///
/// // [1, 1] costs 5 calories and does not fit under 4.
/// let selection = InsertionSelection::new(4.0, 2);
/// let survivors = selection.select(&pool, &table, &WeightedNutrition).unwrap();
///
/// assert_eq!(survivors.get(0).unwrap().bits(), &[0, 1]);
/// assert_eq!(survivors.get(1).unwrap().bits(), &[1, 0]);
/// assert!(survivors.get(2).is_none());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct InsertionSelection {
    max_calories: f64,
    max_survivors: usize,
}

impl InsertionSelection {
    pub fn new(max_calories: f64, max_survivors: usize) -> Self {
        Self {
            max_calories,
            max_survivors,
        }
    }

    pub fn max_calories(&self) -> f64 {
        self.max_calories
    }

    pub fn max_survivors(&self) -> usize {
        self.max_survivors
    }

    /// Builds the next generation's survivors from `population`.
    ///
    /// The returned pool has the same capacity and gene length as
    /// `population`, which is left untouched. Survivors are clones.
    ///
    /// # Errors
    ///
    /// Propagates length mismatches between genes and `table`, and any error
    /// raised by `value_fn`. A NaN value is `GeneticError::NanValue`.
    pub fn select<V>(
        &self,
        population: &GenePool,
        table: &CoefficientTable,
        value_fn: &V,
    ) -> Result<GenePool>
    where
        V: ValueFunction + ?Sized,
    {
        let capacity = population.capacity();
        let mut survivors = GenePool::empty(capacity, population.gene_len());
        // Values of the occupied prefix of `survivors`, slot for slot.
        let mut ranked: Vec<f64> = Vec::with_capacity(capacity);

        for (index, gene) in population.genes() {
            let calories = meal_calories(gene, table)?;
            if calories > self.max_calories {
                trace!(slot = index, calories, "discarding infeasible gene");
                continue;
            }

            let value = meal_value(value_fn, gene, table)?;
            let position = ranked
                .iter()
                .position(|&occupant| value > occupant)
                .unwrap_or(ranked.len());

            if position >= capacity {
                trace!(slot = index, value, "pool full, gene ranks last");
                continue;
            }

            survivors.insert_at(position, gene.clone())?;
            ranked.insert(position, value);
            ranked.truncate(capacity);
        }

        survivors.clear_from(self.max_survivors);
        Ok(survivors)
    }
}
