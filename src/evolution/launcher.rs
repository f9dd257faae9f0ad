use tracing::{debug, info};

use super::options::{LogLevel, SolverOptions};
use crate::{
    breeding::Reproduction,
    coefficients::{CoefficientTable, Item},
    error::{GeneticError, OptionExt, Result},
    fitness::{meal_calories, meal_value, ValueFunction, WeightedNutrition},
    gene::Gene,
    pool::GenePool,
    rng::RandomSource,
    selection::InsertionSelection,
};

/// The best feasible meal of a run, with its value and calories.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// A copy of the winning gene, independent of the final population.
    pub gene: Gene,
    pub value: f64,
    pub calories: f64,
}

impl Solution {
    /// The items of `table` included in this meal.
    pub fn selected_items<'a>(
        &'a self,
        table: &'a CoefficientTable,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.gene
            .selected_items()
            .filter_map(move |index| table.item(index))
    }
}

/// Evolves `initial` for `options.get_num_generations()` generations and
/// returns the best feasible gene of the final population.
///
/// Each generation runs [`InsertionSelection`] and then [`Reproduction`].
/// The final scan keeps the first gene with the strictly greatest value
/// among those within the calorie limit.
///
/// # Errors
///
/// - `Configuration` if the options are invalid or the pool has no slots
/// - `LengthMismatch` if the pool's gene length differs from the table length
/// - `InsufficientSurvivors` if a selection leaves fewer than two genes
/// - `NanValue` if `value_fn` scores a feasible gene as NaN
/// - `NoFeasibleSolution` if no final gene is within the calorie limit
pub fn solve<R, V>(
    rng: &mut R,
    initial: GenePool,
    table: &CoefficientTable,
    value_fn: &V,
    options: &SolverOptions,
) -> Result<Solution>
where
    R: RandomSource + ?Sized,
    V: ValueFunction + ?Sized,
{
    options.validate()?;

    if initial.capacity() == 0 {
        return Err(GeneticError::Configuration(
            "Population size cannot be zero".to_string(),
        ));
    }

    if initial.gene_len() != table.len() {
        return Err(GeneticError::LengthMismatch {
            expected: table.len(),
            found: initial.gene_len(),
        });
    }

    let selection =
        InsertionSelection::new(options.get_max_calories(), options.get_max_survivors());
    let reproduction = Reproduction::new(options.get_mutation_rate());
    let log_level = options.get_log_level();

    let mut population = initial;
    for generation in 0..options.get_num_generations() {
        let survivors = selection.select(&population, table, value_fn)?;
        log_generation(log_level, generation, &survivors, table, value_fn)?;
        population = reproduction.reproduce(survivors, rng)?;
    }

    let best = best_feasible(&population, table, value_fn, options.get_max_calories())?
        .ok_or_else_genetic(|| GeneticError::NoFeasibleSolution)?;

    if log_level != LogLevel::None {
        info!(
            gene = %best.gene,
            value = best.value,
            calories = best.calories,
            "evolution finished"
        );
    }

    Ok(best)
}

/// Scans every occupied slot for the feasible gene with the strictly
/// greatest value; ties keep the lowest slot. A NaN value is an error.
pub fn best_feasible<V>(
    population: &GenePool,
    table: &CoefficientTable,
    value_fn: &V,
    max_calories: f64,
) -> Result<Option<Solution>>
where
    V: ValueFunction + ?Sized,
{
    let mut best: Option<(&Gene, f64, f64)> = None;

    for (_, gene) in population.genes() {
        let calories = meal_calories(gene, table)?;
        if calories > max_calories {
            continue;
        }
        let value = meal_value(value_fn, gene, table)?;
        if best.map_or(true, |(_, best_value, _)| value > best_value) {
            best = Some((gene, value, calories));
        }
    }

    Ok(best.map(|(gene, value, calories)| Solution {
        gene: gene.clone(),
        value,
        calories,
    }))
}

fn log_generation<V>(
    log_level: LogLevel,
    generation: usize,
    survivors: &GenePool,
    table: &CoefficientTable,
    value_fn: &V,
) -> Result<()>
where
    V: ValueFunction + ?Sized,
{
    if log_level == LogLevel::None {
        return Ok(());
    }

    let best_value = survivors
        .get(0)
        .map(|gene| meal_value(value_fn, gene, table))
        .transpose()?;
    info!(
        generation,
        survivors = survivors.leading_survivors(),
        best_value,
        "selected survivors"
    );

    if log_level == LogLevel::Verbose {
        for (slot, gene) in survivors.genes() {
            let value = meal_value(value_fn, gene, table)?;
            debug!(generation, slot, gene = %gene, value, "survivor");
        }
    }

    Ok(())
}

/// Owns a coefficient table and a value function and runs the evolution
/// against them.
///
/// # Examples
///
/// ```
/// use genmeal::coefficients::{CoefficientTable, Item};
/// use genmeal::evolution::{Solver, SolverOptions};
/// use genmeal::rng::RandomNumberGenerator;
///
/// let table = CoefficientTable::new(
///     vec![
///         Item::new("porridge", 300.0, vec![10.0]),
///         Item::new("banana", 100.0, vec![3.0]),
///         Item::new("cake", 450.0, vec![4.0]),
///         Item::new("yoghurt", 150.0, vec![8.0]),
///     ],
///     vec![1.0],
/// )
/// .unwrap();
/// let options = SolverOptions::builder()
///     .num_generations(30)
///     .max_calories(600.0)
///     .max_survivors(4)
///     .build();
///
/// let solver = Solver::weighted(table);
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let best = solver.solve_random(&options, 12, &mut rng).unwrap();
/// assert!(best.calories <= 600.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<V>
where
    V: ValueFunction,
{
    table: CoefficientTable,
    value_fn: V,
}

impl Solver<WeightedNutrition> {
    /// A solver scoring meals with [`WeightedNutrition`].
    pub fn weighted(table: CoefficientTable) -> Self {
        Self::new(table, WeightedNutrition)
    }
}

impl<V> Solver<V>
where
    V: ValueFunction,
{
    pub fn new(table: CoefficientTable, value_fn: V) -> Self {
        Self { table, value_fn }
    }

    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    pub fn value_function(&self) -> &V {
        &self.value_fn
    }

    /// Evolves `initial`; see [`solve`](fn@solve).
    pub fn solve<R>(
        &self,
        options: &SolverOptions,
        initial: GenePool,
        rng: &mut R,
    ) -> Result<Solution>
    where
        R: RandomSource + ?Sized,
    {
        solve(rng, initial, &self.table, &self.value_fn, options)
    }

    /// Evolves a random initial pool of `population_size` genes.
    pub fn solve_random<R>(
        &self,
        options: &SolverOptions,
        population_size: usize,
        rng: &mut R,
    ) -> Result<Solution>
    where
        R: RandomSource,
    {
        let initial = GenePool::random(rng, population_size, self.table.len());
        self.solve(options, initial, rng)
    }
}
