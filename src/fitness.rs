//! # Fitness Evaluation
//!
//! Two pure measurements drive the evolution: the calories of a meal, which
//! decide feasibility, and its value, which decides rank among feasible meals.
//!
//! Calories are always the linear sum of the selected items' calorie
//! coefficients. The value is pluggable through the [`ValueFunction`] trait;
//! [`WeightedNutrition`] and [`BalancedNutrition`] are provided, and any
//! `Fn(&Gene, &CoefficientTable) -> Result<f64>` closure works as well.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::coefficients::{CoefficientTable, Item};
//! use genmeal::fitness::{meal_calories, ValueFunction, WeightedNutrition};
//! use genmeal::gene::Gene;
//!
//! let table = CoefficientTable::new(
//!     vec![
//!         Item::new("soup", 120.0, vec![6.0]),
//!         Item::new("bread", 200.0, vec![7.0]),
//!     ],
//!     vec![1.0],
//! )
//! .unwrap();
//! let meal = Gene::from_bits(vec![1, 1]).unwrap();
//!
//! assert_eq!(meal_calories(&meal, &table).unwrap(), 320.0);
//! assert_eq!(WeightedNutrition.value(&meal, &table).unwrap(), 13.0);
//! ```

use crate::coefficients::CoefficientTable;
use crate::error::{GeneticError, Result};
use crate::gene::Gene;

/// Total calories of the meal described by `gene`.
///
/// # Errors
///
/// Returns `GeneticError::LengthMismatch` if the gene and table lengths differ.
pub fn meal_calories(gene: &Gene, table: &CoefficientTable) -> Result<f64> {
    table.check_gene(gene)?;
    Ok(gene
        .bits()
        .iter()
        .enumerate()
        .map(|(index, &bit)| table.calories(index) * f64::from(bit))
        .sum())
}

/// Per-nutrient totals of the meal described by `gene`.
pub fn nutrient_totals(gene: &Gene, table: &CoefficientTable) -> Result<Vec<f64>> {
    table.check_gene(gene)?;
    let mut totals = vec![0.0; table.num_nutrients()];
    for index in gene.selected_items() {
        for (total, amount) in totals.iter_mut().zip(&table.items()[index].nutrients) {
            *total += amount;
        }
    }
    Ok(totals)
}

/// The objective the evolution maximizes.
pub trait ValueFunction {
    /// Scores the meal described by `gene`. Higher is better.
    fn value(&self, gene: &Gene, table: &CoefficientTable) -> Result<f64>;
}

impl<F> ValueFunction for F
where
    F: Fn(&Gene, &CoefficientTable) -> Result<f64>,
{
    fn value(&self, gene: &Gene, table: &CoefficientTable) -> Result<f64> {
        self(gene, table)
    }
}

/// Scores `gene` with `value_fn`, rejecting NaN so that every value can be
/// ranked against every other.
///
/// # Errors
///
/// Returns `GeneticError::NanValue` if the score is NaN, and propagates any
/// error raised by `value_fn`.
pub fn meal_value<V>(value_fn: &V, gene: &Gene, table: &CoefficientTable) -> Result<f64>
where
    V: ValueFunction + ?Sized,
{
    let value = value_fn.value(gene, table)?;
    if value.is_nan() {
        return Err(GeneticError::NanValue {
            gene: gene.to_string(),
        });
    }
    Ok(value)
}

/// Linear nutrition score: every selected item contributes the weighted sum of
/// its nutrients.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedNutrition;

impl ValueFunction for WeightedNutrition {
    fn value(&self, gene: &Gene, table: &CoefficientTable) -> Result<f64> {
        let totals = nutrient_totals(gene, table)?;
        Ok(totals
            .iter()
            .zip(table.nutrient_weights())
            .map(|(total, weight)| total * weight)
            .sum())
    }
}

/// Nutrition score that stops rewarding a nutrient once its target is met.
///
/// Each nutrient total is capped at its target before weighting, so a meal
/// covering every nutrient beats one that overshoots a single nutrient.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BalancedNutrition {
    targets: Vec<f64>,
}

impl BalancedNutrition {
    pub fn new(targets: Vec<f64>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }
}

impl ValueFunction for BalancedNutrition {
    fn value(&self, gene: &Gene, table: &CoefficientTable) -> Result<f64> {
        if self.targets.len() != table.num_nutrients() {
            return Err(GeneticError::Configuration(format!(
                "{} nutrient targets given for a table with {} nutrients",
                self.targets.len(),
                table.num_nutrients()
            )));
        }

        let totals = nutrient_totals(gene, table)?;
        Ok(totals
            .iter()
            .zip(&self.targets)
            .zip(table.nutrient_weights())
            .map(|((total, target), weight)| total.min(*target) * weight)
            .sum())
    }
}
