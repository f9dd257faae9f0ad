//! # Coefficient Table
//!
//! The read-only description of the candidate items: for every item position a
//! calorie coefficient and a set of nutrient amounts, plus one weight per
//! nutrient used by the value functions in [`crate::fitness`].
//!
//! The table is fixed for a run and shared by reference; its length must match
//! the length of every gene evaluated against it.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::coefficients::{CoefficientTable, Item};
//!
//! // Two nutrients: protein and fibre, protein weighted twice as much.
//! let table = CoefficientTable::new(
//!     vec![
//!         Item::new("oats", 150.0, vec![5.0, 4.0]),
//!         Item::new("eggs", 140.0, vec![12.0, 0.0]),
//!     ],
//!     vec![2.0, 1.0],
//! )
//! .unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.calories(1), 140.0);
//! ```

use crate::error::{GeneticError, Result};
use crate::gene::Gene;

/// One candidate item of a meal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub calories: f64,
    /// Amount of each nutrient, in the same order as the table's weights.
    pub nutrients: Vec<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, calories: f64, nutrients: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            calories,
            nutrients,
        }
    }
}

/// Per-item calorie and nutrient coefficients.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoefficientTable"))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    items: Vec<Item>,
    nutrient_weights: Vec<f64>,
}

/// Unchecked wire form of a [`CoefficientTable`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCoefficientTable {
    items: Vec<Item>,
    nutrient_weights: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoefficientTable> for CoefficientTable {
    type Error = GeneticError;

    fn try_from(raw: RawCoefficientTable) -> Result<Self> {
        Self::new(raw.items, raw.nutrient_weights)
    }
}

impl CoefficientTable {
    /// Creates a table from its items and nutrient weights.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if an item does not carry exactly
    /// one amount per nutrient weight, or if any coefficient is not finite.
    pub fn new(items: Vec<Item>, nutrient_weights: Vec<f64>) -> Result<Self> {
        let table = Self {
            items,
            nutrient_weights,
        };
        table.validate()?;
        Ok(table)
    }

    /// Reads a table from JSON of the form
    /// `{"items": [{"name": ..., "calories": ..., "nutrients": [...]}], "nutrient_weights": [...]}`.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        use crate::error::ResultExt;

        let raw: RawCoefficientTable =
            serde_json::from_reader(reader).context("Failed to parse coefficient table")?;
        Self::try_from(raw)
    }

    fn validate(&self) -> Result<()> {
        if let Some(weight) = self.nutrient_weights.iter().find(|w| !w.is_finite()) {
            return Err(GeneticError::Configuration(format!(
                "Nutrient weight {} is not finite",
                weight
            )));
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.nutrients.len() != self.nutrient_weights.len() {
                return Err(GeneticError::Configuration(format!(
                    "Item {} ({}) has {} nutrients but the table weighs {}",
                    index,
                    item.name,
                    item.nutrients.len(),
                    self.nutrient_weights.len()
                )));
            }
            if !item.calories.is_finite() || item.nutrients.iter().any(|n| !n.is_finite()) {
                return Err(GeneticError::Configuration(format!(
                    "Item {} ({}) has a non-finite coefficient",
                    index, item.name
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Calorie coefficient of the item at `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn calories(&self, index: usize) -> f64 {
        self.items[index].calories
    }

    pub fn nutrient_weights(&self) -> &[f64] {
        &self.nutrient_weights
    }

    pub fn num_nutrients(&self) -> usize {
        self.nutrient_weights.len()
    }

    /// Checks that `gene` has one bit per item.
    pub fn check_gene(&self, gene: &Gene) -> Result<()> {
        if gene.len() != self.len() {
            return Err(GeneticError::LengthMismatch {
                expected: self.len(),
                found: gene.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("rice", 200.0, vec![4.0, 1.0]),
            Item::new("beans", 120.0, vec![8.0, 6.0]),
            Item::new("apple", 95.0, vec![0.5, 4.0]),
        ]
    }

    #[test]
    fn test_new_accepts_consistent_table() {
        let table = CoefficientTable::new(sample_items(), vec![1.0, 0.5]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.num_nutrients(), 2);
        assert_eq!(table.item(2).map(|i| i.name.as_str()), Some("apple"));
    }

    #[test]
    fn test_new_rejects_nutrient_count_mismatch() {
        let result = CoefficientTable::new(sample_items(), vec![1.0]);
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("rice"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_new_rejects_non_finite_calories() {
        let items = vec![Item::new("void", f64::NAN, vec![1.0])];
        assert!(matches!(
            CoefficientTable::new(items, vec![1.0]),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_weight() {
        assert!(matches!(
            CoefficientTable::new(sample_items(), vec![1.0, f64::INFINITY]),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_check_gene() {
        let table = CoefficientTable::new(sample_items(), vec![1.0, 0.5]).unwrap();
        assert!(table.check_gene(&Gene::zeros(3)).is_ok());
        match table.check_gene(&Gene::zeros(2)) {
            Err(GeneticError::LengthMismatch { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("Expected LengthMismatch error"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_reader() {
        let json = r#"{
            "items": [
                {"name": "toast", "calories": 80.0, "nutrients": [3.0]},
                {"name": "jam", "calories": 50.0, "nutrients": [0.0]}
            ],
            "nutrient_weights": [1.0]
        }"#;
        let table = CoefficientTable::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.calories(0), 80.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_reader_validates() {
        let json = r#"{
            "items": [{"name": "toast", "calories": 80.0, "nutrients": [3.0, 1.0]}],
            "nutrient_weights": [1.0]
        }"#;
        assert!(matches!(
            CoefficientTable::from_json_reader(json.as_bytes()),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            CoefficientTable::from_json_reader("not json".as_bytes()),
            Err(GeneticError::Other(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_table() {
        let mismatched = r#"{
            "items": [{"name": "toast", "calories": 80.0, "nutrients": [3.0, 1.0]}],
            "nutrient_weights": [1.0]
        }"#;
        let err = serde_json::from_str::<CoefficientTable>(mismatched).unwrap_err();
        assert!(err.to_string().contains("toast"));

        let table = CoefficientTable::new(sample_items(), vec![1.0, 0.5]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: CoefficientTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
