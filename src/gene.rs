//! # Gene
//!
//! A `Gene` is a fixed-length sequence of binary choices, one per candidate
//! item: `1` includes the item in the meal, `0` leaves it out.
//!
//! Genes are plain owned values. Whenever one has to outlive the population
//! slot that holds it, it is cloned; two live slots never share storage.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::gene::Gene;
//!
//! let mut gene = Gene::from_bits(vec![1, 0, 1]).unwrap();
//! assert_eq!(gene.len(), 3);
//! assert_eq!(gene.selected_items().collect::<Vec<_>>(), vec![0, 2]);
//!
//! gene.flip(1);
//! assert_eq!(gene.bits(), &[1, 1, 1]);
//! assert_eq!(gene.to_string(), "111");
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};

/// A binary inclusion vector over the candidate items.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGene"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gene {
    bits: Vec<u8>,
}

/// Unchecked wire form of a [`Gene`]; deserialization goes through
/// [`Gene::from_bits`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGene {
    bits: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGene> for Gene {
    type Error = GeneticError;

    fn try_from(raw: RawGene) -> Result<Self> {
        Self::from_bits(raw.bits)
    }
}

impl Gene {
    /// Builds a gene from raw 0/1 values.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGene` if any value is neither 0 nor 1.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some((position, value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(GeneticError::InvalidGene(format!(
                "value {} at position {} is not 0 or 1",
                value, position
            )));
        }
        Ok(Self { bits })
    }

    /// A gene of length `len` that selects nothing.
    pub fn zeros(len: usize) -> Self {
        Self { bits: vec![0; len] }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Replaces the bit at `index` with `bit & 1`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, bit: u8) {
        self.bits[index] = bit & 1;
    }

    /// Flips the bit at `index` (0 becomes 1, 1 becomes 0).
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] ^= 1;
    }

    /// Positions of the items included in the meal.
    pub fn selected_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit == 1)
            .map(|(index, _)| index)
    }

    /// Number of items included in the meal.
    pub fn count_selected(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit == 1).count()
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_rejects_non_binary() {
        let result = Gene::from_bits(vec![0, 1, 2]);
        match result {
            Err(GeneticError::InvalidGene(msg)) => {
                assert!(msg.contains("position 2"));
            }
            _ => panic!("Expected InvalidGene error"),
        }
    }

    #[test]
    fn test_zeros() {
        let gene = Gene::zeros(4);
        assert_eq!(gene.bits(), &[0, 0, 0, 0]);
        assert_eq!(gene.count_selected(), 0);
    }

    #[test]
    fn test_flip_twice_restores() {
        let mut gene = Gene::from_bits(vec![1, 0, 0, 1]).unwrap();
        gene.flip(2);
        assert_eq!(gene.get(2), Some(1));
        gene.flip(2);
        assert_eq!(gene.bits(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_set_masks_to_one_bit() {
        let mut gene = Gene::zeros(2);
        gene.set(0, 1);
        gene.set(1, 3);
        assert_eq!(gene.bits(), &[1, 1]);
    }

    #[test]
    fn test_get_out_of_range() {
        let gene = Gene::zeros(2);
        assert_eq!(gene.get(2), None);
    }

    #[test]
    #[should_panic]
    fn test_flip_out_of_range_panics() {
        let mut gene = Gene::zeros(2);
        gene.flip(5);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = Gene::from_bits(vec![0, 0, 0]).unwrap();
        let mut copy = original.clone();
        copy.flip(0);
        assert_eq!(original.bits(), &[0, 0, 0]);
        assert_eq!(copy.bits(), &[1, 0, 0]);
    }

    #[test]
    fn test_display() {
        let gene = Gene::from_bits(vec![0, 1, 1, 0]).unwrap();
        assert_eq!(format!("{}", gene), "0110");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_bits() {
        let gene: Gene = serde_json::from_str(r#"{"bits":[1,0,1]}"#).unwrap();
        assert_eq!(gene.bits(), &[1, 0, 1]);
        assert_eq!(serde_json::to_string(&gene).unwrap(), r#"{"bits":[1,0,1]}"#);

        let err = serde_json::from_str::<Gene>(r#"{"bits":[2,0]}"#).unwrap_err();
        assert!(err.to_string().contains("not 0 or 1"));
    }
}
