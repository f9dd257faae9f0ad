//! # Gene Pool
//!
//! A `GenePool` is one generation's population: a fixed number of slots, each
//! either holding a [`Gene`] or empty. Every gene in a pool has the same
//! length, and capacity and gene length stay constant for a whole run.
//!
//! Slots are owned `Option<Gene>` values, so moving, shifting and dropping
//! genes is plain slot reassignment.
//!
//! ## Example
//!
//! ```rust
//! use genmeal::gene::Gene;
//! use genmeal::pool::GenePool;
//!
//! let mut pool = GenePool::empty(3, 2);
//! pool.insert_at(0, Gene::from_bits(vec![1, 0]).unwrap()).unwrap();
//! pool.insert_at(0, Gene::from_bits(vec![0, 1]).unwrap()).unwrap();
//!
//! assert_eq!(pool.leading_survivors(), 2);
//! assert_eq!(pool.get(1).map(|g| g.bits()), Some(&[1, 0][..]));
//! ```

use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomSource;

/// Fixed-capacity population of equal-length genes.
#[derive(Debug, Clone, PartialEq)]
pub struct GenePool {
    slots: Vec<Option<Gene>>,
    gene_len: usize,
}

impl GenePool {
    /// A pool of `capacity` empty slots for genes of length `gene_len`.
    pub fn empty(capacity: usize, gene_len: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            gene_len,
        }
    }

    /// A full pool holding `genes` in order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `genes` is empty and
    /// `GeneticError::LengthMismatch` if the genes differ in length.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self> {
        let gene_len = genes
            .first()
            .map(Gene::len)
            .ok_or_else(|| GeneticError::Configuration("Gene pool cannot be empty".to_string()))?;

        if let Some(odd) = genes.iter().find(|gene| gene.len() != gene_len) {
            return Err(GeneticError::LengthMismatch {
                expected: gene_len,
                found: odd.len(),
            });
        }

        Ok(Self {
            slots: genes.into_iter().map(Some).collect(),
            gene_len,
        })
    }

    /// A full pool of `capacity` genes whose bits are each drawn with
    /// `next_bool(2)`.
    pub fn random<R: RandomSource>(rng: &mut R, capacity: usize, gene_len: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| {
                let mut gene = Gene::zeros(gene_len);
                for index in 0..gene_len {
                    if rng.next_bool(2) {
                        gene.flip(index);
                    }
                }
                Some(gene)
            })
            .collect();
        Self { slots, gene_len }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn gene_len(&self) -> usize {
        self.gene_len
    }

    pub fn get(&self, index: usize) -> Option<&Gene> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Places `gene` in slot `index`, returning the previous occupant.
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the gene has the wrong length.
    pub fn set(&mut self, index: usize, gene: Gene) -> Result<Option<Gene>> {
        self.check_index(index)?;
        self.check_len(&gene)?;
        Ok(self.slots[index].replace(gene))
    }

    /// Empties slot `index`, returning its occupant.
    pub fn take(&mut self, index: usize) -> Option<Gene> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Inserts `gene` at `index`, shifting later slots one position right.
    /// Whatever occupied the last slot falls out and is returned.
    pub fn insert_at(&mut self, index: usize, gene: Gene) -> Result<Option<Gene>> {
        self.check_index(index)?;
        self.check_len(&gene)?;
        let dropped = self.slots.pop().flatten();
        self.slots.insert(index, Some(gene));
        Ok(dropped)
    }

    /// Empties every slot from `start` to the end.
    pub fn clear_from(&mut self, start: usize) {
        self.slots.iter_mut().skip(start).for_each(|slot| *slot = None);
    }

    /// Number of contiguous occupied slots from the front.
    pub fn leading_survivors(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Number of occupied slots anywhere in the pool.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Iterates over every slot in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Gene>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates over the occupied slots with their positions.
    pub fn genes(&self) -> impl Iterator<Item = (usize, &Gene)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|gene| (index, gene)))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(GeneticError::Other(format!(
                "Slot {} is outside a pool of capacity {}",
                index,
                self.capacity()
            )));
        }
        Ok(())
    }

    fn check_len(&self, gene: &Gene) -> Result<()> {
        if gene.len() != self.gene_len {
            return Err(GeneticError::LengthMismatch {
                expected: self.gene_len,
                found: gene.len(),
            });
        }
        Ok(())
    }
}
