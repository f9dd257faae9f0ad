use crate::gene::Gene;
use crate::rng::RandomSource;

/// How the per-bit mutation probability `1/denominator` is chosen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationRate {
    /// The denominator is the gene length, about one flip per child.
    #[default]
    GeneLength,
    /// A fixed denominator; must be non-zero.
    OneIn(u32),
}

impl MutationRate {
    /// The denominator to pass to [`mutate`] for genes of length `gene_len`.
    pub fn denominator(&self, gene_len: usize) -> u32 {
        match self {
            MutationRate::GeneLength => u32::try_from(gene_len).unwrap_or(u32::MAX),
            MutationRate::OneIn(denominator) => *denominator,
        }
    }
}

/// Flips each bit of `gene` independently with probability `1/denominator`,
/// drawing one `next_bool(denominator)` per position in order.
///
/// Returns the number of flipped bits. `denominator` must be non-zero unless
/// the gene is empty.
pub fn mutate<R>(rng: &mut R, gene: &mut Gene, denominator: u32) -> usize
where
    R: RandomSource + ?Sized,
{
    let mut flipped = 0;
    for index in 0..gene.len() {
        if rng.next_bool(denominator) {
            gene.flip(index);
            flipped += 1;
        }
    }
    flipped
}
