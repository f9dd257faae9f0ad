use std::ops::Range;

use crate::error::{GeneticError, Result};
use crate::gene::Gene;
use crate::rng::RandomSource;

/// Positions exchanged by [`crossover`] for genes of length `len`.
///
/// With `third = len / 3`, these are the positions strictly between
/// `third - 1` and `2 * third`. The window is empty when `len < 3`.
pub fn middle_window(len: usize) -> Range<usize> {
    let third = len / 3;
    third..2 * third
}

/// Recombines two parents by exchanging their middle window.
///
/// Two candidates exist: `first` with its middle taken from `second`, and
/// `second` with its middle taken from `first`. A single `next_bool(2)` draw
/// picks the first candidate on `true`, the second otherwise. For genes too
/// short to have a middle window the child is a copy of one parent.
///
/// # Errors
///
/// Returns `GeneticError::LengthMismatch` if the parents differ in length.
pub fn crossover<R>(rng: &mut R, first: &Gene, second: &Gene) -> Result<Gene>
where
    R: RandomSource + ?Sized,
{
    if first.len() != second.len() {
        return Err(GeneticError::LengthMismatch {
            expected: first.len(),
            found: second.len(),
        });
    }

    let (outer, inner) = if rng.next_bool(2) {
        (first, second)
    } else {
        (second, first)
    };

    let mut child = outer.clone();
    for index in middle_window(child.len()) {
        child.set(index, inner.bits()[index]);
    }
    Ok(child)
}
