//! Bit-string genetic operators.
//!
//! These operate directly on `&mut [bool]` genomes and know nothing about
//! fitness. The engine wraps them and takes care of invalidating cached
//! fitness when a genome changes.
//!
//! # Crossover
//!
//! - [`two_point_crossover`]: swap the segment between two random cut points
//!
//! # Mutation
//!
//! - [`flip_bit_mutation`]: flip every bit independently with probability `p`
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use rand::Rng;

/// Creates a genome of `length` uniformly random bits.
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Vec<bool> {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Draws two distinct cut positions for a genome of `length` bits.
///
/// Returns `(start, end)` with `1 <= start < end <= length`, so the segment
/// `start..end` is never empty and never starts at bit 0. Each pair is
/// equally likely.
///
/// Returns `None` when `length < 2`: there is no valid pair of cuts.
pub fn random_cut_points<R: Rng>(length: usize, rng: &mut R) -> Option<(usize, usize)> {
    if length < 2 {
        return None;
    }

    let first = rng.random_range(1..=length);
    let mut second = rng.random_range(1..length);
    if second >= first {
        second += 1;
        Some((first, second))
    } else {
        Some((second, first))
    }
}

/// Swaps `a[start..end]` with `b[start..end]`.
///
/// Applying the same swap twice restores both genomes.
///
/// # Panics
/// Panics if `start > end` or `end` exceeds either genome's length.
pub fn swap_segment(a: &mut [bool], b: &mut [bool], start: usize, end: usize) {
    a[start..end].swap_with_slice(&mut b[start..end]);
}

/// Two-point crossover.
///
/// # Algorithm
///
/// 1. Draw two distinct cut points with [`random_cut_points`]
/// 2. Swap the segment between them
///
/// Returns `false` without drawing any random numbers if the genomes are
/// shorter than 2 bits.
///
/// # Complexity
/// O(n) time, O(1) space
///
/// # Panics
/// Panics if the genomes have different lengths.
pub fn two_point_crossover<R: Rng>(a: &mut [bool], b: &mut [bool], rng: &mut R) -> bool {
    assert_eq!(a.len(), b.len(), "genomes must have equal length");

    match random_cut_points(a.len(), rng) {
        Some((start, end)) => {
            swap_segment(a, b, start, end);
            true
        }
        None => false,
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with probability `flip_probability`.
///
/// Returns `true` if at least one bit was flipped.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if `flip_probability` is outside `[0, 1]`.
pub fn flip_bit_mutation<R: Rng>(genome: &mut [bool], flip_probability: f64, rng: &mut R) -> bool {
    let mut flipped = false;
    for bit in genome.iter_mut() {
        if rng.random_bool(flip_probability) {
            *bit = !*bit;
            flipped = true;
        }
    }
    flipped
}
