//! The OneMax benchmark: maximize the number of set bits.
//!
//! The optimum is the all-ones genome with fitness equal to its length.

use crate::ga::GaProblem;

/// Genome length used by the classic OneMax demonstration.
pub const DEFAULT_GENOME_LENGTH: usize = 100;

/// OneMax problem over genomes of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneMax {
    genome_length: usize,
}

impl OneMax {
    pub fn new(genome_length: usize) -> Self {
        Self { genome_length }
    }
}

impl Default for OneMax {
    fn default() -> Self {
        Self::new(DEFAULT_GENOME_LENGTH)
    }
}

/// Counts set bits.
pub fn count_ones(genome: &[bool]) -> usize {
    genome.iter().filter(|&&b| b).count()
}

impl GaProblem for OneMax {
    fn genome_length(&self) -> usize {
        self.genome_length
    }

    fn evaluate(&self, genome: &[bool]) -> f64 {
        count_ones(genome) as f64
    }
}
