//! Randomness sources for password generation.

mod hw;

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

pub use hw::HwRand;

/// Uniform integer draws, the only thing the generator needs from a source.
pub trait RandomSource {
    /// Returns a value in `[0, bound)` with every value equally likely.
    ///
    /// `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Which generator the CLI draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Hardware,
    Os,
    Seeded(u64),
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Hardware => hw::source_name(),
            Source::Os => "os (getrandom)",
            Source::Seeded(_) => "seeded (StdRng)",
        }
    }

    /// Instantiate the generator for this source.
    pub fn rng(self) -> Box<dyn RngCore> {
        log::debug!("random source: {}", self.name());
        match self {
            Source::Hardware => Box::new(HwRand::new()),
            Source::Os => Box::new(OsRng),
            Source::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }
}
