//! Uniform random choice used by the maze builder.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::MazeSeed;

/// A source of uniform choices among `n` alternatives.
///
/// The maze builder asks its chooser to pick one of the currently available
/// unvisited neighbors. Implementations other than [`RngChooser`] are mainly
/// useful for deterministic tests.
pub trait Chooser {
    /// Returns an index in `0..n`.
    ///
    /// Callers never pass `n == 0`.
    fn choose(&mut self, n: usize) -> usize;
}

impl<C> Chooser for &mut C
where
    C: Chooser + ?Sized,
{
    fn choose(&mut self, n: usize) -> usize {
        (**self).choose(n)
    }
}

/// A [`Chooser`] backed by a seeded PCG generator.
///
/// A single `RngChooser` is meant to live for the whole process: restarting a
/// maze keeps drawing from the same generator instead of reseeding it.
///
/// # Examples
///
/// ```
/// use mazewalk_generator::{Chooser, MazeSeed, RngChooser};
///
/// let seed = MazeSeed::from_phrase("example");
/// let mut a = RngChooser::with_seed(seed);
/// let mut b = RngChooser::with_seed(seed);
///
/// for n in 1..=4 {
///     let i = a.choose(n);
///     assert!(i < n);
///     assert_eq!(i, b.choose(n));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RngChooser {
    rng: Pcg64,
    seed: MazeSeed,
}

impl RngChooser {
    /// Creates a chooser whose sequence is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: MazeSeed) -> Self {
        Self {
            rng: Pcg64::from_seed(*seed.as_bytes()),
            seed,
        }
    }

    /// Creates a chooser seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_seed(MazeSeed::random())
    }

    /// Returns the seed this chooser was created with.
    #[must_use]
    pub fn seed(&self) -> MazeSeed {
        self.seed
    }
}

impl Chooser for RngChooser {
    fn choose(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot choose among zero alternatives");
        self.rng.random_range(0..n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_cover_range() {
        let mut chooser = RngChooser::with_seed(MazeSeed::from_phrase("cover"));
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[chooser.choose(4)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_single_alternative() {
        let mut chooser = RngChooser::from_entropy();
        for _ in 0..10 {
            assert_eq!(chooser.choose(1), 0);
        }
    }

    #[test]
    #[should_panic(expected = "zero alternatives")]
    fn test_zero_alternatives_panics() {
        let mut chooser = RngChooser::from_entropy();
        let _ = chooser.choose(0);
    }
}
