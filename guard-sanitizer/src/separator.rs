//! Separator sources for term breaks.

use guard_core::config::defaults::DEFAULT_SEPARATORS;
use guard_core::traits::ISeparatorSource;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Draws each separator independently and uniformly from an alphabet.
pub struct RandomSeparator<'a, R: Rng = ThreadRng> {
    alphabet: &'a [char],
    rng: R,
}

impl<'a> RandomSeparator<'a, ThreadRng> {
    /// Use the thread-local generator.
    pub fn new(alphabet: &'a [char]) -> Self {
        Self::with_rng(alphabet, rand::rng())
    }
}

impl<'a, R: Rng> RandomSeparator<'a, R> {
    /// Use a caller-supplied generator, e.g. a seeded one.
    pub fn with_rng(alphabet: &'a [char], rng: R) -> Self {
        Self { alphabet, rng }
    }
}

impl Default for RandomSeparator<'static, ThreadRng> {
    fn default() -> Self {
        Self::new(&DEFAULT_SEPARATORS)
    }
}

impl<R: Rng> ISeparatorSource for RandomSeparator<'_, R> {
    fn next_separator(&mut self) -> char {
        self.alphabet
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_SEPARATORS[0])
    }
}

/// Always yields the same separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeparator(pub char);

impl ISeparatorSource for FixedSeparator {
    fn next_separator(&mut self) -> char {
        self.0
    }
}
