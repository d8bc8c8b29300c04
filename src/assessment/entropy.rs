use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::Range;

/// Source of independent draws for the assessment engine.
///
/// This is the only nondeterminism boundary of the engine: the same
/// sequence of draws always yields the same `Assessment`.
pub trait EntropySource: Send {
    /// Draw one value, nominally from the half-open `range`
    fn draw(&mut self, range: Range<u32>) -> u32;
}

/// Adapts any `rand` RNG into an `EntropySource`
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded if a seed is given, otherwise OS-seeded
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng + Send> EntropySource for RngSource<R> {
    fn draw(&mut self, range: Range<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

/// Replays a fixed list of values, in order.
///
/// Values are returned as given, even outside the requested range, so a
/// caller can force any threshold. Emotions and metrics are percentages:
/// both cap stored values at 100. Once the script runs out every draw
/// returns the lower bound of the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
    drawn: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Number of draws served so far (scripted or fallback)
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl EntropySource for ScriptedSource {
    fn draw(&mut self, range: Range<u32>) -> u32 {
        self.drawn += 1;
        self.values.pop_front().unwrap_or(range.start)
    }
}
