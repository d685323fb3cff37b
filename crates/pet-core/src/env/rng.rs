//! RNG oracles for candidate draws.
//!
//! # Determinism
//!
//! [`PcgRng`] and [`SequenceRng`] are deterministic: the same seed or script
//! always yields the same sequence of draws, which makes decision ticks
//! replayable. [`StdRngOracle`] is the default for live scenes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples used by the decision tick.
pub trait RngOracle: Send {
    /// Draws a uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// Draws one sample and reports whether it falls below `probability`.
    fn chance(&mut self, probability: f32) -> bool {
        self.next_unit() < probability
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64 bits of state, 32-bit output.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generates the next 32-bit value and advances the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

impl RngOracle for PcgRng {
    fn next_unit(&mut self) -> f32 {
        // 24 high bits fit the f32 mantissa exactly, so the result is < 1.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Entropy-backed oracle built on `rand`'s standard generator.
#[derive(Clone, Debug)]
pub struct StdRngOracle(StdRng);

impl StdRngOracle {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Reproducible stream from a fixed seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngOracle for StdRngOracle {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Replays a scripted list of draws, then a fixed fallback value.
///
/// Counts every draw so callers can assert how many samples a tick consumed.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    draws: VecDeque<f32>,
    fallback: f32,
    consumed: usize,
}

impl SequenceRng {
    /// Scripted draws followed by `1.0`, which never passes a candidate.
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self::with_fallback(draws, 1.0)
    }

    pub fn with_fallback(draws: impl IntoIterator<Item = f32>, fallback: f32) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback,
            consumed: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for SequenceRng {
    fn next_unit(&mut self) -> f32 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let mut c = PcgRng::new(43);

        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let other: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn unit_draws_stay_in_range() {
        let mut pcg = PcgRng::new(7);
        let mut std = StdRngOracle::seed_from_u64(7);

        for _ in 0..10_000 {
            let p = pcg.next_unit();
            let s = std.next_unit();
            assert!((0.0..1.0).contains(&p), "pcg draw {p}");
            assert!((0.0..1.0).contains(&s), "std draw {s}");
        }
    }

    #[test]
    fn sequence_replays_then_falls_back() {
        let mut rng = SequenceRng::new([0.05, 0.5]);

        assert!(rng.chance(0.1));
        assert!(!rng.chance(0.1));
        assert!(!rng.chance(1.0));
        assert_eq!(rng.consumed(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn boxed_oracle_delegates() {
        let mut rng: Box<dyn RngOracle> = Box::new(SequenceRng::new([0.25]));
        assert_eq!(rng.next_unit(), 0.25);
    }
}
