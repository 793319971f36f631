//! Deterministic simulation RNG and the weighted-choice primitive.
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed` at
//! `initialize`.  Because ticks are strictly sequential (all spawns, then
//! all agent steps) the draw order is fixed, so the same seed and config
//! always reproduce the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG used for every stochastic decision in a run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Uniformly random element, or `None` for an empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Index drawn proportionally to `weights`.
    ///
    /// - empty `weights` → `None`;
    /// - total weight `<= 0` (or not finite) → `Some(0)`;
    /// - otherwise draw `r ∈ [0, total)` and subtract weights in order until
    ///   `r <= 0`; if rounding leaves `r` positive after the walk, the last
    ///   positively weighted index is returned.
    ///
    /// Non-positive weights are skipped during the walk, so they can never be
    /// picked while some weight is positive.
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if !total.is_finite() || total <= 0.0 {
            return Some(0);
        }
        let mut r = self.0.gen_range(0.0..total);
        let mut last = 0;
        for (i, &w) in weights.iter().enumerate() {
            if w.is_nan() || w <= 0.0 {
                continue;
            }
            last = i;
            r -= w;
            if r <= 0.0 {
                return Some(i);
            }
        }
        Some(last)
    }

    /// Item drawn proportionally to `weights` (see [`weighted_index`]).
    ///
    /// `items` and `weights` are paired positionally; extra entries on the
    /// longer side are ignored.
    ///
    /// [`weighted_index`]: SimRng::weighted_index
    pub fn weighted_choice<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> Option<&'a T> {
        let n = items.len().min(weights.len());
        self.weighted_index(&weights[..n]).map(|i| &items[i])
    }
}
