//! RNG module - deterministic random source for tile and piece generation
//!
//! The engine never touches a global RNG: every call site that needs
//! randomness receives a `&mut SimpleRng`, so a seed fully determines a game
//! and tests can replay exact boards.
//!
//! Uses a simple LCG with constants from Numerical Recipes.

/// Simple LCG (Linear Congruential Generator) RNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max); `max` must be positive
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next_u32() % max
    }

    /// Bernoulli draw: true with probability `p`.
    pub fn next_prob(&mut self, p: f64) -> bool {
        let unit = f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0);
        unit < p
    }

    /// Current internal state (for restarting with the same stream position).
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    #[should_panic]
    fn test_next_range_rejects_zero_max() {
        SimpleRng::new(1).next_range(0);
    }

    #[test]
    fn test_next_prob_extremes() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..100 {
            assert!(!rng.next_prob(0.0));
            assert!(rng.next_prob(1.0));
        }
    }

    #[test]
    fn test_next_prob_rough_frequency() {
        let mut rng = SimpleRng::new(424242);
        let hits = (0..10_000).filter(|_| rng.next_prob(0.3)).count();
        // Loose bounds; the LCG is not high quality but should not be wildly off
        assert!(hits > 2_000 && hits < 4_000, "hits = {}", hits);
    }
}
