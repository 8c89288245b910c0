//! RNG module - deterministic randomness for weight spawning
//!
//! Weights get a random value, shape and spawn column. Using a small seeded
//! LCG instead of a thread-local generator keeps whole games reproducible from
//! a single seed, which the tests and benchmarks rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed: state, state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // High bits of an LCG are far less periodic than the low ones.
        (self.next_u32() >> 8) % max
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range(hi - lo + 1)
    }

    /// Pick a random element of a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i).copied()
    }

    /// Seed this generator was created with (for replaying a game)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
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
    fn test_zero_seed_is_remapped() {
        let rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 1);
    }

    #[test]
    fn test_next_inclusive_stays_in_range_and_hits_bounds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            let v = rng.next_inclusive(1, 10);
            assert!((1..=10).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value should appear: {seen:?}");
    }

    #[test]
    fn test_next_inclusive_degenerate_range() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.next_inclusive(4, 4), 4);
        assert_eq!(rng.next_inclusive(9, 3), 9);
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_pick() {
        let mut rng = SimpleRng::new(99);
        assert_eq!(rng.pick::<u8>(&[]), None);
        assert_eq!(rng.pick(&[42]), Some(42));
        let v = rng.pick(&[1, 2, 3]).unwrap();
        assert!([1, 2, 3].contains(&v));
    }
}
