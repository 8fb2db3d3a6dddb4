//! Deterministic RNG for battle resolution
//!
//! Every random decision (skill choice, target draw, evasion, status rolls,
//! dealing, fracture) goes through an injected [`BattleRng`], so a seed fully
//! reproduces a match.

/// Trait for random number generation in battles
pub trait BattleRng {
    /// Generate a random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a random number in range [0, max)
    fn gen_range(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next_u32() as usize) % max
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact.
    fn gen_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// True with the given probability. 0.0 never fires, 1.0 always does.
    fn chance(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Shuffle a slice using Fisher-Yates algorithm
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_range(i + 1);
            slice.swap(i, j);
        }
    }

    /// Draw `count` distinct indices out of [0, len), in draw order
    fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let mut pool: Vec<usize> = (0..len).collect();
        let count = count.min(len);
        for i in 0..count {
            let j = i + self.gen_range(len - i);
            pool.swap(i, j);
        }
        pool.truncate(count);
        pool
    }
}

/// XorShift32 RNG - simple, fast, deterministic
///
/// The same seed will always produce the same sequence.
#[derive(Debug, Clone)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    /// Create a new RNG from a u64 seed
    ///
    /// The seed is folded into a u32, ensuring state is never 0.
    pub fn seed_from_u64(seed: u64) -> Self {
        let state = ((seed as u32) ^ ((seed >> 32) as u32)).max(1);
        Self { state }
    }

    /// Create a new RNG from a u32 seed
    pub fn seed_from_u32(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl BattleRng for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xorshift_deterministic() {
        let mut rng1 = XorShiftRng::seed_from_u64(12345);
        let mut rng2 = XorShiftRng::seed_from_u64(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_gen_f32_in_unit_interval() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.gen_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_chance_extremes_are_exact() {
        let mut rng = XorShiftRng::seed_from_u64(99);
        for _ in 0..1000 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_sample_indices_without_replacement() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        for _ in 0..100 {
            let mut picked = rng.sample_indices(6, 3);
            assert_eq!(picked.len(), 3);
            picked.sort();
            picked.dedup();
            assert_eq!(picked.len(), 3, "indices must be distinct");
            assert!(picked.iter().all(|&i| i < 6));
        }
        assert_eq!(rng.sample_indices(2, 5).len(), 2);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = XorShiftRng::seed_from_u64(42);
        let mut arr = [1, 2, 3, 4, 5];
        rng.shuffle(&mut arr);

        let mut sorted = arr;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }
}
