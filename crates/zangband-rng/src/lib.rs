use rand_core::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;

/// Dual-stream RNG matching ZAngband's `Rand_*` machinery.
///
/// ZAngband keeps two independent streams:
/// - **normal**: drives ordinary gameplay randomness
/// - **quick**: a separately seeded stream switched in while laying out
///   towns and wilderness, so fixed locations come out the same every
///   visit regardless of what the normal stream has been used for
#[derive(Clone)]
pub struct ZRng {
    normal: Isaac64Rng,
    quick: Isaac64Rng,
    use_quick: bool,
}

impl ZRng {
    /// Create a new RNG with both streams seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            normal: Isaac64Rng::seed_from_u64(seed),
            quick: Isaac64Rng::seed_from_u64(seed),
            use_quick: false,
        }
    }

    /// Reseed the quick stream and route draws through it.
    ///
    /// Matches C's `Rand_quick = TRUE; Rand_value = seed;` dance around
    /// town generation.
    pub fn enter_quick(&mut self, seed: u64) {
        self.quick = Isaac64Rng::seed_from_u64(seed);
        self.use_quick = true;
    }

    /// Route draws through the normal stream again.
    pub fn leave_quick(&mut self) {
        self.use_quick = false;
    }

    fn next(&mut self) -> u64 {
        if self.use_quick {
            self.quick.next_u64()
        } else {
            self.normal.next_u64()
        }
    }

    /// `0 <= randint0(m) < m` — uniform random integer.
    pub fn randint0(&mut self, m: i32) -> i32 {
        if m <= 0 {
            log::warn!("randint0({m}) attempted");
            return 0;
        }
        (self.next() % m as u64) as i32
    }

    /// `1 <= randint1(m) <= m` — uniform random integer.
    pub fn randint1(&mut self, m: i32) -> i32 {
        if m <= 0 {
            log::warn!("randint1({m}) attempted");
            return 1;
        }
        (self.next() % m as u64) as i32 + 1
    }

    /// `a <= rand_range(a, b) <= b` — uniform over an inclusive range.
    pub fn rand_range(&mut self, a: i32, b: i32) -> i32 {
        if a > b {
            log::warn!("rand_range({a}, {b}) attempted");
            return a;
        }
        a + self.randint0(b - a + 1)
    }

    /// True one time in `n`.
    pub fn one_in(&mut self, n: i32) -> bool {
        self.randint0(n) == 0
    }

    /// `num <= damroll(num, sides) <= num * sides` — sum of dice rolls.
    pub fn damroll(&mut self, num: i32, sides: i32) -> i32 {
        if num < 0 || sides < 0 {
            log::warn!("damroll({num}, {sides}) attempted");
            return 0;
        }
        let mut sum = 0;
        for _ in 0..num {
            sum += self.randint1(sides);
        }
        sum
    }

    /// `center - spread <= rand_spread <= center + spread`.
    pub fn rand_spread(&mut self, center: i32, spread: i32) -> i32 {
        center + self.randint0(1 + 2 * spread) - spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randint0_range() {
        let mut rng = ZRng::new(42);
        for _ in 0..1000 {
            let v = rng.randint0(50);
            assert!((0..50).contains(&v), "randint0(50) = {v} out of range");
        }
    }

    #[test]
    fn randint1_range() {
        let mut rng = ZRng::new(42);
        for _ in 0..1000 {
            let v = rng.randint1(6);
            assert!((1..=6).contains(&v), "randint1(6) = {v} out of range");
        }
    }

    #[test]
    fn damroll_range() {
        let mut rng = ZRng::new(42);
        for _ in 0..1000 {
            let v = rng.damroll(3, 6);
            assert!((3..=18).contains(&v), "damroll(3,6) = {v} out of range");
        }
    }

    #[test]
    fn rand_range_inclusive() {
        let mut rng = ZRng::new(42);
        for _ in 0..1000 {
            let v = rng.rand_range(-3, 7);
            assert!((-3..=7).contains(&v), "rand_range(-3,7) = {v} out of range");
        }
    }

    #[test]
    fn determinism() {
        let mut rng1 = ZRng::new(999);
        let mut rng2 = ZRng::new(999);
        for _ in 0..100 {
            assert_eq!(rng1.randint0(1000), rng2.randint0(1000));
        }
    }

    #[test]
    fn quick_stream_does_not_disturb_normal() {
        let mut rng1 = ZRng::new(42);
        let mut rng2 = ZRng::new(42);

        rng1.enter_quick(7);
        for _ in 0..10 {
            rng1.randint0(100);
        }
        rng1.leave_quick();

        for _ in 0..20 {
            assert_eq!(rng1.randint0(100), rng2.randint0(100));
        }
    }

    #[test]
    fn quick_stream_reproducible() {
        let mut rng = ZRng::new(1);
        rng.enter_quick(1234);
        let a: Vec<i32> = (0..10).map(|_| rng.randint0(100)).collect();
        rng.enter_quick(1234);
        let b: Vec<i32> = (0..10).map(|_| rng.randint0(100)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn randint0_invalid_returns_zero() {
        let mut rng = ZRng::new(42);
        assert_eq!(rng.randint0(0), 0);
        assert_eq!(rng.randint0(-5), 0);
    }

    #[test]
    fn randint1_invalid_returns_one() {
        let mut rng = ZRng::new(42);
        assert_eq!(rng.randint1(0), 1);
        assert_eq!(rng.randint1(-1), 1);
    }

    #[test]
    fn one_in_one_is_always_true() {
        let mut rng = ZRng::new(42);
        for _ in 0..100 {
            assert!(rng.one_in(1));
        }
    }
}
