//! Utility functions used accross the library
use crate::Scalar;

/// Restrict value to a certain interval
#[inline]
pub fn clamp<T>(val: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Round to the nearest integer, ties are rounded up (towards positive infinity)
///
/// This differs from `Scalar::round` for negative ties: `-2.5` becomes `-2`.
#[inline]
pub fn round_half_up(value: Scalar) -> i32 {
    (value + 0.5).floor() as i32
}

/// Binomial coefficient `C(n, k)` computed as a product, to avoid factorial overflow
pub fn binomial(n: usize, k: usize) -> Scalar {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 1..=k {
        result = result * (n - i + 1) as Scalar / i as Scalar;
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[macro_export]
    macro_rules! assert_approx_eq {
        ( $v0:expr, $v1: expr ) => {{
            assert!(($v0 - $v1).abs() < $crate::EPSILON, "{} != {}", $v0, $v1);
        }};
        ( $v0:expr, $v1: expr, $e: expr ) => {{
            assert!(($v0 - $v1).abs() < $e, "{} != {}", $v0, $v1);
        }};
    }

    /// Deterministic random numbers for randomized tests
    pub(crate) struct Rnd {
        state: u32,
    }

    impl Rnd {
        pub(crate) fn new(seed: u32) -> Self {
            Self { state: seed }
        }

        /// Sample from `lo..hi`
        pub(crate) fn range(&mut self, lo: i32, hi: i32) -> i32 {
            self.state = self.state.wrapping_mul(214_013).wrapping_add(2_531_011);
            lo + ((self.state >> 16) & 0x7fff) as i32 % (hi - lo)
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(7.0), 7);
    }

    #[test]
    fn test_binomial() {
        let row: Vec<_> = (0..=4).map(|k| binomial(4, k)).collect();
        assert_eq!(row, vec![1.0, 4.0, 6.0, 4.0, 1.0]);
        assert_approx_eq!(binomial(20, 10), 184756.0);
        assert_eq!(binomial(3, 5), 0.0);
        assert_eq!(binomial(0, 0), 1.0);
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_rnd() {
        let mut rnd = Rnd::new(7);
        let values: Vec<_> = (0..1000).map(|_| rnd.range(-3, 4)).collect();
        assert!(values.iter().all(|v| (-3..4).contains(v)));
        assert!((-3..4).all(|v| values.contains(&v)));
    }
}
