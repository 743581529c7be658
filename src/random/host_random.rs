//! Port of the host runtime's seeded subtractive generator

/// Modulus of the generator (`i32::MAX`)
const MBIG: i32 = i32::MAX;
/// Seed constant from the reference implementation
const MSEED: i32 = 161_803_398;
/// Size of the state table; slot 0 is never used
const STATE_LEN: usize = 56;

/// Seeded generator reproducing the host's sample sequence bit for bit
///
/// All arithmetic wraps, matching the host's unchecked 32-bit integers.
#[derive(Debug, Clone)]
pub struct HostRandom {
    seed_array: [i32; STATE_LEN],
    inext: usize,
    inextp: usize,
}

impl HostRandom {
    /// Create a generator from a 32-bit seed
    pub fn new(seed: i32) -> Self {
        let mut seed_array = [0i32; STATE_LEN];

        let subtraction = if seed == i32::MIN { i32::MAX } else { seed.abs() };
        let mut mj = MSEED.wrapping_sub(subtraction);
        seed_array[55] = mj;
        let mut mk: i32 = 1;

        for i in 1..55 {
            let ii = (21 * i) % 55;
            seed_array[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = seed_array[ii];
        }

        for _ in 1..5 {
            for i in 1..STATE_LEN {
                let mixed = seed_array[i].wrapping_sub(seed_array[1 + (i + 30) % 55]);
                seed_array[i] = if mixed < 0 { mixed.wrapping_add(MBIG) } else { mixed };
            }
        }

        Self {
            seed_array,
            inext: 0,
            inextp: 21,
        }
    }

    /// Next raw sample in `[0, i32::MAX)`
    #[inline]
    pub fn next_sample(&mut self) -> i32 {
        let mut inext = self.inext + 1;
        if inext >= STATE_LEN {
            inext = 1;
        }
        let mut inextp = self.inextp + 1;
        if inextp >= STATE_LEN {
            inextp = 1;
        }

        let mut value = self.seed_array[inext].wrapping_sub(self.seed_array[inextp]);
        if value == MBIG {
            value -= 1;
        }
        if value < 0 {
            value = value.wrapping_add(MBIG);
        }

        self.seed_array[inext] = value;
        self.inext = inext;
        self.inextp = inextp;
        value
    }

    /// Next value in `[0, 1)`
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_sample()) * (1.0 / f64::from(MBIG))
    }

    /// Next integer in `[0, max)`; a non-positive `max` yields 0
    pub fn next_below(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        (self.next_f64() * f64::from(max)) as i32
    }

    /// Next integer in `[min, max)`; an empty range yields `min`
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = i64::from(max) - i64::from(min);
        if range <= i64::from(i32::MAX) {
            (self.next_f64() * range as f64) as i32 + min
        } else {
            ((self.sample_for_large_range() * range as f64) as i64 + i64::from(min)) as i32
        }
    }

    /// Wider sample used when a range does not fit in 31 bits
    fn sample_for_large_range(&mut self) -> f64 {
        let mut result = self.next_sample();
        if self.next_sample() % 2 == 0 {
            result = -result;
        }
        let mut d = f64::from(result);
        d += f64::from(i32::MAX - 1);
        d /= 2.0 * f64::from(i32::MAX) - 1.0;
        d
    }
}

impl Iterator for HostRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_samples_seed_zero() {
        let mut rng = HostRandom::new(0);
        assert_eq!(rng.next_sample(), 1_559_595_546);
        assert_eq!(rng.next_sample(), 1_755_192_844);
        assert_eq!(rng.next_sample(), 1_649_316_166);
    }

    #[test]
    fn test_reference_samples_other_seed() {
        let mut rng = HostRandom::new(12345);
        assert_eq!(rng.next_sample(), 143_337_951);
        assert_eq!(rng.next_sample(), 150_666_398);
        assert_eq!(rng.next_sample(), 1_663_795_458);
    }

    #[test]
    fn test_reference_doubles() {
        let mut rng = HostRandom::new(0);
        assert!((rng.next_f64() - 0.7262432699679598).abs() < 1e-15);

        let mut rng = HostRandom::new(42);
        assert!((rng.next_f64() - 0.6681064659115423).abs() < 1e-15);
        assert!((rng.next_f64() - 0.14090729837348093).abs() < 1e-15);
        assert!((rng.next_f64() - 0.12551828945312568).abs() < 1e-15);
    }

    #[test]
    fn test_min_seed_does_not_overflow() {
        let mut min = HostRandom::new(i32::MIN);
        let mut max = HostRandom::new(i32::MAX);
        for _ in 0..10 {
            assert_eq!(min.next_sample(), max.next_sample());
        }
    }

    #[test]
    fn test_next_below() {
        let mut rng = HostRandom::new(0);
        assert_eq!(rng.next_below(10), 7);
        assert_eq!(rng.next_below(10), 8);
        assert_eq!(rng.next_below(10), 7);
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = HostRandom::new(99);
        for _ in 0..500 {
            let value = rng.next_range(1, 3);
            assert!((1..3).contains(&value));
        }
        assert_eq!(rng.next_range(5, 5), 5);

        for _ in 0..100 {
            let value = rng.next_range(i32::MIN, i32::MAX);
            assert!(value < i32::MAX);
        }
    }

    #[test]
    fn test_iterator_matches_next_f64() {
        let mut a = HostRandom::new(7);
        let b: Vec<f64> = HostRandom::new(7).take(5).collect();
        for value in b {
            assert_eq!(a.next_f64(), value);
        }
    }
}
