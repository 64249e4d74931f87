use rand09::{rngs::OsRng, rngs::ReseedingRng, RngCore as _};

use super::{DefaultRng, RandSource};

impl RandSource for DefaultRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

impl Default for DefaultRng {
    /// Creates an instance of the default random number generator.
    ///
    /// # Panics
    ///
    /// Panics in the highly unlikely event where the operating system fails to provide
    /// secure entropy.
    fn default() -> Self {
        // pulls fresh OS entropy after every 64 KiB of output
        let inner = ReseedingRng::new(1024 * 64, OsRng).expect("could not initialize DefaultRng");
        Self {
            _private: (),
            inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::next_digit;
    use super::{DefaultRng, RandSource};

    /// Draws each suffix digit value at a near-uniform rate
    ///
    /// This test may fail at a very low probability.
    #[test]
    fn draws_each_suffix_digit_value_at_a_near_uniform_rate() {
        const N_DRAWS: usize = 300_000;

        let mut rng = DefaultRng::default();
        for radix in [64u32, 62, 58, 36] {
            let mut counts = vec![0u32; radix as usize];
            for _ in 0..N_DRAWS {
                counts[next_digit(&mut rng, radix) as usize] += 1;
            }

            // six standard deviations of the per-digit binomial count
            let p = 1.0 / radix as f64;
            let margin = 6.0 * (N_DRAWS as f64 * p * (1.0 - p)).sqrt();
            for (digit, count) in counts.iter().enumerate() {
                let diff = (*count as f64 - N_DRAWS as f64 * p).abs();
                assert!(diff < margin, "digit {} of radix {}", digit, radix);
            }
        }
    }

    /// Seeds independent instances differently
    #[test]
    fn seeds_independent_instances_differently() {
        let mut a = DefaultRng::default();
        let mut b = DefaultRng::default();
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(first, second);
    }
}
