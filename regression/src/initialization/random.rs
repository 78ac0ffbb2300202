use rand::Rng;
use rand_distr::{Distribution, StandardUniform};

use super::ParamGen;

/// A parameter generator that follows a certain probabilistic distribution.
pub struct RandParamGen<'a, R: Rng, D: Distribution<f32>> {
    rng: &'a mut R,
    distribution: D,
    remaining: usize,
}

impl<'a, R: Rng, D: Distribution<f32>> RandParamGen<'a, R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn new(rng: &'a mut R, distribution: D, limit: usize) -> Self {
        Self {
            rng,
            distribution,
            remaining: limit,
        }
    }
}

impl<'a, R: Rng> RandParamGen<'a, R, StandardUniform> {
    /// Creates a new `RandParamGen` sampling uniformly from `[0, 1)`.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `limit` - The maximum amount of numbers to generate.
    pub fn unit(rng: &'a mut R, limit: usize) -> Self {
        Self::new(rng, StandardUniform, limit)
    }
}

impl<R: Rng, D: Distribution<f32>> ParamGen for RandParamGen<'_, R, D> {
    fn sample(&mut self, mut n: usize) -> Option<Vec<f32>> {
        if self.remaining == 0 {
            return None;
        }

        n = n.min(self.remaining);
        self.remaining -= n;

        let sample = (0..n)
            .map(|_| self.distribution.sample(&mut *self.rng))
            .collect();
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn empty() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut param_gen = RandParamGen::unit(&mut rng, 0);
        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn partial() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut param_gen = RandParamGen::unit(&mut rng, 3);

        let sample = param_gen.sample(2).unwrap();
        assert_eq!(sample.len(), 2);

        let sample = param_gen.sample(2).unwrap();
        assert_eq!(sample.len(), 1);

        assert!(param_gen.sample(1).is_none());
    }

    #[test]
    fn unit_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let sample = RandParamGen::unit(&mut rng, 1000).sample(1000).unwrap();

        assert!(sample.iter().all(|v| (0. ..1.).contains(v)));
    }
}
