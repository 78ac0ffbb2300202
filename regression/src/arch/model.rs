use ndarray::{Array1, ArrayView1};
use rand::Rng;

use crate::initialization::{ParamGen, RandParamGen};

const SLOPE: usize = 0;
const INTERCEPT: usize = 1;

/// A line `y = slope * x + intercept`, the model being fitted.
///
/// Both parameters live in a single contiguous slice so optimizers can update them in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    params: [f32; 2],
}

impl LinearModel {
    /// The amount of trainable parameters.
    pub const SIZE: usize = 2;

    pub fn new(slope: f32, intercept: f32) -> Self {
        Self {
            params: [slope, intercept],
        }
    }

    /// Creates a new `LinearModel` with both parameters drawn independently from `[0, 1)`.
    ///
    /// # Arguments
    /// * `rng` - The random number generator to sample the parameters from.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut param_gen = RandParamGen::unit(rng, Self::SIZE);

        let mut params = [0.; Self::SIZE];
        if let Some(sample) = param_gen.sample(Self::SIZE) {
            params.copy_from_slice(&sample);
        }

        Self { params }
    }

    pub fn slope(&self) -> f32 {
        self.params[SLOPE]
    }

    pub fn intercept(&self) -> f32 {
        self.params[INTERCEPT]
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut [f32] {
        &mut self.params
    }

    /// Evaluates the line on every x value.
    pub fn predict(&self, xs: ArrayView1<f32>) -> Array1<f32> {
        xs.mapv(|x| self.at(x))
    }

    /// Evaluates the line on a single x value.
    pub fn at(&self, x: f32) -> f32 {
        self.slope() * x + self.intercept()
    }

    /// The gradient of a loss with respect to `[slope, intercept]`.
    ///
    /// # Arguments
    /// * `xs` - The inputs the prediction was made with.
    /// * `d_pred` - The derivative of the loss with respect to each prediction.
    pub fn backprop(&self, xs: ArrayView1<f32>, d_pred: ArrayView1<f32>) -> [f32; 2] {
        [d_pred.dot(&xs), d_pred.sum()]
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn predict() {
        let model = LinearModel::new(2., 1.);
        let xs = array![0., 0.5, 1.];

        assert_eq!(model.predict(xs.view()), array![1., 2., 3.]);
    }

    #[test]
    fn random_params_are_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let model = LinearModel::random(&mut rng);
            assert!((0. ..1.).contains(&model.slope()));
            assert!((0. ..1.).contains(&model.intercept()));
        }
    }

    #[test]
    fn random_is_reproducible() {
        let a = LinearModel::random(&mut StdRng::seed_from_u64(7));
        let b = LinearModel::random(&mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn backprop() {
        let model = LinearModel::new(0., 0.);
        let xs = array![1., 2.];
        let d_pred = array![0.5, -1.];

        assert_eq!(model.backprop(xs.view(), d_pred.view()), [-1.5, -0.5]);
    }
}
