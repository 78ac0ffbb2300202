use ndarray::{Array1, ArrayView1};

use super::LossFn;
use crate::error::{Result, SketchErr};

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

fn check_sizes(y_pred: &ArrayView1<f32>, y: &ArrayView1<f32>) -> Result<()> {
    if y_pred.len() != y.len() {
        return Err(SketchErr::SizeMismatch {
            a: "y_pred",
            b: "y",
            got: y_pred.len(),
            expected: y.len(),
        });
    }

    Ok(())
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<f32> {
        check_sizes(&y_pred, &y)?;

        Ok((&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default())
    }

    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>> {
        check_sizes(&y_pred, &y)?;

        Ok((&y_pred - &y) * (2.0 / y_pred.len() as f32))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn loss() {
        let y_pred = array![1., 2., 3.];
        let y = array![1., 0., 6.];

        // (0 + 4 + 9) / 3
        assert_eq!(Mse.loss(y_pred.view(), y.view()).unwrap(), 13. / 3.);
    }

    #[test]
    fn empty_loss_is_zero() {
        let empty = Array1::<f32>::zeros(0);
        assert_eq!(Mse.loss(empty.view(), empty.view()).unwrap(), 0.);
    }

    #[test]
    fn loss_prime() {
        let y_pred = array![2., 0.];
        let y = array![1., 1.];

        assert_eq!(
            Mse.loss_prime(y_pred.view(), y.view()).unwrap(),
            array![1., -1.]
        );
    }

    #[test]
    fn size_mismatch() {
        let y_pred = array![1., 2., 3.];
        let y = array![1., 2.];

        let expected = SketchErr::SizeMismatch {
            a: "y_pred",
            b: "y",
            got: 3,
            expected: 2,
        };

        assert_eq!(Mse.loss(y_pred.view(), y.view()), Err(expected.clone()));
        assert_eq!(Mse.loss_prime(y_pred.view(), y.view()), Err(expected));
    }
}
