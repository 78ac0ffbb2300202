use ndarray::{Array1, ArrayView1};

use crate::Result;

pub trait LossFn {
    /// # Errors
    /// Returns `SizeMismatch` if `y_pred` and `y` differ in length.
    fn loss(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<f32>;

    /// # Errors
    /// Returns `SizeMismatch` if `y_pred` and `y` differ in length.
    fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>>;
}
