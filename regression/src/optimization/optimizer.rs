/// Defines the strategy for updating model parameters based on calculated gradients.
///
/// The `Optimizer` trait is responsible for the mathematical transition of parameters from state
/// `t` to `t+1`.
pub trait Optimizer {
    /// Updates the provided slice of parameters using the given gradient.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grad` - The gradient corresponding to the `params` slice.
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]);

    /// The learning rate the next update will use.
    fn learning_rate(&self) -> f32;

    fn set_learning_rate(&mut self, learning_rate: f32);

    /// Forgets any state accumulated across updates.
    fn reset(&mut self) {}
}

impl<O: Optimizer + ?Sized> Optimizer for Box<O> {
    fn update_params(&mut self, params: &mut [f32], grad: &[f32]) {
        (**self).update_params(params, grad);
    }

    fn learning_rate(&self) -> f32 {
        (**self).learning_rate()
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        (**self).set_learning_rate(learning_rate);
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
