use log::debug;

use crate::{
    arch::{LinearModel, loss::LossFn},
    buffers::FrameScope,
    dataset::PointSet,
    error::Result,
    optimization::{LrSchedule, Optimizer},
};

/// The minimum amount of points needed to take a training step.
pub const MIN_POINTS: usize = 2;

/// The outcome of a single training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// The amount of steps taken since the last reset, this one included.
    pub step: u64,
    pub learning_rate: f32,
    pub loss_before: f32,
    pub loss: f32,
}

/// Fits a `LinearModel` to a set of points, one full batch gradient step at a time.
pub struct Trainer<O: Optimizer, L: LossFn> {
    optimizer: O,
    loss_fn: L,
    schedule: LrSchedule,
    initial_lr: f32,
    steps: u64,
}

impl<O: Optimizer, L: LossFn> Trainer<O, L> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - Applies the gradient to the model's parameters.
    /// * `loss_fn` - The function being minimized.
    /// * `schedule` - How the optimizer's learning rate evolves after each step.
    pub fn new(optimizer: O, loss_fn: L, schedule: LrSchedule) -> Self {
        Self {
            initial_lr: optimizer.learning_rate(),
            optimizer,
            loss_fn,
            schedule,
            steps: 0,
        }
    }

    /// Takes one gradient step over every point in `points`.
    ///
    /// # Arguments
    /// * `model` - The model to update in place.
    /// * `points` - The whole training set.
    /// * `scope` - The frame scope every intermediate buffer is allocated in.
    ///
    /// # Returns
    /// The step's report, or `None` if there are less than `MIN_POINTS` points, in which case
    /// the model is left untouched.
    ///
    /// # Errors
    /// Returns the loss function's error, the model is left untouched in that case too.
    pub fn step(
        &mut self,
        model: &mut LinearModel,
        points: &PointSet,
        scope: &FrameScope,
    ) -> Result<Option<StepReport>> {
        if points.len() < MIN_POINTS {
            return Ok(None);
        }

        let xs = scope.from_vec(points.xs());
        let ys = scope.from_vec(points.ys());

        let y_pred = scope.adopt(model.predict(xs.view()));
        let loss_before = self.loss_fn.loss(y_pred.view(), ys.view())?;
        let d_pred = scope.adopt(self.loss_fn.loss_prime(y_pred.view(), ys.view())?);
        let grad = model.backprop(xs.view(), d_pred.view());

        let learning_rate = self.optimizer.learning_rate();
        self.optimizer.update_params(model.params_mut(), &grad);
        self.optimizer
            .set_learning_rate(self.schedule.next(learning_rate));
        self.steps += 1;

        let y_pred = scope.adopt(model.predict(xs.view()));
        let loss = self.loss_fn.loss(y_pred.view(), ys.view())?;

        debug!(
            step = self.steps,
            lr = learning_rate,
            loss = loss;
            "trained on {} points", points.len()
        );

        Ok(Some(StepReport {
            step: self.steps,
            learning_rate,
            loss_before,
            loss,
        }))
    }

    /// Computes the loss of `model` over `points` without training.
    ///
    /// # Returns
    /// `None` if `points` is empty.
    ///
    /// # Errors
    /// Returns the loss function's error.
    pub fn evaluate(
        &self,
        model: &LinearModel,
        points: &PointSet,
        scope: &FrameScope,
    ) -> Result<Option<f32>> {
        if points.is_empty() {
            return Ok(None);
        }

        let xs = scope.from_vec(points.xs());
        let ys = scope.from_vec(points.ys());
        let y_pred = scope.adopt(model.predict(xs.view()));

        self.loss_fn.loss(y_pred.view(), ys.view()).map(Some)
    }

    /// Restores the initial learning rate and clears the optimizer's accumulated state.
    pub fn reset(&mut self) {
        self.optimizer.reset();
        self.optimizer.set_learning_rate(self.initial_lr);
        self.steps = 0;
    }

    pub fn learning_rate(&self) -> f32 {
        self.optimizer.learning_rate()
    }

    pub fn schedule(&self) -> LrSchedule {
        self.schedule
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, ArrayView1};

    use crate::{
        arch::loss::Mse, buffers::BufferArena, coords::Point, error::SketchErr,
        optimization::GradientDescent,
    };

    struct Mismatched;

    impl LossFn for Mismatched {
        fn loss(&self, y_pred: ArrayView1<f32>, _: ArrayView1<f32>) -> Result<f32> {
            Err(SketchErr::SizeMismatch {
                a: "y_pred",
                b: "y",
                got: y_pred.len(),
                expected: 0,
            })
        }

        fn loss_prime(&self, y_pred: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<Array1<f32>> {
            self.loss(y_pred, y).map(|_| Array1::zeros(0))
        }
    }

    fn trainer(lr: f32) -> Trainer<GradientDescent, Mse> {
        Trainer::new(GradientDescent::new(lr), Mse, LrSchedule::Constant)
    }

    #[test]
    fn moves_towards_identity() {
        let arena = BufferArena::new();
        let points: PointSet = [Point::new(0., 0.), Point::new(1., 1.)].into_iter().collect();
        let mut model = LinearModel::new(0., 0.);

        let report = trainer(0.2)
            .step(&mut model, &points, &arena.scope())
            .unwrap()
            .unwrap();

        // grad = [-1, -1], so both parameters move by lr
        assert!((model.slope() - 0.2).abs() < 1e-6);
        assert!((model.intercept() - 0.2).abs() < 1e-6);
        assert_eq!(report.loss_before, 0.5);
        assert!(report.loss < report.loss_before);
        assert_eq!(report.step, 1);
    }

    #[test]
    fn single_point_is_not_trained() {
        let arena = BufferArena::new();
        let points: PointSet = [Point::new(0.5, 0.5)].into_iter().collect();
        let mut model = LinearModel::new(0.3, 0.7);

        let mut trainer = trainer(0.2);
        assert_eq!(trainer.step(&mut model, &points, &arena.scope()), Ok(None));

        assert_eq!(model, LinearModel::new(0.3, 0.7));
        assert_eq!(trainer.steps(), 0);
        assert_eq!(arena.peak(), 0);
    }

    #[test]
    fn scope_is_empty_after_step() {
        let arena = BufferArena::new();
        let points: PointSet = (0..10)
            .map(|i| Point::new(i as f32 / 10., 0.5))
            .collect();
        let mut model = LinearModel::new(0., 0.);

        trainer(0.1)
            .step(&mut model, &points, &arena.scope())
            .unwrap();

        assert_eq!(arena.live(), 0);
        assert!(arena.peak() > 0);
    }

    #[test]
    fn decay_shrinks_learning_rate() {
        let arena = BufferArena::new();
        let points: PointSet = [Point::new(0., 0.), Point::new(1., 1.)].into_iter().collect();
        let mut model = LinearModel::new(0., 0.);
        let mut trainer = Trainer::new(
            GradientDescent::new(0.2),
            Mse,
            LrSchedule::decay(0.5).unwrap(),
        );

        let first = trainer.step(&mut model, &points, &arena.scope()).unwrap().unwrap();
        let second = trainer.step(&mut model, &points, &arena.scope()).unwrap().unwrap();

        assert_eq!(first.learning_rate, 0.2);
        assert_eq!(second.learning_rate, 0.1);

        trainer.reset();
        assert_eq!(trainer.learning_rate(), 0.2);
        assert_eq!(trainer.steps(), 0);
    }

    #[test]
    fn evaluate() {
        let arena = BufferArena::new();
        let points: PointSet = [Point::new(0., 1.), Point::new(1., 3.)].into_iter().collect();
        let model = LinearModel::new(2., 1.);

        let trainer = trainer(0.1);
        assert_eq!(trainer.evaluate(&model, &points, &arena.scope()), Ok(Some(0.)));
        assert_eq!(trainer.evaluate(&model, &PointSet::new(), &arena.scope()), Ok(None));
    }

    #[test]
    fn loss_errors_are_propagated() {
        let arena = BufferArena::new();
        let points: PointSet = [Point::new(0., 0.), Point::new(1., 1.)].into_iter().collect();
        let mut model = LinearModel::new(0.3, 0.7);
        let mut trainer = Trainer::new(GradientDescent::new(0.2), Mismatched, LrSchedule::Constant);

        let err = trainer.step(&mut model, &points, &arena.scope()).unwrap_err();

        assert!(matches!(err, SketchErr::SizeMismatch { got: 2, .. }));
        assert_eq!(model, LinearModel::new(0.3, 0.7));
        assert_eq!(trainer.steps(), 0);
        assert!(trainer.evaluate(&model, &points, &arena.scope()).is_err());
        assert_eq!(arena.live(), 0);
    }
}
