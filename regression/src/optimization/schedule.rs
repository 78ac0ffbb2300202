use crate::{Result, SketchErr};

/// How the learning rate evolves between training steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LrSchedule {
    /// The learning rate never changes.
    #[default]
    Constant,
    /// After every step the learning rate shrinks by `rate` times its value.
    Decay { rate: f32 },
}

impl LrSchedule {
    /// Creates a new decaying schedule.
    ///
    /// # Returns
    /// An error if `rate` is not in `[0, 1)`.
    pub fn decay(rate: f32) -> Result<Self> {
        if !(0. ..1.).contains(&rate) {
            return Err(SketchErr::InvalidDecayRate(rate));
        }

        Ok(Self::Decay { rate })
    }

    /// The learning rate to use after a step taken with `learning_rate`.
    pub fn next(&self, learning_rate: f32) -> f32 {
        match *self {
            LrSchedule::Constant => learning_rate,
            LrSchedule::Decay { rate } => learning_rate * (1. - rate),
        }
    }
}
