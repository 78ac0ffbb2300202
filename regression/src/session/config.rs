use crate::optimization::LrSchedule;

/// The optimizer used to fit the line, along with its hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimizerConfig {
    GradientDescent,
    GradientDescentWithMomentum {
        momentum: f32,
    },
    Adam {
        beta1: f32,
        beta2: f32,
        epsilon: f32,
    },
}

/// Everything needed to build a `Session`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The learning rate of the first step after every reset.
    pub learning_rate: f32,
    pub schedule: LrSchedule,
    pub optimizer: OptimizerConfig,
    /// The seed of the first session, fresh seeds are derived from it on every new game. When
    /// missing, the operating system's entropy is used instead.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.2,
            schedule: LrSchedule::Constant,
            optimizer: OptimizerConfig::GradientDescent,
            seed: None,
        }
    }
}
