use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{OptimizerConfig, Session, SessionConfig};
use crate::{
    Result, SketchErr,
    arch::{LinearModel, loss::Mse},
    optimization::{
        Adam, GradientDescent, GradientDescentWithMomentum, LrSchedule, Optimizer,
    },
    training::Trainer,
};

/// Builds `Session`s given a configuration.
#[derive(Default)]
pub struct SessionBuilder;

impl SessionBuilder {
    /// Creates a new `SessionBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Session` following a config.
    ///
    /// # Arguments
    /// * `config` - The configuration for the session.
    ///
    /// # Returns
    /// An error if any of the numerical settings is out of its valid range.
    pub fn build(&self, config: &SessionConfig) -> Result<Session> {
        let lr = config.learning_rate;
        if !lr.is_finite() || lr <= 0. {
            return Err(SketchErr::InvalidLearningRate(lr));
        }

        let optimizer = self.resolve_optimizer(config.optimizer, lr)?;
        let schedule = self.resolve_schedule(config.schedule)?;
        let trainer = Trainer::new(optimizer, Mse::new(), schedule);

        let mut seeds = self.generate_rng(config.seed);
        let seed = config.seed.unwrap_or_else(|| seeds.random());

        Ok(Session::new(trainer, seed, seeds))
    }

    fn resolve_optimizer(&self, optimizer: OptimizerConfig, lr: f32) -> Result<Box<dyn Optimizer>> {
        let optimizer: Box<dyn Optimizer> = match optimizer {
            OptimizerConfig::GradientDescent => Box::new(GradientDescent::new(lr)),
            OptimizerConfig::GradientDescentWithMomentum { momentum } => {
                check_unit("momentum", momentum)?;
                Box::new(GradientDescentWithMomentum::new(
                    LinearModel::SIZE,
                    lr,
                    momentum,
                ))
            }
            OptimizerConfig::Adam {
                beta1,
                beta2,
                epsilon,
            } => {
                check_unit("beta1", beta1)?;
                check_unit("beta2", beta2)?;
                if !epsilon.is_finite() || epsilon <= 0. {
                    return Err(SketchErr::InvalidHyperParam {
                        name: "epsilon",
                        value: epsilon,
                    });
                }

                Box::new(Adam::new(LinearModel::SIZE, lr, beta1, beta2, epsilon))
            }
        };

        Ok(optimizer)
    }

    fn resolve_schedule(&self, schedule: LrSchedule) -> Result<LrSchedule> {
        match schedule {
            LrSchedule::Constant => Ok(LrSchedule::Constant),
            LrSchedule::Decay { rate } => LrSchedule::decay(rate),
        }
    }

    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Checks that a hyper-parameter lies in `[0, 1)`.
fn check_unit(name: &'static str, value: f32) -> Result<()> {
    if !(0. ..1.).contains(&value) {
        return Err(SketchErr::InvalidHyperParam { name, value });
    }

    Ok(())
}
