use std::time::Duration;

use regression::{optimization::LrSchedule, session::OptimizerConfig, SessionConfig};

use super::model::{AppConfig, OptimizerKind, ScheduleKind, SketchDraft};

const MAX_FPS: u64 = 240;

/// Converts a [`SketchDraft`] into the app's config.
///
/// # Errors
/// Returns a human-readable error if any value is invalid.
pub fn build(d: &SketchDraft) -> Result<AppConfig, String> {
    if d.fps == 0 || d.fps > MAX_FPS {
        return Err(format!("fps must be in 1..={MAX_FPS}, got {}", d.fps));
    }

    let schedule = match d.schedule {
        ScheduleKind::Constant => LrSchedule::Constant,
        ScheduleKind::Decay => LrSchedule::decay(d.decay_rate).map_err(|e| e.to_string())?,
    };

    let optimizer = match d.optimizer {
        OptimizerKind::GradientDescent => OptimizerConfig::GradientDescent,
        OptimizerKind::GradientDescentWithMomentum => {
            OptimizerConfig::GradientDescentWithMomentum { momentum: d.mu }
        }
        OptimizerKind::Adam => OptimizerConfig::Adam {
            beta1: d.b1,
            beta2: d.b2,
            epsilon: d.eps,
        },
    };

    let session = SessionConfig {
        learning_rate: d.lr,
        schedule,
        optimizer,
        seed: d.seed,
    };

    Ok(AppConfig {
        session,
        frame: Duration::from_secs(1) / d.fps as u32,
    })
}
