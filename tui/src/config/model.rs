use std::time::Duration;

use regression::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    GradientDescent,
    Adam,
    GradientDescentWithMomentum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleKind {
    Constant,
    Decay,
}

/// Sketch config parsed from a JSON file.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchDraft {
    pub lr: f32,
    pub schedule: ScheduleKind,
    pub decay_rate: f32,
    pub optimizer: OptimizerKind,
    pub mu: f32,
    pub b1: f32,
    pub b2: f32,
    pub eps: f32,
    pub seed: Option<u64>,
    pub fps: u64,
}

impl Default for SketchDraft {
    fn default() -> Self {
        Self {
            lr: 0.2,
            schedule: ScheduleKind::Constant,
            decay_rate: 0.001,
            optimizer: OptimizerKind::GradientDescent,
            mu: 0.9,
            b1: 0.9,
            b2: 0.999,
            eps: 1e-8,
            seed: None,
            fps: 60,
        }
    }
}

/// Everything the app needs to start.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// The time between two frame callbacks.
    pub frame: Duration,
}
