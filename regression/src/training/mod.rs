mod trainer;

pub use trainer::{MIN_POINTS, StepReport, Trainer};
