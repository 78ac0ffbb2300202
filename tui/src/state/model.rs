use regression::{optimization::LrSchedule, session::LogLine, PlayState};

/// Full snapshot rendered by the TUI.
#[derive(Debug, Clone)]
pub struct SketchView {
    pub state: PlayState,
    pub seed: u64,
    pub frames: u64,
    pub steps: u64,
    pub learning_rate: f32,
    pub schedule: LrSchedule,
    pub loss: Option<f32>,
    pub live_buffers: usize,
    pub peak_buffers: usize,
    pub slope: f32,
    pub intercept: f32,
    /// The points placed so far, in model space.
    pub points: Vec<(f64, f64)>,
    /// The cell the last point falls on, on the current canvas.
    pub last_cell: Option<(u16, u16)>,
    pub logs: Vec<LogLine>,
}
