use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Command, EventLog};
use crate::{
    arch::{LinearModel, loss::Mse},
    buffers::BufferArena,
    coords::{Point, Surface},
    dataset::PointSet,
    optimization::{LrSchedule, Optimizer},
    training::{MIN_POINTS, StepReport, Trainer},
};

const CONTROLS: &[&str] = &[
    "Controls:",
    "\"SPACE\" - Toggle Play/Pause",
    "    \"N\" - Next frame (when paused)",
    "    \"R\" - Reset world",
    "    \"Q\" - New game",
];

/// Whether frames advance on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

/// What happened during a frame and what the surface should do about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// The training step taken, if any.
    pub step: Option<StepReport>,
    /// The loss of the current line over the current points.
    pub loss: Option<f32>,
    /// Whether the surface has to be drawn again.
    pub redraw: bool,
}

impl FrameReport {
    fn idle() -> Self {
        Self {
            step: None,
            loss: None,
            redraw: false,
        }
    }

    pub fn trained(&self) -> bool {
        self.step.is_some()
    }
}

/// The whole state of the sketch: the points placed so far, the line fitted to them and the
/// playback state.
///
/// Everything in it is determined by the session seed and the user's actions since the last new
/// game.
pub struct Session {
    seeds: StdRng,
    seed: u64,
    state: PlayState,
    model: LinearModel,
    points: PointSet,
    trainer: Trainer<Box<dyn Optimizer>, Mse>,
    arena: BufferArena,
    events: EventLog,
    loss: Option<f32>,
    frames: u64,
}

impl Session {
    /// Creates a new running `Session`, use a `SessionBuilder` to build one from a config.
    ///
    /// # Arguments
    /// * `trainer` - Fits the line on every frame.
    /// * `seed` - The seed of the first game.
    /// * `seeds` - The source of the seeds for the following games.
    pub(super) fn new(
        trainer: Trainer<Box<dyn Optimizer>, Mse>,
        seed: u64,
        seeds: StdRng,
    ) -> Self {
        let mut session = Self {
            seeds,
            seed,
            state: PlayState::Running,
            model: LinearModel::new(0., 0.),
            points: PointSet::new(),
            trainer,
            arena: BufferArena::new(),
            events: EventLog::new(),
            loss: None,
            frames: 0,
        };

        session.announce_controls();
        session.init();
        session
    }

    /// Places a new point where the user clicked.
    ///
    /// # Arguments
    /// * `surface` - The drawing surface's current dimensions.
    /// * `px` - The horizontal screen position of the click.
    /// * `py` - The vertical screen position of the click.
    ///
    /// # Returns
    /// The point added, in model space.
    pub fn click(&mut self, surface: &Surface, px: f32, py: f32) -> Point {
        let point = surface.normalize(px, py);
        self.add_point(point);
        point
    }

    /// Appends a point given in model space.
    pub fn add_point(&mut self, point: Point) {
        debug!(x = point.x, y = point.y; "point added");
        self.points.push(point);
    }

    /// The frame callback, trains once and asks for a redraw while running, does nothing while
    /// paused.
    pub fn frame(&mut self) -> FrameReport {
        match self.state {
            PlayState::Running => self.advance(),
            PlayState::Paused => FrameReport::idle(),
        }
    }

    /// Applies a control action.
    ///
    /// # Returns
    /// The report of the frame the command forced, if any.
    pub fn apply(&mut self, command: Command) -> FrameReport {
        match command {
            Command::TogglePlay => {
                self.toggle_play();
                FrameReport::idle()
            }
            Command::Step => self.next_frame(),
            Command::Reset => self.reset(false),
            Command::NewGame => self.reset(true),
        }
    }

    /// Pauses or resumes the animation.
    pub fn toggle_play(&mut self) {
        match self.state {
            PlayState::Running => {
                self.state = PlayState::Paused;
                self.events.info("Paused");
            }
            PlayState::Paused => {
                self.state = PlayState::Running;
                self.events.info("Resume");
            }
        }
    }

    /// Moves forward exactly one frame, only while paused.
    pub fn next_frame(&mut self) -> FrameReport {
        if self.state == PlayState::Running {
            return FrameReport::idle();
        }

        let report = self.advance();
        self.events.info("Next frame");
        report
    }

    /// Resets the sketch to its initial state.
    ///
    /// A soft reset draws the parameters again from the current seed, so it always lands on the
    /// same line. A hard one starts a new game: a fresh seed and no points.
    ///
    /// The sketch is redrawn but no training step is taken, so the reported line is the freshly
    /// drawn one.
    ///
    /// # Arguments
    /// * `hard` - Whether a new game should be started.
    pub fn reset(&mut self, hard: bool) -> FrameReport {
        if hard {
            self.seed = self.seeds.random();
            self.points.clear();
            self.announce_controls();
        }

        self.init();
        self.events.info(if hard { "New game" } else { "Reset world" });

        FrameReport {
            step: None,
            loss: self.loss,
            redraw: true,
        }
    }

    fn init(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.model = LinearModel::random(&mut rng);
        self.trainer.reset();

        self.loss = if self.points.len() >= MIN_POINTS {
            self.trainer
                .evaluate(&self.model, &self.points, &self.arena.scope())
                .unwrap_or_else(|e| {
                    warn!("cannot evaluate the model: {e}");
                    None
                })
        } else {
            None
        };

        debug!(
            seed = self.seed,
            slope = self.model.slope(),
            intercept = self.model.intercept();
            "parameters initialized"
        );
    }

    fn advance(&mut self) -> FrameReport {
        let step = {
            let scope = self.arena.scope();
            self.trainer
                .step(&mut self.model, &self.points, &scope)
                .unwrap_or_else(|e| {
                    warn!("skipping training step: {e}");
                    None
                })
        };
        debug_assert_eq!(self.arena.live(), 0);

        self.frames += 1;
        self.loss = step.map(|s| s.loss);

        FrameReport {
            step,
            loss: self.loss,
            redraw: true,
        }
    }

    fn announce_controls(&mut self) {
        for line in CONTROLS {
            self.events.info(*line);
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlayState::Paused
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The loss of the last frame, `None` while there are too few points to train.
    pub fn loss(&self) -> Option<f32> {
        self.loss
    }

    pub fn learning_rate(&self) -> f32 {
        self.trainer.learning_rate()
    }

    pub fn schedule(&self) -> LrSchedule {
        self.trainer.schedule()
    }

    /// The amount of training steps since the last reset.
    pub fn steps(&self) -> u64 {
        self.trainer.steps()
    }

    /// The amount of frames computed since the session started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The amount of numerical buffers currently alive.
    pub fn live_buffers(&self) -> usize {
        self.arena.live()
    }

    pub fn peak_buffers(&self) -> usize {
        self.arena.peak()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
