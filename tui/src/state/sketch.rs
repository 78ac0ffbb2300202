use ratatui::layout::Rect;
use regression::{Command, FrameReport, Point, Session, Surface};

use super::model::SketchView;

const VISIBLE_LOGS: usize = 8;

/// Binds a [`Session`] to the canvas it is drawn on.
pub struct SketchState {
    session: Session,
    canvas: Rect,
}

impl SketchState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            canvas: Rect::default(),
        }
    }

    /// Updates the terminal area points are drawn in, called on every draw.
    pub fn set_canvas(&mut self, canvas: Rect) {
        self.canvas = canvas;
    }

    /// The canvas dimensions in cells, `None` while it has no area.
    pub fn surface(&self) -> Option<Surface> {
        Surface::new(self.canvas.width as f32, self.canvas.height as f32).ok()
    }

    /// Places a point on the clicked cell.
    ///
    /// # Returns
    /// The point added, or `None` if the click fell outside of the canvas.
    pub fn click(&mut self, column: u16, row: u16) -> Option<Point> {
        let surface = self.surface()?;

        let inside = (self.canvas.left()..self.canvas.right()).contains(&column)
            && (self.canvas.top()..self.canvas.bottom()).contains(&row);
        if !inside {
            return None;
        }

        // Aim at the center of the cell.
        let px = (column - self.canvas.x) as f32 + 0.5;
        let py = (row - self.canvas.y) as f32 + 0.5;

        Some(self.session.click(&surface, px, py))
    }

    pub fn apply(&mut self, command: Command) -> FrameReport {
        self.session.apply(command)
    }

    pub fn frame(&mut self) -> FrameReport {
        self.session.frame()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a snapshot used by the UI.
    pub fn view(&self) -> SketchView {
        let session = self.session();
        let model = session.model();

        let last_cell = self.surface().zip(session.points().last()).map(|(s, p)| {
            let (px, py) = s.denormalize(*p);
            (
                self.canvas.x.saturating_add(px as u16),
                self.canvas.y.saturating_add(py as u16),
            )
        });

        SketchView {
            state: session.state(),
            seed: session.seed(),
            frames: session.frames(),
            steps: session.steps(),
            learning_rate: session.learning_rate(),
            schedule: session.schedule(),
            loss: session.loss(),
            live_buffers: session.live_buffers(),
            peak_buffers: session.peak_buffers(),
            slope: model.slope(),
            intercept: model.intercept(),
            points: session
                .points()
                .iter()
                .map(|p| (p.x as f64, p.y as f64))
                .collect(),
            last_cell,
            logs: session.events().tail(VISIBLE_LOGS).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use regression::{SessionBuilder, SessionConfig};

    use super::*;

    fn sketch() -> SketchState {
        let config = SessionConfig {
            seed: Some(1),
            ..Default::default()
        };

        let mut sketch = SketchState::new(SessionBuilder::new().build(&config).unwrap());
        sketch.set_canvas(Rect::new(2, 1, 40, 20));
        sketch
    }

    #[test]
    fn clicks_inside_the_canvas() {
        let mut sketch = sketch();

        let point = sketch.click(2, 20).unwrap();

        assert!((point.x - 0.5 / 40.).abs() < 1e-6);
        assert!((point.y - 0.5 / 20.).abs() < 1e-6);
        assert_eq!(sketch.session().points().len(), 1);
    }

    #[test]
    fn clicks_outside_the_canvas_are_ignored() {
        let mut sketch = sketch();

        assert!(sketch.click(1, 5).is_none());
        assert!(sketch.click(42, 5).is_none());
        assert!(sketch.click(10, 21).is_none());
        assert!(sketch.session().points().is_empty());
    }

    #[test]
    fn no_canvas_no_points() {
        let mut sketch = sketch();
        sketch.set_canvas(Rect::new(0, 0, 0, 0));

        assert!(sketch.click(0, 0).is_none());
    }

    #[test]
    fn last_point_maps_back_to_its_cell() {
        let mut sketch = sketch();
        sketch.click(17, 9);

        assert_eq!(sketch.view().last_cell, Some((17, 9)));
    }

    #[test]
    fn view_follows_the_session() {
        let mut sketch = sketch();
        sketch.click(5, 5);
        sketch.click(30, 15);
        sketch.frame();

        let view = sketch.view();
        assert_eq!(view.points.len(), 2);
        assert_eq!(view.steps, 1);
        assert_eq!(view.live_buffers, 0);
        assert!(view.loss.is_some());
        assert!(view.logs.len() <= VISIBLE_LOGS);
    }
}
