use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
};
use regression::{optimization::LrSchedule, PlayState};

use super::theme::Theme;
use crate::state::model::SketchView;

const POINT_GLYPH: &str = "●";

pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::title())
}

pub fn header<'a>(view: &'a SketchView) -> Paragraph<'a> {
    let (state, style) = match view.state {
        PlayState::Running => ("RUNNING", Theme::ok()),
        PlayState::Paused => ("PAUSED", Theme::warn()),
    };

    let line1 = Line::from(vec![
        Span::styled(
            "Gradient Descent Line Fitting",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(state, style),
    ]);

    let line2 = Line::from(vec![Span::styled(
        format!(
            "Points: {}  |  Steps: {}  |  Frames: {}  |  Seed: {}",
            view.points.len(),
            view.steps,
            view.frames,
            view.seed
        ),
        Theme::dim(),
    )]);

    Paragraph::new(vec![line1, line2])
        .block(panel(" OVERVIEW "))
        .wrap(Wrap { trim: true })
}

/// The points placed so far and the line fitted to them, in model space.
pub fn canvas<'a>(
    view: &'a SketchView,
    block: Block<'a>,
) -> Canvas<'a, impl Fn(&mut Context) + 'a> {
    let segment = visible_segment(view.slope as f64, view.intercept as f64);

    Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, 1.0])
        .y_bounds([0.0, 1.0])
        .paint(move |ctx| {
            if let Some(((x1, y1), (x2, y2))) = segment {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: Theme::ACCENT_CYAN,
                });
            }

            ctx.layer();

            for &(x, y) in &view.points {
                ctx.print(x, y, Span::styled(POINT_GLYPH, Theme::point()));
            }
        })
}

pub fn stats<'a>(view: &'a SketchView) -> Paragraph<'a> {
    let loss = view
        .loss
        .map_or_else(|| "-".to_string(), |loss| format!("{loss:.6}"));

    let schedule = match view.schedule {
        LrSchedule::Constant => "constant".to_string(),
        LrSchedule::Decay { rate } => format!("decay({rate})"),
    };

    let last_cell = view
        .last_cell
        .map_or_else(|| "-".to_string(), |(c, r)| format!("({c}, {r})"));

    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{name:<14}"), Theme::dim()),
            Span::styled(value, Theme::text()),
        ])
    };

    let lines = vec![
        field("learning rate", format!("{:.6}", view.learning_rate)),
        field("schedule", schedule),
        field("loss", loss),
        field("slope", format!("{:.4}", view.slope)),
        field("intercept", format!("{:.4}", view.intercept)),
        field(
            "live buffers",
            format!("{} (peak {})", view.live_buffers, view.peak_buffers),
        ),
        field("last point", last_cell),
    ];

    Paragraph::new(lines)
        .block(panel(" MODEL "))
        .wrap(Wrap { trim: true })
}

pub fn logs<'a>(view: &'a SketchView) -> Paragraph<'a> {
    let lines = view
        .logs
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), Theme::muted()),
                Span::raw(l.message.as_str()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(panel(" EVENTS "))
        .wrap(Wrap { trim: false })
}

pub fn hint() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("click", Theme::dim()),
        Span::styled("  add point    ", Theme::muted()),
        Span::styled("space", Theme::dim()),
        Span::styled("  play/pause    ", Theme::muted()),
        Span::styled("n", Theme::dim()),
        Span::styled("  next frame    ", Theme::muted()),
        Span::styled("r", Theme::dim()),
        Span::styled("  reset    ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  new game    ", Theme::muted()),
        Span::styled("esc", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
    .alignment(Alignment::Center)
}

/// The part of `y = slope * x + intercept` that crosses the unit square.
///
/// The canvas drops lines with an endpoint out of its bounds, so the line is clipped beforehand.
fn visible_segment(slope: f64, intercept: f64) -> Option<((f64, f64), (f64, f64))> {
    let (x_lo, x_hi) = if slope.abs() < f64::EPSILON {
        if !(0.0..=1.0).contains(&intercept) {
            return None;
        }
        (0.0, 1.0)
    } else {
        let a = -intercept / slope;
        let b = (1.0 - intercept) / slope;
        (a.min(b).max(0.0), a.max(b).min(1.0))
    };

    if !(x_lo <= x_hi) {
        return None;
    }

    let y = |x: f64| (slope * x + intercept).clamp(0.0, 1.0);
    Some(((x_lo, y(x_lo)), (x_hi, y(x_hi))))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_segment(got: Option<((f64, f64), (f64, f64))>, expected: ((f64, f64), (f64, f64))) {
        let ((a, b), (c, d)) = got.unwrap();
        let ((e, f), (g, h)) = expected;

        for (x, y) in [(a, e), (b, f), (c, g), (d, h)] {
            assert!((x - y).abs() < EPS, "{got:?} != {expected:?}");
        }
    }

    #[test]
    fn diagonal() {
        assert_segment(visible_segment(1.0, 0.0), ((0.0, 0.0), (1.0, 1.0)));
    }

    #[test]
    fn steep_line_is_clipped() {
        // y = 2x + 1 only touches the square at (0, 1)
        assert_segment(visible_segment(2.0, 1.0), ((0.0, 1.0), (0.0, 1.0)));

        assert_segment(visible_segment(4.0, -1.0), ((0.25, 0.0), (0.5, 1.0)));
    }

    #[test]
    fn negative_slope() {
        assert_segment(visible_segment(-1.0, 1.0), ((0.0, 1.0), (1.0, 0.0)));
    }

    #[test]
    fn flat_lines() {
        assert_segment(visible_segment(0.0, 0.5), ((0.0, 0.5), (1.0, 0.5)));
        assert!(visible_segment(0.0, 1.5).is_none());
    }

    #[test]
    fn line_outside_of_the_square() {
        assert!(visible_segment(1.0, 2.0).is_none());
        assert!(visible_segment(1.0, -3.0).is_none());
    }
}
