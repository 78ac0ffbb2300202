use ratatui::{widgets::Block, Frame};

use crate::state::SketchState;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI, and records where the canvas ended up so clicks can be mapped onto it.
pub fn draw(f: &mut Frame, sketch: &mut SketchState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, hint_area) = layout::vertical(area);
    let (canvas_area, side_area) = layout::body(body_area);
    let (stats_area, logs_area) = layout::side(side_area);

    let canvas_block = widgets::panel(" CANVAS ");
    sketch.set_canvas(canvas_block.inner(canvas_area));

    let view = sketch.view();

    f.render_widget(widgets::header(&view), header_area);
    f.render_widget(widgets::canvas(&view, canvas_block), canvas_area);
    f.render_widget(widgets::stats(&view), stats_area);
    f.render_widget(widgets::logs(&view), logs_area);
    f.render_widget(widgets::hint(), hint_area);
}
