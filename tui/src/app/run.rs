use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use regression::SessionBuilder;

use super::input::{self, Action};
use crate::{config::model::AppConfig, state::SketchState, ui};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

/// Runs the sketch until the user quits.
///
/// Events are handled as soon as they arrive, while the session's frame callback fires once
/// every `config.frame`.
///
/// # Errors
/// Returns an error if the session config is invalid or terminal setup or rendering fails.
pub fn run(config: AppConfig) -> Result<()> {
    let session = SessionBuilder::new().build(&config.session)?;
    let mut sketch = SketchState::new(session);
    info!("sketch started with seed {}", sketch.session().seed());

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    terminal.draw(|f| ui::draw(f, &mut sketch))?;

    let mut next_frame = Instant::now() + config.frame;

    loop {
        let timeout = next_frame.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            match input::translate(event::read()?) {
                Action::Quit => break,
                Action::Command(command) => {
                    if sketch.apply(command).redraw {
                        terminal.draw(|f| ui::draw(f, &mut sketch))?;
                    }
                }
                Action::Click { column, row } => {
                    sketch.click(column, row);
                }
                Action::Resize => {
                    terminal.draw(|f| ui::draw(f, &mut sketch))?;
                }
                Action::None => {}
            }
            continue;
        }

        next_frame = Instant::now() + config.frame;
        if sketch.frame().redraw {
            terminal.draw(|f| ui::draw(f, &mut sketch))?;
        }
    }

    terminal.show_cursor()?;
    info!("sketch closed after {} frames", sketch.session().frames());
    Ok(())
}
