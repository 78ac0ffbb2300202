use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use regression::Command;

/// What the run loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Command(Command),
    Click { column: u16, row: u16 },
    Resize,
}

/// Translates a terminal event into an [`Action`].
pub fn translate(event: Event) -> Action {
    match event {
        Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(k),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Action::Click { column, row },
        Event::Resize(..) => Action::Resize,
        _ => Action::None,
    }
}

fn handle_key(k: KeyEvent) -> Action {
    match k.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) => Command::from_key_code(c as u32).map_or(Action::None, Action::Command),
        _ => Action::None,
    }
}
