//! Key bindings for the grid screen

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libhabit_core::Command;

/// What a key press on the grid asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Command),
    OpenAddDialog,
    OpenRemoveDialog,
}

/// Map a key on the grid screen; `None` for unbound keys
pub fn grid_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Dispatch(Command::Quit));
    }

    let command = match key.code {
        KeyCode::Char('h') | KeyCode::Left => Command::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right => Command::MoveRight,
        KeyCode::Char('k') | KeyCode::Up => Command::MoveUp,
        KeyCode::Char('j') | KeyCode::Down => Command::MoveDown,
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => Command::Toggle,
        KeyCode::Char('?') => Command::ShowHelp,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('a') => return Some(Action::OpenAddDialog),
        KeyCode::Char('d') => return Some(Action::OpenRemoveDialog),
        _ => return None,
    };
    Some(Action::Dispatch(command))
}

/// Help text listing the bindings above
pub const HELP_TEXT: &str = "\
h, j, k, l / arrows   Navigate
Space, x, Enter       Toggle habit for the day
a                     Add a habit
d                     Remove a habit
?                     Show this help
q, Esc, Ctrl-C        Quit";
