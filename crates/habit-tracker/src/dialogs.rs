//! Modal dialogs as small key-driven state machines
//!
//! A dialog never touches the tracker. It consumes keys until it yields a
//! value or is cancelled, and the app loop turns that value into a command.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use libhabit_core::Color;

/// Result of feeding one key to a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult<T> {
    Pending,
    Done(T),
    Cancelled,
}

/// Add-habit form: a name field and a color selector
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub name: String,
    pub color: Color,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Enter` submits a non-empty name; `Left`/`Right` or `Tab` cycle colors
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<(String, Color)> {
        if key.kind == KeyEventKind::Release {
            return DialogResult::Pending;
        }
        match key.code {
            KeyCode::Esc => DialogResult::Cancelled,
            KeyCode::Enter => {
                let name = self.name.trim();
                if name.is_empty() {
                    DialogResult::Pending
                } else {
                    DialogResult::Done((name.to_string(), self.color))
                }
            }
            KeyCode::Backspace => {
                self.name.pop();
                DialogResult::Pending
            }
            KeyCode::Right | KeyCode::Tab => {
                self.color = self.color.next();
                DialogResult::Pending
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.color = self.color.prev();
                DialogResult::Pending
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.name.push(c);
                DialogResult::Pending
            }
            _ => DialogResult::Pending,
        }
    }
}

/// Pick a habit to remove from a list of names
#[derive(Debug, Clone)]
pub struct RemovePicker {
    pub names: Vec<String>,
    pub selected: usize,
}

impl RemovePicker {
    /// `None` when there is nothing to remove
    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        Some(Self { names, selected: 0 })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        if key.kind == KeyEventKind::Release {
            return DialogResult::Pending;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => DialogResult::Cancelled,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                DialogResult::Pending
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.names.len() {
                    self.selected += 1;
                }
                DialogResult::Pending
            }
            KeyCode::Enter => DialogResult::Done(self.names[self.selected].clone()),
            _ => DialogResult::Pending,
        }
    }
}

/// Yes/no confirmation before a removal
#[derive(Debug, Clone)]
pub struct ConfirmRemove {
    pub name: String,
}

impl ConfirmRemove {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn handle_key(&self, key: KeyEvent) -> DialogResult<String> {
        if key.kind == KeyEventKind::Release {
            return DialogResult::Pending;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Done(self.name.clone()),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogResult::Cancelled,
            _ => DialogResult::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut AddForm, s: &str) {
        for c in s.chars() {
            assert_eq!(form.handle_key(press(KeyCode::Char(c))), DialogResult::Pending);
        }
    }

    #[test]
    fn test_add_form_submit() {
        let mut form = AddForm::new();
        type_str(&mut form, "yogx");
        form.handle_key(press(KeyCode::Backspace));
        type_str(&mut form, "a");
        form.handle_key(press(KeyCode::Right));
        form.handle_key(press(KeyCode::Right));

        assert_eq!(
            form.handle_key(press(KeyCode::Enter)),
            DialogResult::Done(("yoga".to_string(), Color::Green))
        );
    }

    #[test]
    fn test_add_form_ignores_empty_name() {
        let mut form = AddForm::new();
        type_str(&mut form, "  ");
        assert_eq!(form.handle_key(press(KeyCode::Enter)), DialogResult::Pending);
        assert_eq!(form.handle_key(press(KeyCode::Esc)), DialogResult::Cancelled);
    }

    #[test]
    fn test_add_form_color_wraps_left() {
        let mut form = AddForm::new();
        form.handle_key(press(KeyCode::Left));
        assert_eq!(form.color, Color::LightGreen);
    }

    #[test]
    fn test_remove_picker() {
        assert!(RemovePicker::new(vec![]).is_none());

        let mut picker = RemovePicker::new(vec!["a".into(), "b".into()]).unwrap();
        picker.handle_key(press(KeyCode::Up));
        assert_eq!(picker.selected, 0);
        picker.handle_key(press(KeyCode::Down));
        picker.handle_key(press(KeyCode::Down));
        assert_eq!(picker.selected, 1);
        assert_eq!(picker.handle_key(press(KeyCode::Enter)), DialogResult::Done("b".to_string()));
    }

    #[test]
    fn test_confirm() {
        let confirm = ConfirmRemove::new("read".into());
        assert_eq!(confirm.handle_key(press(KeyCode::Char('x'))), DialogResult::Pending);
        assert_eq!(confirm.handle_key(press(KeyCode::Char('n'))), DialogResult::Cancelled);
        assert_eq!(confirm.handle_key(press(KeyCode::Char('y'))), DialogResult::Done("read".to_string()));
    }
}
