//! Keybindings: defaults and key-to-action resolution.
//!
//! Printable characters are never bound here; they belong to whichever
//! filter input has focus. Everything else goes through [`Keymap::resolve`].

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Semantic keyboard actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Focus the next filter input.
    NextField,
    /// Focus the previous filter input.
    PrevField,
    /// Remove the last character of the focused input.
    DeleteChar,
    /// Highlight the row above.
    MoveUp,
    /// Highlight the row below.
    MoveDown,
    PageUp,
    PageDown,
    /// Fetch the user list again.
    Refetch,
    /// Show or hide the help overlay.
    ToggleHelp,
}

/// Mapping from `(KeyModifiers, KeyCode)` to [`KeyAction`].
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Esc), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Tab), KeyAction::NextField);
        // Shift+Tab is BackTab in crossterm; some terminals also report SHIFT
        bindings.insert((M::NONE, BackTab), KeyAction::PrevField);
        bindings.insert((M::SHIFT, BackTab), KeyAction::PrevField);
        bindings.insert((M::NONE, Backspace), KeyAction::DeleteChar);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::CONTROL, Char('r')), KeyAction::Refetch);
        bindings.insert((M::NONE, F(1)), KeyAction::ToggleHelp);
        Self { bindings }
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// All bindings, sorted by action label and then key label.
    pub fn all_bindings(&self) -> Vec<(String, KeyAction)> {
        let mut out: Vec<(String, KeyAction)> = self
            .bindings
            .iter()
            .map(|((mods, code), action)| (Self::format_key(*mods, *code), *action))
            .collect();
        out.sort_by(|a, b| {
            format_action(a.1)
                .cmp(format_action(b.1))
                .then_with(|| a.0.cmp(&b.0))
        });
        out.dedup();
        out
    }

    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            BackTab => "Shift+Tab".to_string(),
            Backspace => "Backspace".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            F(n) => format!("F{}", n),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::NextField => "Next filter",
        KeyAction::PrevField => "Previous filter",
        KeyAction::DeleteChar => "Delete character",
        KeyAction::MoveUp => "Move up",
        KeyAction::MoveDown => "Move down",
        KeyAction::PageUp => "Page up",
        KeyAction::PageDown => "Page down",
        KeyAction::Refetch => "Reload users",
        KeyAction::ToggleHelp => "Toggle help",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_defaults_with_modifiers() {
        let km = Keymap::default();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(km.resolve(&ctrl_r), Some(KeyAction::Refetch));
        let plain_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(km.resolve(&plain_r), None);
        let shift_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(km.resolve(&shift_tab), Some(KeyAction::PrevField));
    }

    #[test]
    fn listing_merges_duplicate_labels() {
        let km = Keymap::default();
        let prev: Vec<_> = km
            .all_bindings()
            .into_iter()
            .filter(|(_, a)| *a == KeyAction::PrevField)
            .collect();
        assert_eq!(prev.len(), 1);
        assert_eq!(prev[0].0, "Shift+Tab");
    }
}
