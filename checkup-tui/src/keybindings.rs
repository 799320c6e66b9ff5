//! Keybindings system for checkup TUI.
//!
//! Provides vim-style keybindings with global and view-specific layers.
//! View-specific bindings override global bindings when defined.
//! Keys typed while editing a signature field bypass this table.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::views::View;

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Quit,
    NavigateUp,
    NavigateDown,
    Select,
    Back,
    OpenHistory,

    // Assessment
    Start,
    AnswerYes,
    AnswerNo,
    FillToday,
}

/// Keybindings configuration with global and view-specific layers.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Global keybindings that apply to all views.
    pub global: HashMap<KeyEvent, Action>,
    /// View-specific keybindings that override global bindings.
    pub view_specific: HashMap<View, HashMap<KeyEvent, Action>>,
}

impl KeyBindings {
    /// Resolve a key press to an action using global bindings only.
    pub fn resolve_global(&self, key: KeyEvent) -> Option<Action> {
        self.global.get(&key).copied()
    }

    /// Resolve a key press to an action, view-specific takes precedence over global.
    pub fn resolve(&self, key: KeyEvent, current_view: &View) -> Option<Action> {
        if let Some(view_bindings) = self.view_specific.get(current_view)
            && let Some(action) = view_bindings.get(&key)
        {
            return Some(*action);
        }

        self.resolve_global(key)
    }

    /// Add a view-specific keybinding.
    pub fn add_view_binding(&mut self, view: View, key: KeyEvent, action: Action) {
        self.view_specific
            .entry(view)
            .or_default()
            .insert(key, action);
    }
}

/// Bindings active in every view.
const GLOBAL_BINDINGS: &[(KeyCode, Action)] = &[
    (KeyCode::Char('j'), Action::NavigateDown),
    (KeyCode::Char('k'), Action::NavigateUp),
    (KeyCode::Down, Action::NavigateDown),
    (KeyCode::Up, Action::NavigateUp),
    (KeyCode::Enter, Action::Select),
    (KeyCode::Esc, Action::Back),
    (KeyCode::Char('q'), Action::Quit),
    (KeyCode::Char('h'), Action::OpenHistory),
];

/// Form-editing keys, only meaningful on the live assessment.
const ASSESSMENT_BINDINGS: &[(KeyCode, Action)] = &[
    (KeyCode::Char('s'), Action::Start),
    (KeyCode::Char('y'), Action::AnswerYes),
    (KeyCode::Char('n'), Action::AnswerNo),
    (KeyCode::Char('t'), Action::FillToday),
];

impl Default for KeyBindings {
    fn default() -> Self {
        let global = GLOBAL_BINDINGS
            .iter()
            .map(|&(code, action)| (plain(code), action))
            .collect();

        let mut bindings = Self {
            global,
            view_specific: HashMap::new(),
        };
        for &(code, action) in ASSESSMENT_BINDINGS {
            bindings.add_view_binding(View::Assessment, plain(code), action);
        }
        bindings
    }
}

/// A key press without modifiers.
fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: char) -> KeyEvent {
        plain(KeyCode::Char(c))
    }

    #[test]
    fn every_global_binding_resolves_in_every_view() {
        let bindings = KeyBindings::default();
        for view in [View::Assessment, View::History, View::Snapshot(0)] {
            for &(code, action) in GLOBAL_BINDINGS {
                assert_eq!(
                    bindings.resolve(plain(code), &view),
                    Some(action),
                    "{code:?} in {view:?}"
                );
            }
        }
    }

    #[test]
    fn form_keys_are_scoped_to_assessment_view() {
        let bindings = KeyBindings::default();
        for &(code, action) in ASSESSMENT_BINDINGS {
            assert_eq!(bindings.resolve(plain(code), &View::Assessment), Some(action));
            assert_eq!(bindings.resolve(plain(code), &View::History), None);
            assert_eq!(bindings.resolve(plain(code), &View::Snapshot(3)), None);
        }
    }

    #[test]
    fn modified_keys_are_not_bound() {
        let bindings = KeyBindings::default();
        let shifted = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::ALT);
        assert_eq!(bindings.resolve(shifted, &View::Assessment), None);
    }

    #[test]
    fn view_binding_shadows_global_only_in_that_view() {
        let mut bindings = KeyBindings::default();
        bindings.add_view_binding(View::History, ch('j'), Action::Select);

        assert_eq!(bindings.resolve(ch('j'), &View::History), Some(Action::Select));
        assert_eq!(
            bindings.resolve(ch('j'), &View::Assessment),
            Some(Action::NavigateDown)
        );
        assert_eq!(bindings.resolve_global(ch('j')), Some(Action::NavigateDown));
    }

    #[test]
    fn unmapped_keys_resolve_to_nothing() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.resolve(ch('z'), &View::Assessment), None);
        assert_eq!(bindings.resolve_global(plain(KeyCode::F(1))), None);
    }
}
