//! Stack-based view navigation for checkup TUI.
//!
//! The assessment form is the root; the history list and snapshot detail
//! are drilled into and left with Esc.

/// Available views in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Assessment,
    History,
    /// Read-only detail of the history entry at this index.
    Snapshot(usize),
}

/// Stack-based view navigation.
///
/// Maintains the current view and a history stack for back navigation.
#[derive(Debug, Clone)]
pub struct ViewStack {
    pub current: View,
    pub history: Vec<View>,
}

impl ViewStack {
    /// Creates a new ViewStack starting at the assessment form.
    pub fn new() -> Self {
        Self {
            current: View::Assessment,
            history: Vec::new(),
        }
    }

    /// Push new view, saving current to history. Pushing the current view
    /// again is a no-op.
    pub fn push(&mut self, view: View) {
        if self.current == view {
            return;
        }
        self.history
            .push(std::mem::replace(&mut self.current, view));
    }

    /// Pop to previous view, returns false if at root.
    pub fn pop(&mut self) -> bool {
        if let Some(prev) = self.history.pop() {
            self.current = prev;
            true
        } else {
            false
        }
    }
}

impl Default for ViewStack {
    fn default() -> Self {
        Self::new()
    }
}
