//! Single-select tabs.
//!
//! Tabs are identified by a key shared with their panel. Exactly one tab is
//! active at any time; the first tab in document order starts active.

use crate::error::{BehaviorError, Result};
use crate::keys::Key;

/// Direction of an arrow-key move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Previous,
}

impl TabKey {
    /// Right/Down move forward, Left/Up move back. Other keys are not tab moves.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowRight | Key::ArrowDown => Some(TabKey::Next),
            Key::ArrowLeft | Key::ArrowUp => Some(TabKey::Previous),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabCommand {
    /// A tab was clicked.
    Click(usize),
    /// An arrow key was pressed while the tab at `from` had focus.
    Key { from: usize, direction: TabKey },
    /// Activate by key (used for the initial selection).
    Select(String),
}

/// What changed after a command; the projection rewrites every tab and panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTransition {
    pub active: usize,
    /// Tab control that should receive focus.
    pub focus: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    keys: Vec<String>,
    active: usize,
}

impl TabState {
    /// Tabs in document order. The first one starts active.
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(BehaviorError::EmptyTablist);
        }
        Ok(Self { keys, active: 0 })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_key(&self) -> &str {
        &self.keys[self.active]
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// `aria-selected` for the tab at `index`.
    pub fn is_selected(&self, index: usize) -> bool {
        index == self.active
    }

    /// Panels are hidden unless their key equals the active key.
    pub fn panel_visible(&self, panel_key: &str) -> bool {
        panel_key == self.active_key()
    }

    fn step(&self, from: usize, key: TabKey) -> usize {
        let n = self.keys.len();
        let from = from.min(n - 1);
        match key {
            TabKey::Next => (from + 1) % n,
            TabKey::Previous => (from + n - 1) % n,
        }
    }

    pub fn apply(&mut self, command: TabCommand) -> Result<TabTransition> {
        let transition = match command {
            TabCommand::Click(index) => {
                let key = self
                    .keys
                    .get(index)
                    .ok_or_else(|| BehaviorError::UnknownTab(index.to_string()))?;
                tracing::debug!(tab = %key, "tab clicked");
                TabTransition {
                    active: index,
                    focus: None,
                }
            }
            TabCommand::Key { from, direction } => {
                let next = self.step(from, direction);
                TabTransition {
                    active: next,
                    focus: Some(next),
                }
            }
            TabCommand::Select(key) => {
                let index = self
                    .keys
                    .iter()
                    .position(|k| *k == key)
                    .ok_or(BehaviorError::UnknownTab(key))?;
                TabTransition {
                    active: index,
                    focus: None,
                }
            }
        };
        self.active = transition.active;
        Ok(transition)
    }
}
