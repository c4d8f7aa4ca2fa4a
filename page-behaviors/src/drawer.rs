//! Expandable detail drawers under each statistic.

use crate::keys::Key;

/// A gesture on a stat container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerCommand {
    Click,
    Key(Key),
}

/// What the binding should do with the originating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    /// Unrelated key; leave the event alone.
    None,
    /// State flipped; write `open` and `aria-expanded`.
    Toggled { open: bool },
    /// Enter/Space: suppress the default action and re-dispatch as a click.
    ActivateByKey,
}

/// Open/closed state of one drawer. Drawers start closed and never affect
/// each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn apply(&mut self, command: DrawerCommand) -> DrawerEffect {
        match command {
            DrawerCommand::Click => DrawerEffect::Toggled {
                open: self.toggle(),
            },
            DrawerCommand::Key(key) if key.is_activation() => DrawerEffect::ActivateByKey,
            DrawerCommand::Key(_) => DrawerEffect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_closed_and_toggles() {
        let mut drawer = Drawer::new();
        assert!(!drawer.is_open());
        assert_eq!(drawer.apply(DrawerCommand::Click), DrawerEffect::Toggled { open: true });
        assert_eq!(drawer.apply(DrawerCommand::Click), DrawerEffect::Toggled { open: false });
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_activation_keys_route_through_click() {
        let mut drawer = Drawer::new();
        assert_eq!(drawer.apply(DrawerCommand::Key(Key::Enter)), DrawerEffect::ActivateByKey);
        assert_eq!(drawer.apply(DrawerCommand::Key(Key::Space)), DrawerEffect::ActivateByKey);
        // the key itself does not toggle; the re-dispatched click does
        assert!(!drawer.is_open());
        assert_eq!(drawer.apply(DrawerCommand::Key(Key::ArrowUp)), DrawerEffect::None);
    }

    #[test]
    fn test_drawers_are_independent() {
        let mut a = Drawer::new();
        let b = Drawer::new();
        a.toggle();
        assert!(a.is_open());
        assert!(!b.is_open());
    }
}
