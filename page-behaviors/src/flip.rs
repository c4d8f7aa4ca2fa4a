//! Two-sided flip cards.

/// Flipped state of one card, toggled by its button. Starts unflipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipCard {
    flipped: bool,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Button clicked. Returns the new state for `is-flipped` / `aria-expanded`.
    pub fn toggle(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inverts_each_time() {
        let mut card = FlipCard::new();
        assert!(!card.is_flipped());
        assert!(card.toggle());
        assert!(!card.toggle());
        assert!(card.toggle());
    }
}
