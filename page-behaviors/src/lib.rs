//! # page-behaviors
//!
//! Typed state machines behind the interactive pieces of the income
//! awareness site. Nothing in this crate touches the DOM: every gesture is
//! turned into a command, fed through a pure transition function, and the
//! result describes what the page should look like afterwards. The
//! `page-behaviors-wasm` crate projects that description onto real elements.
//!
//! ## Controllers
//!
//! - [`nav`] - marks the navigation link for the current page
//! - [`counter`] - smoothstep tween for the animated statistics
//! - [`tabs`] - single-select tab/panel switcher with arrow-key movement
//! - [`drawer`] - expandable detail panels under each statistic
//! - [`flip`] - two-sided flip cards
//! - [`quiz`] - answer-once quiz questions with inline feedback
//! - [`share`] - native share, clipboard fallback and copy-link label
//!
//! ## Quick Start
//!
//! ```rust
//! use page_behaviors::tabs::{TabCommand, TabKey, TabState};
//!
//! let mut tabs = TabState::new(vec!["housing".into(), "health".into(), "food".into()]).unwrap();
//! assert_eq!(tabs.active_key(), "housing");
//!
//! let moved = tabs.apply(TabCommand::Key { from: 0, direction: TabKey::Previous }).unwrap();
//! assert_eq!(moved.active, 2);
//! assert!(tabs.panel_visible("food"));
//! ```

pub mod config;
pub mod counter;
pub mod drawer;
pub mod error;
pub mod flip;
pub mod keys;
pub mod nav;
pub mod quiz;
pub mod share;
pub mod tabs;

pub use config::BehaviorConfig;
pub use error::{BehaviorError, Result};
pub use keys::Key;

/// Crate version, surfaced by the wasm `version()` export.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render a boolean the way ARIA attributes expect it.
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_bool_matches_attribute_spelling() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }
}
