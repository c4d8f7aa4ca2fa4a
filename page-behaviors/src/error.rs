//! Error types shared by the core state machines and the DOM bindings.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BehaviorError>;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The inline configuration block was not valid JSON for [`crate::BehaviorConfig`].
    #[error("invalid page-behaviors config: {0}")]
    Config(#[from] serde_json::Error),

    /// A `data-count` attribute that does not hold a finite number.
    #[error("counter target {raw:?} is not a number")]
    InvalidCounterTarget { raw: String },

    /// A tablist was found but holds no tabs.
    #[error("tablist has no tabs")]
    EmptyTablist,

    /// A tab key that is not part of the tablist.
    #[error("unknown tab {0:?}")]
    UnknownTab(String),

    /// Global browser object (`window`, `document`, ...) is unavailable.
    #[error("{0} is not available in this context")]
    MissingGlobal(&'static str),

    /// A DOM call threw. Carries the stringified JS value.
    #[error("DOM call failed: {0}")]
    Dom(String),
}
