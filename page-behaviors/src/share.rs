//! Share and copy-link actions.
//!
//! Sharing prefers the platform's native share sheet. Without one, the page
//! URL is copied and a confirmation is shown. Copying itself tries the
//! async clipboard first and a temporary text field plus the legacy copy
//! command second.

use crate::config::ShareConfig;

/// Payload handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SharePlan {
    /// Call the native share sheet; failures and cancellation are ignored.
    Native(ShareData),
    /// Copy the URL, then show `message` in a blocking dialog.
    CopyThenConfirm { url: String, message: String },
}

/// Decide how a share click is handled. Only a missing capability leads to
/// the clipboard path; a native share that fails does not.
pub fn plan_share(native_available: bool, title: &str, url: &str, config: &ShareConfig) -> SharePlan {
    if native_available {
        SharePlan::Native(ShareData {
            title: title.to_string(),
            text: config.text.clone(),
            url: url.to_string(),
        })
    } else {
        SharePlan::CopyThenConfirm {
            url: url.to_string(),
            message: config.fallback_message.clone(),
        }
    }
}

/// Which copy tier ended up working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    LegacyCommand,
    Failed,
}

impl CopyOutcome {
    pub fn copied(self) -> bool {
        !matches!(self, CopyOutcome::Failed)
    }
}

/// Message for the share fallback dialog.
///
/// The dialog is shown whatever the copy outcome was; a failed copy is only
/// reported to the console.
pub fn fallback_confirmation(outcome: CopyOutcome, message: &str) -> &str {
    if !outcome.copied() {
        tracing::warn!("share fallback: both clipboard tiers failed, confirming anyway");
    }
    message
}

/// Label state of one copy-link button.
///
/// Every copy bumps a generation; a revert timer only applies if no newer
/// copy happened since it was scheduled, so the last click's timer restores
/// the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyLinkLabel {
    generation: u64,
    copied: bool,
}

/// Token carried by a scheduled revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertToken(u64);

impl Default for CopyLinkLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyLinkLabel {
    pub fn new() -> Self {
        Self {
            generation: 0,
            copied: false,
        }
    }

    pub fn shows_copied(&self) -> bool {
        self.copied
    }

    /// Copy finished: show the copied label and schedule a revert with the token.
    pub fn on_copied(&mut self) -> RevertToken {
        self.generation += 1;
        self.copied = true;
        RevertToken(self.generation)
    }

    /// Revert timer fired. Returns true if the label should go back.
    pub fn on_revert(&mut self, token: RevertToken) -> bool {
        if token.0 != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn text<'a>(&self, config: &'a ShareConfig) -> &'a str {
        if self.copied {
            &config.copied_label
        } else {
            &config.copy_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL: &str = "https://example.org/impacts.html";

    #[test]
    fn test_native_share_carries_title_text_url() {
        let config = ShareConfig::default();
        let plan = plan_share(true, "Impacts", URL, &config);
        assert_eq!(
            plan,
            SharePlan::Native(ShareData {
                title: "Impacts".into(),
                text: config.text.clone(),
                url: URL.into(),
            })
        );
    }

    #[test]
    fn test_missing_share_falls_back_to_copy() {
        let config = ShareConfig::default();
        let plan = plan_share(false, "Impacts", URL, &config);
        assert_eq!(
            plan,
            SharePlan::CopyThenConfirm {
                url: URL.into(),
                message: "Link copied. You can paste it into a message or post.".into(),
            }
        );
    }

    #[test]
    fn test_confirmation_shown_regardless_of_copy_outcome() {
        let msg = "copied!";
        for outcome in [CopyOutcome::Clipboard, CopyOutcome::LegacyCommand, CopyOutcome::Failed] {
            assert_eq!(fallback_confirmation(outcome, msg), msg);
        }
        assert!(!CopyOutcome::Failed.copied());
        assert!(CopyOutcome::LegacyCommand.copied());
    }

    #[test]
    fn test_copy_label_reverts_after_timer() {
        let config = ShareConfig::default();
        let mut label = CopyLinkLabel::new();
        assert_eq!(label.text(&config), "Copy link");

        let token = label.on_copied();
        assert_eq!(label.text(&config), "Copied!");

        assert!(label.on_revert(token));
        assert_eq!(label.text(&config), "Copy link");
        // a second fire of the same timer is a no-op
        assert!(!label.on_revert(token));
    }

    #[test]
    fn test_last_click_timer_wins() {
        let config = ShareConfig::default();
        let mut label = CopyLinkLabel::new();

        let first = label.on_copied();
        let second = label.on_copied();

        assert!(!label.on_revert(first));
        assert_eq!(label.text(&config), "Copied!");

        assert!(label.on_revert(second));
        assert_eq!(label.text(&config), "Copy link");
        assert!(!label.shows_copied());
    }
}
