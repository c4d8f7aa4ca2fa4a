//! Configuration for the page behaviors.
//!
//! Pages may embed an optional JSON block
//! (`<script type="application/json" id="page-behaviors-config">`) that
//! overrides any subset of these values. Every field has a default that
//! matches the site's shipped markup, so most pages carry no block at all.

use serde::Deserialize;

use crate::error::Result;

/// Element id of the inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "page-behaviors-config";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub markup: MarkupConfig,
    pub counter: CounterConfig,
    pub share: ShareConfig,
    /// Page name used when the URL path ends in `/`
    pub index_page: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Bind controllers as soon as the module starts. Hosts that call
    /// `mount_page()` themselves turn this off.
    pub auto_mount: bool,
}

/// Selectors, attribute names and class names the controllers look for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub nav_links: String,
    pub counters: String,
    pub count_attr: String,
    pub suffix_attr: String,
    pub tablist: String,
    pub tab: String,
    pub tab_panel: String,
    pub tab_key_attr: String,
    pub panel_key_attr: String,
    pub stat: String,
    pub drawer: String,
    pub drawer_open_class: String,
    pub flip_card: String,
    pub flip_button: String,
    pub flipped_class: String,
    pub quiz: String,
    pub question: String,
    pub feedback: String,
    pub correct_attr: String,
    pub feedback_show_class: String,
    pub feedback_bad_class: String,
    pub quiz_reset: String,
    pub share_button: String,
    pub copy_link_button: String,
}

/// Counter tween settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Tween length in milliseconds
    pub duration_ms: f64,
    /// Fraction of the element that must be on screen before it animates
    pub visibility_threshold: f64,
}

/// Share and copy-link texts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub text: String,
    pub fallback_message: String,
    pub copied_label: String,
    pub copy_label: String,
    pub label_revert_ms: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            markup: MarkupConfig::default(),
            counter: CounterConfig::default(),
            share: ShareConfig::default(),
            index_page: "index.html".to_string(),
            log_level: "info".to_string(),
            auto_mount: true,
        }
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            nav_links: ".navlinks a".into(),
            counters: "[data-count]".into(),
            count_attr: "data-count".into(),
            suffix_attr: "data-suffix".into(),
            tablist: "[data-tablist]".into(),
            tab: "[role='tab']".into(),
            tab_panel: "[role='tabpanel']".into(),
            tab_key_attr: "data-tab".into(),
            panel_key_attr: "data-panel".into(),
            stat: ".stat".into(),
            drawer: ".drawer".into(),
            drawer_open_class: "open".into(),
            flip_card: ".flip".into(),
            flip_button: "button".into(),
            flipped_class: "is-flipped".into(),
            quiz: "[data-quiz]".into(),
            question: ".q".into(),
            feedback: ".feedback".into(),
            correct_attr: "data-correct".into(),
            feedback_show_class: "show".into(),
            feedback_bad_class: "bad".into(),
            quiz_reset: "[data-quiz-reset]".into(),
            share_button: "[data-share]".into(),
            copy_link_button: "[data-copy-link]".into(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 900.0,
            visibility_threshold: 0.25,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            text: "Learning about how low income\u{2014}rooted in colonial systems\u{2014}impacts quality of life in First Nations communities.".into(),
            fallback_message: "Link copied. You can paste it into a message or post.".into(),
            copied_label: "Copied!".into(),
            copy_label: "Copy link".into(),
            label_revert_ms: 1200,
        }
    }
}

impl BehaviorConfig {
    /// Parse a JSON config block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load config from the inline block contents, if the page has one.
    /// Returns default config if the block is absent, blank or invalid.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    /// Parsed [`Self::log_level`], falling back to INFO on unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_block_gives_defaults() {
        assert_eq!(BehaviorConfig::load(None), BehaviorConfig::default());
        assert_eq!(BehaviorConfig::load(Some("  \n")), BehaviorConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = BehaviorConfig::load(Some(
            r#"{ "counter": { "duration_ms": 400 }, "share": { "copied_label": "Done" } }"#,
        ));

        assert_eq!(config.counter.duration_ms, 400.0);
        assert_eq!(config.counter.visibility_threshold, 0.25);
        assert_eq!(config.share.copied_label, "Done");
        assert_eq!(config.share.copy_label, "Copy link");
        assert_eq!(config.markup, MarkupConfig::default());
        assert!(config.auto_mount);
    }

    #[test]
    fn test_host_can_disable_auto_mount() {
        let config = BehaviorConfig::load(Some(r#"{ "auto_mount": false }"#));
        assert!(!config.auto_mount);
        assert_eq!(config.index_page, "index.html");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(
            BehaviorConfig::load(Some("{ not json")),
            BehaviorConfig::default()
        );
        assert!(BehaviorConfig::from_json("42").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = BehaviorConfig::default();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);

        config.log_level = "debug".into();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        config.log_level = "loud".into();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_default_share_text_mentions_first_nations() {
        let share = ShareConfig::default();
        assert!(share.text.contains("First Nations communities"));
        assert_eq!(share.label_revert_ms, 1200);
    }
}
