//! Animated statistic counters.
//!
//! A counter sits idle until it first becomes visible, then either jumps to
//! its target (reduced motion) or tweens from 0 with smoothstep easing, one
//! frame per animation callback, until progress reaches 1.

use crate::error::{BehaviorError, Result};

/// Smoothstep easing `p²(3 − 2p)`, clamped to `[0, 1]`.
pub fn smoothstep(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}

/// Round half up, matching how the site has always rounded counter frames.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// What a counter element declares: its target value and a display suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub suffix: String,
}

impl CounterSpec {
    /// Build from the raw `data-count` / `data-suffix` attribute values.
    ///
    /// A blank `data-count` is an error, not zero: the counter stays inert and
    /// keeps its server-rendered text instead of counting up to `0`.
    pub fn parse(count: &str, suffix: Option<&str>) -> Result<Self> {
        let trimmed = count.trim();
        let value: f64 = trimmed
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| BehaviorError::InvalidCounterTarget {
                raw: count.to_string(),
            })?;

        Ok(Self {
            target: round_half_up(value),
            suffix: suffix.unwrap_or_default().to_string(),
        })
    }

    /// Text for a displayed value.
    pub fn render(&self, value: i64) -> String {
        format!("{}{}", value, self.suffix)
    }

    /// Text once the animation is complete.
    pub fn final_text(&self) -> String {
        self.render(self.target)
    }
}

/// The visitor's motion preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Full,
    Reduced,
}

impl Motion {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced { Motion::Reduced } else { Motion::Full }
    }
}

/// A 0 → target tween anchored at a start timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub start_ms: f64,
    pub duration_ms: f64,
    pub target: i64,
}

/// One rendered tween frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub value: i64,
    pub done: bool,
}

impl Tween {
    /// Normalized time progress at `now_ms`, in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn frame(&self, now_ms: f64) -> Frame {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return Frame {
                value: self.target,
                done: true,
            };
        }
        Frame {
            value: round_half_up(self.target as f64 * smoothstep(p)),
            done: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Waiting,
    Running(Tween),
    Finished,
}

/// Result of a counter transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterStep {
    /// Nothing to do (already triggered, or not running).
    Ignored,
    /// Write this text; request another frame if `more` is set.
    Render { text: String, more: bool },
    /// Animation started; request the first frame.
    Started,
}

/// Per-element counter state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    spec: CounterSpec,
    phase: Phase,
}

impl Counter {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            phase: Phase::Waiting,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// The element became visible. Fires at most once per counter.
    pub fn on_visible(&mut self, now_ms: f64, motion: Motion, duration_ms: f64) -> CounterStep {
        if self.phase != Phase::Waiting {
            return CounterStep::Ignored;
        }

        match motion {
            Motion::Reduced => {
                self.phase = Phase::Finished;
                CounterStep::Render {
                    text: self.spec.final_text(),
                    more: false,
                }
            }
            Motion::Full => {
                self.phase = Phase::Running(Tween {
                    start_ms: now_ms,
                    duration_ms,
                    target: self.spec.target,
                });
                CounterStep::Started
            }
        }
    }

    /// Animation frame callback at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> CounterStep {
        let Phase::Running(tween) = self.phase else {
            return CounterStep::Ignored;
        };

        let frame = tween.frame(now_ms);
        if frame.done {
            self.phase = Phase::Finished;
        }
        CounterStep::Render {
            text: self.spec.render(frame.value),
            more: !frame.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spec(target: i64, suffix: &str) -> CounterSpec {
        CounterSpec {
            target,
            suffix: suffix.into(),
        }
    }

    #[test]
    fn test_smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(7.0), 1.0);
    }

    #[test]
    fn test_smoothstep_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| smoothstep(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_parse_attributes() {
        assert_eq!(CounterSpec::parse("42", Some("%")).unwrap(), spec(42, "%"));
        assert_eq!(CounterSpec::parse(" 1200 ", None).unwrap(), spec(1200, ""));
        assert_eq!(CounterSpec::parse("12.5", None).unwrap(), spec(13, ""));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for raw in ["", "many", "NaN", "inf"] {
            let err = CounterSpec::parse(raw, None).unwrap_err();
            assert!(matches!(err, BehaviorError::InvalidCounterTarget { .. }), "{raw:?}");
        }
    }

    #[test]
    fn test_blank_count_is_not_zero() {
        for raw in ["", "   "] {
            let err = CounterSpec::parse(raw, Some("%")).unwrap_err();
            assert!(
                matches!(&err, BehaviorError::InvalidCounterTarget { raw: r } if r == raw),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_tween_converges_exactly() {
        let tween = Tween {
            start_ms: 100.0,
            duration_ms: 900.0,
            target: 37,
        };
        assert_eq!(tween.frame(100.0), Frame { value: 0, done: false });
        assert_eq!(tween.frame(550.0), Frame { value: 19, done: false });
        assert_eq!(tween.frame(1000.0), Frame { value: 37, done: true });
        assert_eq!(tween.frame(5000.0), Frame { value: 37, done: true });
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let tween = Tween {
            start_ms: 0.0,
            duration_ms: 0.0,
            target: 5,
        };
        assert_eq!(tween.frame(0.0), Frame { value: 5, done: true });
    }

    #[test]
    fn test_full_motion_runs_to_target_with_suffix() {
        let mut counter = Counter::new(spec(64, "%"));
        assert_eq!(counter.on_visible(0.0, Motion::Full, 900.0), CounterStep::Started);

        let mut last = None;
        let mut previous = i64::MIN;
        for now in (16..=960).step_by(16) {
            match counter.tick(now as f64) {
                CounterStep::Render { text, more } => {
                    let value: i64 = text.trim_end_matches('%').parse().unwrap();
                    assert!(value >= previous, "frames must not go backwards");
                    previous = value;
                    last = Some(text);
                    if !more {
                        break;
                    }
                }
                other => panic!("unexpected step {other:?}"),
            }
        }

        assert_eq!(last.as_deref(), Some("64%"));
        assert!(counter.is_finished());
        assert_eq!(counter.tick(2000.0), CounterStep::Ignored);
    }

    #[test]
    fn test_reduced_motion_renders_final_value_at_once() {
        let mut counter = Counter::new(spec(5, " in 10"));
        assert_eq!(
            counter.on_visible(0.0, Motion::Reduced, 900.0),
            CounterStep::Render {
                text: "5 in 10".into(),
                more: false
            }
        );
        assert!(counter.is_finished());
        assert_eq!(counter.tick(10.0), CounterStep::Ignored);
    }

    #[test]
    fn test_counter_triggers_at_most_once() {
        let mut counter = Counter::new(spec(10, ""));
        assert_eq!(counter.on_visible(0.0, Motion::Full, 900.0), CounterStep::Started);
        assert_eq!(counter.on_visible(50.0, Motion::Full, 900.0), CounterStep::Ignored);
        assert_eq!(counter.on_visible(50.0, Motion::Reduced, 900.0), CounterStep::Ignored);
    }

    #[test]
    fn test_tick_before_visible_is_ignored() {
        let mut counter = Counter::new(spec(10, ""));
        assert_eq!(counter.tick(10.0), CounterStep::Ignored);
    }
}
