//! Answer-once quiz questions.
//!
//! A `change` inside the quiz becomes a [`ChoiceChange`]. The question block
//! locks on its first answer; only a page reload clears it.

/// Everything the quiz needs to know about a `change` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceChange {
    /// The event target is an answer input.
    pub is_choice: bool,
    /// The input's `name`; empty names are not answers.
    pub name: String,
    /// Raw `data-correct` attribute.
    pub correct_attr: Option<String>,
    /// The enclosing question has a feedback region.
    pub has_feedback: bool,
}

impl ChoiceChange {
    pub fn is_correct(&self) -> bool {
        self.correct_attr.as_deref() == Some("true")
    }
}

/// Feedback region projection: `show` class and `bad` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub show: bool,
    pub bad: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// Not an answer, or nowhere to show feedback.
    Ignored,
    /// The question was already answered.
    Locked,
    /// Show feedback and disable every choice in the question.
    Answered { correct: bool, feedback: Feedback },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizQuestion {
    answer: Option<bool>,
}

impl QuizQuestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.answer.is_some()
    }

    /// Whether the recorded answer was correct, once answered.
    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    pub fn on_change(&mut self, change: &ChoiceChange) -> QuizOutcome {
        if !change.is_choice || change.name.is_empty() || !change.has_feedback {
            return QuizOutcome::Ignored;
        }
        if self.is_locked() {
            return QuizOutcome::Locked;
        }

        let correct = change.is_correct();
        self.answer = Some(correct);
        tracing::debug!(question = %change.name, correct, "quiz answered");

        QuizOutcome::Answered {
            correct,
            feedback: Feedback {
                show: true,
                bad: !correct,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn choice(correct: Option<&str>) -> ChoiceChange {
        ChoiceChange {
            is_choice: true,
            name: "q1".into(),
            correct_attr: correct.map(String::from),
            has_feedback: true,
        }
    }

    #[test]
    fn test_correct_answer_shows_good_feedback() {
        let mut q = QuizQuestion::new();
        assert_eq!(
            q.on_change(&choice(Some("true"))),
            QuizOutcome::Answered {
                correct: true,
                feedback: Feedback { show: true, bad: false }
            }
        );
        assert!(q.is_locked());
        assert_eq!(q.answer(), Some(true));
    }

    #[test]
    fn test_bad_iff_flag_is_not_true() {
        for attr in [None, Some("false"), Some("TRUE"), Some("")] {
            let mut q = QuizQuestion::new();
            match q.on_change(&choice(attr)) {
                QuizOutcome::Answered { correct, feedback } => {
                    assert!(!correct, "{attr:?}");
                    assert!(feedback.bad);
                    assert!(feedback.show);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_locks_after_first_answer() {
        let mut q = QuizQuestion::new();
        q.on_change(&choice(Some("false")));
        assert_eq!(q.on_change(&choice(Some("true"))), QuizOutcome::Locked);
        assert_eq!(q.answer(), Some(false));
    }

    #[test]
    fn test_ignores_non_answers() {
        let mut q = QuizQuestion::new();

        let mut not_input = choice(Some("true"));
        not_input.is_choice = false;
        assert_eq!(q.on_change(&not_input), QuizOutcome::Ignored);

        let mut unnamed = choice(Some("true"));
        unnamed.name.clear();
        assert_eq!(q.on_change(&unnamed), QuizOutcome::Ignored);

        let mut no_feedback = choice(Some("true"));
        no_feedback.has_feedback = false;
        assert_eq!(q.on_change(&no_feedback), QuizOutcome::Ignored);

        assert!(!q.is_locked());
    }
}
