use serde::Deserialize;

use crate::notify::NotifyKind;

#[derive(Debug, Clone, Deserialize)]
pub struct QuizOption {
    pub label: String,
    #[serde(default)]
    pub correct: bool,
}

/// Visual state of one quiz option after hit-testing/answering.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OptionMark {
    Neutral,
    Correct,
    Incorrect,
}

/// A single-question quiz attached to a slide. Correctness is declared
/// per option in the deck manifest; once answered, the options stay
/// disabled and keep their marks.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub question: String,
    #[serde(rename = "option")]
    pub options: Vec<QuizOption>,
    #[serde(skip)]
    pub open: bool,
    #[serde(skip)]
    answered: Option<usize>,
}

impl Quiz {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.open {
            "x Close quiz"
        } else {
            "? Test your knowledge"
        }
    }

    pub fn answered(&self) -> bool {
        self.answered.is_some()
    }

    /// Record the user's choice. Disabled after the first answer.
    /// Returns the notification to emit, or None if the click was
    /// ignored (already answered, or index out of range).
    pub fn select(&mut self, choice: usize) -> Option<(String, NotifyKind)> {
        if self.answered.is_some() || choice >= self.options.len() {
            return None;
        }
        self.answered = Some(choice);
        if self.options[choice].correct {
            Some(("Correct! Well done!".to_string(), NotifyKind::Success))
        } else {
            let answer = self
                .options
                .iter()
                .find(|option| option.correct)
                .map(|option| option.label.as_str())
                .unwrap_or("none of the above");
            Some((
                format!("Incorrect. The correct answer is \"{}\".", answer),
                NotifyKind::Error,
            ))
        }
    }

    /// How option `index` should be styled right now. The chosen option
    /// is marked by its own correctness; on a wrong answer every correct
    /// option is revealed as well.
    pub fn mark(&self, index: usize) -> OptionMark {
        let Some(chosen) = self.answered else {
            return OptionMark::Neutral;
        };
        if index == chosen {
            if self.options[index].correct {
                OptionMark::Correct
            } else {
                OptionMark::Incorrect
            }
        } else if !self.options[chosen].correct && self.options[index].correct {
            OptionMark::Correct
        } else {
            OptionMark::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        toml::from_str(
            r#"
            question = "What drives long-run growth?"

            [[option]]
            label = "Seasonal demand"

            [[option]]
            label = "Economic development"
            correct = true

            [[option]]
            label = "Exchange rates"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn manifest_declares_correctness_explicitly() {
        let q = quiz();
        assert_eq!(q.options.len(), 3);
        assert!(q.options[1].correct);
        assert!(!q.options[0].correct);
        assert!(!q.open);
    }

    #[test]
    fn trigger_caption_swaps_with_visibility() {
        let mut q = quiz();
        assert_eq!(q.trigger_label(), "? Test your knowledge");
        q.toggle();
        assert!(q.open);
        assert_eq!(q.trigger_label(), "x Close quiz");
    }

    #[test]
    fn correct_answer_marks_and_notifies() {
        let mut q = quiz();
        let (message, kind) = q.select(1).unwrap();
        assert_eq!(kind, NotifyKind::Success);
        assert!(message.starts_with("Correct"));
        assert_eq!(q.mark(1), OptionMark::Correct);
        assert_eq!(q.mark(0), OptionMark::Neutral);
        assert!(q.answered());
    }

    #[test]
    fn wrong_answer_reveals_the_correct_option() {
        let mut q = quiz();
        let (message, kind) = q.select(0).unwrap();
        assert_eq!(kind, NotifyKind::Error);
        assert!(message.contains("Economic development"));
        assert_eq!(q.mark(0), OptionMark::Incorrect);
        assert_eq!(q.mark(1), OptionMark::Correct);
        assert_eq!(q.mark(2), OptionMark::Neutral);
    }

    #[test]
    fn answered_quiz_ignores_further_clicks() {
        let mut q = quiz();
        q.select(0);
        assert!(q.select(1).is_none());
        assert_eq!(q.mark(0), OptionMark::Incorrect);
    }

    #[test]
    fn out_of_range_choice_is_ignored() {
        let mut q = quiz();
        assert!(q.select(9).is_none());
        assert!(!q.answered());
    }
}
