//! Multiple-choice quiz runner.

use crate::content::QuizQuestion;
use crate::error::{ContentKind, ContentUnavailable, IllegalTransition};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Closing remark for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// 80% or more.
    Excellent,
    /// 50% or more.
    GoodAttempt,
    /// Below 50%.
    NeedsReview,
}

impl Verdict {
    /// Message shown with the final score.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Excellent => "¡Excelente trabajo, científico!",
            Verdict::GoodAttempt => "Buen intento, sigue estudiando.",
            Verdict::NeedsReview => "Necesitas repasar los conceptos.",
        }
    }
}

/// Result of choosing an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The option was recorded.
    Answered {
        /// Whether it was the right option.
        correct: bool,
        /// Index of the right option.
        correct_option: usize,
        /// Explanation supplied with the question.
        explanation: Option<String>,
    },
    /// Nothing changed.
    Ignored(IllegalTransition),
}

/// Linear pass over a quiz, one point per correct answer.
#[derive(Debug, Clone, Getters)]
pub struct QuizRunner {
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    score: usize,
    completed: bool,
}

impl QuizRunner {
    /// Starts a run on the first question.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] for an empty list.
    #[instrument(skip(questions), fields(questions = questions.len()))]
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, ContentUnavailable> {
        if questions.is_empty() {
            return Err(ContentUnavailable::new(ContentKind::Quiz));
        }
        Ok(Self {
            questions,
            index: 0,
            selected: None,
            score: 0,
            completed: false,
        })
    }

    /// Question being asked.
    pub fn current(&self) -> &QuizQuestion {
        &self.questions[self.index]
    }

    /// Records the player's option. The first choice is final.
    #[instrument(skip(self))]
    pub fn select(&mut self, option: usize) -> SelectionOutcome {
        if self.completed {
            return SelectionOutcome::Ignored(IllegalTransition::RoundOver);
        }
        if self.selected.is_some() {
            debug!("Selection ignored: already answered");
            return SelectionOutcome::Ignored(IllegalTransition::AlreadyAnswered);
        }
        let question = &self.questions[self.index];
        if option >= question.options().len() {
            return SelectionOutcome::Ignored(IllegalTransition::NoSuchOption(option));
        }

        let correct_option = *question.correct_answer();
        let correct = option == correct_option;
        let explanation = question.explanation().clone();
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        debug!(correct, score = self.score, "Answer recorded");
        SelectionOutcome::Answered {
            correct,
            correct_option,
            explanation,
        }
    }

    /// Moves on. Returns false when the selection is missing or the run
    /// was already complete.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> bool {
        if self.completed || self.selected.is_none() {
            return false;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
        } else {
            self.completed = true;
            info!(score = self.score, total = self.questions.len(), "Quiz completed");
        }
        true
    }

    /// Share of correct answers over all questions, 0-100.
    pub fn percentage(&self) -> f64 {
        self.score as f64 / self.questions.len() as f64 * 100.0
    }

    /// Remark for the current percentage.
    pub fn verdict(&self) -> Verdict {
        let pct = self.percentage();
        if pct >= 80.0 {
            Verdict::Excellent
        } else if pct >= 50.0 {
            Verdict::GoodAttempt
        } else {
            Verdict::NeedsReview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion::new(
            1,
            "¿Qué hormona produce el cuerpo lúteo?",
            vec!["Estrógeno".into(), "Progesterona".into(), "FSH".into(), "LH".into()],
            correct,
            Some("El cuerpo lúteo secreta progesterona.".into()),
        )
    }

    #[test]
    fn empty_quiz_is_unavailable() {
        assert!(QuizRunner::new(Vec::new()).is_err());
    }

    #[test]
    fn first_selection_is_final() {
        let mut quiz = QuizRunner::new(vec![question(1)]).unwrap();
        assert!(matches!(quiz.select(1), SelectionOutcome::Answered { correct: true, .. }));
        assert_eq!(
            quiz.select(0),
            SelectionOutcome::Ignored(IllegalTransition::AlreadyAnswered)
        );
        assert_eq!(*quiz.score(), 1);
    }

    #[test]
    fn advance_requires_selection() {
        let mut quiz = QuizRunner::new(vec![question(1), question(2)]).unwrap();
        assert!(!quiz.advance());
        quiz.select(0);
        assert!(quiz.advance());
        assert_eq!(*quiz.index(), 1);
    }

    #[test]
    fn verdict_thresholds() {
        let mut quiz = QuizRunner::new(vec![question(0), question(0)]).unwrap();
        quiz.select(0);
        quiz.advance();
        quiz.select(1);
        quiz.advance();
        assert!(*quiz.completed());
        assert_eq!(quiz.percentage(), 50.0);
        assert_eq!(quiz.verdict(), Verdict::GoodAttempt);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut quiz = QuizRunner::new(vec![question(0)]).unwrap();
        assert_eq!(
            quiz.select(7),
            SelectionOutcome::Ignored(IllegalTransition::NoSuchOption(7))
        );
    }
}
