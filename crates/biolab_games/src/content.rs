//! Content payloads produced by the content provider.
//!
//! Field names follow the JSON the generator is asked to emit, so these
//! types deserialize directly from provider responses.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Study topic offered in the menu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TopicId {
    /// Reproduction in human beings.
    HumanRepro,
    /// Stages of fetal development.
    FetalDev,
    /// The menstrual cycle.
    Menstrual,
    /// Structure of the male reproductive system.
    MaleSystem,
    /// Structure of the female reproductive system.
    FemaleSystem,
}

impl TopicId {
    /// Menu title.
    #[instrument]
    pub fn title(self) -> &'static str {
        match self {
            Self::HumanRepro => "Reproducción Humana",
            Self::FetalDev => "Desarrollo Fetal",
            Self::Menstrual => "Ciclo Menstrual",
            Self::MaleSystem => "Sistema Masculino",
            Self::FemaleSystem => "Sistema Femenino",
        }
    }

    /// One-line menu description.
    #[instrument]
    pub fn description(self) -> &'static str {
        match self {
            Self::HumanRepro => "Conceptos generales de biología reproductiva",
            Self::FetalDev => "Etapas del embarazo semana a semana",
            Self::Menstrual => "Fases hormonales y cambios biológicos",
            Self::MaleSystem => "Anatomía y funciones del aparato masculino",
            Self::FemaleSystem => "Anatomía y funciones del aparato femenino",
        }
    }

    /// Subject name handed to the content generator.
    #[instrument]
    pub fn subject(self) -> &'static str {
        match self {
            Self::HumanRepro => "Reproducción en los seres humanos",
            Self::FetalDev => "Etapas de desarrollo del feto",
            Self::Menstrual => "Ciclo menstrual",
            Self::MaleSystem => "Estructura aparato reproductor masculino",
            Self::FemaleSystem => "Estructura aparato reproductor femenino",
        }
    }
}

/// The four mini-games.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameKind {
    /// Tic-tac-toe where every move is gated by a trivia question.
    #[strum(to_string = "tictactoe", serialize = "tic_tac_toe")]
    TicTacToe,
    /// Guess the term letter by letter.
    Hangman,
    /// Category board with point values.
    Jeopardy,
    /// Two-team survey guessing game.
    #[strum(to_string = "feud", serialize = "galileanos")]
    Feud,
}

impl GameKind {
    /// Menu title.
    #[instrument]
    pub fn title(self) -> &'static str {
        match self {
            Self::TicTacToe => "Tic Tac Toe Trivia",
            Self::Hangman => "El Ahorcado",
            Self::Jeopardy => "Jeopardy Bio",
            Self::Feud => "100 Galileanos Dicen",
        }
    }
}

/// A term and its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Definition {
    #[new(into)]
    term: String,
    #[new(into)]
    definition: String,
}

/// A multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct QuizQuestion {
    #[serde(default)]
    id: u32,
    #[new(into)]
    question: String,
    options: Vec<String>,
    /// Index into `options`.
    #[serde(rename = "correctAnswer", alias = "correct_answer")]
    correct_answer: usize,
    #[serde(default)]
    explanation: Option<String>,
}

/// One clue on the Jeopardy board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct JeopardyClue {
    points: i64,
    #[new(into)]
    question: String,
    #[new(into)]
    answer: String,
}

/// A Jeopardy column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct JeopardyCategory {
    #[new(into)]
    category: String,
    questions: Vec<JeopardyClue>,
}

/// A surveyed answer and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct FeudAnswer {
    #[new(into)]
    answer: String,
    points: u32,
}

/// A feud prompt with its ranked answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct FeudQuestion {
    #[new(into)]
    question: String,
    answers: Vec<FeudAnswer>,
}

/// A single trivia question with a short answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct TriviaPair {
    #[new(into)]
    question: String,
    #[new(into)]
    answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn topic_ids_parse_from_snake_case() {
        assert_eq!(TopicId::from_str("fetal_dev"), Ok(TopicId::FetalDev));
        assert_eq!(TopicId::HumanRepro.to_string(), "human_repro");
        assert_eq!(TopicId::iter().count(), 5);
    }

    #[test]
    fn game_kind_accepts_aliases() {
        assert_eq!(GameKind::from_str("tictactoe"), Ok(GameKind::TicTacToe));
        assert_eq!(GameKind::from_str("galileanos"), Ok(GameKind::Feud));
        assert_eq!(GameKind::from_str("hangman"), Ok(GameKind::Hangman));
    }

    #[test]
    fn quiz_question_reads_camel_case_answer_index() {
        let json = r#"{"id":3,"question":"¿Dónde ocurre la fecundación?",
            "options":["Útero","Trompa de Falopio","Ovario","Vagina"],
            "correctAnswer":1,"explanation":"En la ampolla tubárica."}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(*q.correct_answer(), 1);
        assert_eq!(q.options().len(), 4);
        assert!(q.explanation().is_some());
    }

    #[test]
    fn quiz_question_tolerates_missing_explanation() {
        let json = r#"{"question":"q","options":["a","b"],"correctAnswer":0}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(*q.id(), 0);
        assert_eq!(q.explanation(), &None);
    }
}
