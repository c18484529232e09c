//! Two-team survey game ("100 Galileanos Dicen").
//!
//! The active team guesses surveyed answers. Each hit reveals an answer and
//! banks its points for the round; each miss is a strike. Three strikes
//! hand the other team a single steal guess. The round ends when the board
//! is cleared or the steal resolves, and its banked points go to one team.

use crate::content::{FeudAnswer, FeudQuestion};
use crate::error::{ContentKind, ContentUnavailable, IllegalTransition};
use crate::matching::loosely_matches;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Strikes that open the steal.
pub const MAX_STRIKES: u8 = 3;

/// Pause between a finished round and the next question.
pub const ROUND_ADVANCE_DELAY: Duration = Duration::from_secs(3);

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// "Equipo Galileanos 1".
    One,
    /// "Equipo Galileanos 2".
    Two,
}

impl Team {
    /// The other team.
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// 1 or 2, as shown to players.
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

/// Running totals for both teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TeamScores {
    team1: u32,
    team2: u32,
}

impl TeamScores {
    /// Score of one team.
    pub fn of(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }

    fn award(&mut self, team: Team, points: u32) {
        match team {
            Team::One => self.team1 = self.team1.saturating_add(points),
            Team::Two => self.team2 = self.team2.saturating_add(points),
        }
    }
}

/// How the board-clearing award is computed.
///
/// The classic scoring adds the final answer's points a second time on
/// top of the banked round total. `Exact` awards the banked total only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalRevealScoring {
    /// Round total plus the final answer counted again.
    #[default]
    DoubleCountFinal,
    /// Round total only.
    Exact,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Every answer was revealed by the guessing team.
    BoardCleared,
    /// The stealing team found an answer.
    StealSucceeded,
    /// The stealing team missed; the guessing team keeps the points.
    StealFailed,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct RoundEnd {
    reason: RoundEndReason,
    team: Team,
    awarded: u32,
}

/// Result of a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeudOutcome {
    /// A new answer was revealed.
    Correct {
        /// Position of the answer on the board.
        index: usize,
        /// Points banked by the reveal.
        points: u32,
        /// Set when the reveal ended the round.
        round_end: Option<RoundEnd>,
    },
    /// The guess only matched answers already on the board.
    AlreadySaid {
        /// Position of the matched answer.
        index: usize,
    },
    /// A miss below the strike limit.
    Strike {
        /// Strikes so far.
        strikes: u8,
    },
    /// Third strike: the other team may steal with one guess.
    StealChance {
        /// Team now guessing.
        team: Team,
    },
    /// The steal guess missed and the round is over.
    StealFailed(RoundEnd),
    /// Nothing changed.
    Ignored(IllegalTransition),
}

impl FeudOutcome {
    /// The round result, when this guess ended the round.
    pub fn round_end(&self) -> Option<RoundEnd> {
        match self {
            FeudOutcome::Correct { round_end, .. } => *round_end,
            FeudOutcome::StealFailed(end) => Some(*end),
            _ => None,
        }
    }
}

/// State of one feud round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FeudRound {
    question: String,
    answers: Vec<FeudAnswer>,
    revealed: Vec<bool>,
    strikes: u8,
    round_points: u32,
    steal_mode: bool,
    starter: Team,
    active_team: Team,
    finished: Option<RoundEnd>,
}

impl FeudRound {
    fn new(question: FeudQuestion, starter: Team) -> Self {
        let revealed = vec![false; question.answers().len()];
        Self {
            question: question.question().clone(),
            answers: question.answers().clone(),
            revealed,
            strikes: 0,
            round_points: 0,
            steal_mode: false,
            starter,
            active_team: starter,
            finished: None,
        }
    }

    /// True once every answer is on the board.
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Whether the round has ended.
    pub fn is_over(&self) -> bool {
        self.finished.is_some()
    }

    /// First unrevealed answer matching the guess, else the first revealed
    /// one, in list order.
    fn find_match(&self, guess: &str) -> Option<(usize, bool)> {
        let mut already_said = None;
        for (index, answer) in self.answers.iter().enumerate() {
            if !loosely_matches(guess, answer.answer()) {
                continue;
            }
            if !self.revealed[index] {
                return Some((index, false));
            }
            already_said.get_or_insert((index, true));
        }
        already_said
    }
}

/// Feud engine; team scores survive across rounds.
#[derive(Debug, Clone, Getters)]
pub struct FeudEngine {
    #[getter(skip)]
    round: Option<FeudRound>,
    scores: TeamScores,
    scoring: FinalRevealScoring,
    /// Starter of the most recent round.
    #[getter(skip)]
    last_starter: Team,
}

impl FeudEngine {
    /// Creates an engine. The first round is started by team two.
    #[instrument]
    pub fn new(scoring: FinalRevealScoring) -> Self {
        Self {
            round: None,
            scores: TeamScores::default(),
            scoring,
            last_starter: Team::One,
        }
    }

    /// Current round, if one has started.
    pub fn round(&self) -> Option<&FeudRound> {
        self.round.as_ref()
    }

    /// Starts a round with a freshly fetched question; the starting team
    /// alternates from the previous round's starter.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when the question has no answers;
    /// the engine is left untouched.
    #[instrument(skip(self, question), fields(answers = question.answers().len()))]
    pub fn start_round(&mut self, question: FeudQuestion) -> Result<&FeudRound, ContentUnavailable> {
        if question.answers().is_empty() {
            return Err(ContentUnavailable::new(ContentKind::FeudQuestion));
        }
        let starter = self.last_starter.opponent();
        self.last_starter = starter;
        info!(starter = starter.number(), question = %question.question(), "Feud round started");
        let round = self.round.insert(FeudRound::new(question, starter));
        Ok(&*round)
    }

    /// Checks a guess against the board.
    #[instrument(skip(self))]
    pub fn guess(&mut self, text: &str) -> FeudOutcome {
        let scoring = self.scoring;
        let Some(round) = self.round.as_mut() else {
            return FeudOutcome::Ignored(IllegalTransition::NoRound);
        };
        if round.is_over() {
            debug!("Guess ignored: round over");
            return FeudOutcome::Ignored(IllegalTransition::RoundOver);
        }

        match round.find_match(text) {
            Some((index, true)) => {
                debug!(index, "Answer already on the board");
                FeudOutcome::AlreadySaid { index }
            }
            Some((index, false)) => {
                let points = *round.answers[index].points();
                round.revealed[index] = true;
                round.round_points = round.round_points.saturating_add(points);
                info!(index, points, round_points = round.round_points, "Answer revealed");

                let round_end = if round.steal_mode {
                    Some(RoundEnd {
                        reason: RoundEndReason::StealSucceeded,
                        team: round.active_team,
                        awarded: round.round_points,
                    })
                } else if round.all_revealed() {
                    let awarded = match scoring {
                        FinalRevealScoring::DoubleCountFinal => {
                            round.round_points.saturating_add(points)
                        }
                        FinalRevealScoring::Exact => round.round_points,
                    };
                    Some(RoundEnd {
                        reason: RoundEndReason::BoardCleared,
                        team: round.active_team,
                        awarded,
                    })
                } else {
                    None
                };

                if let Some(end) = round_end {
                    self.finish(end);
                }
                FeudOutcome::Correct {
                    index,
                    points,
                    round_end,
                }
            }
            None => {
                round.strikes += 1;
                if round.steal_mode {
                    let end = RoundEnd {
                        reason: RoundEndReason::StealFailed,
                        team: round.active_team.opponent(),
                        awarded: round.round_points,
                    };
                    self.finish(end);
                    FeudOutcome::StealFailed(end)
                } else if round.strikes >= MAX_STRIKES {
                    round.steal_mode = true;
                    round.active_team = round.active_team.opponent();
                    round.strikes = 0;
                    info!(team = round.active_team.number(), "Steal opened");
                    FeudOutcome::StealChance {
                        team: round.active_team,
                    }
                } else {
                    debug!(strikes = round.strikes, "Strike");
                    FeudOutcome::Strike {
                        strikes: round.strikes,
                    }
                }
            }
        }
    }

    fn finish(&mut self, end: RoundEnd) {
        self.scores.award(end.team, end.awarded);
        if let Some(round) = self.round.as_mut() {
            round.finished = Some(end);
        }
        info!(
            reason = ?end.reason,
            team = end.team.number(),
            awarded = end.awarded,
            team1 = self.scores.team1,
            team2 = self.scores.team2,
            "Feud round finished"
        );
    }
}

impl Default for FeudEngine {
    fn default() -> Self {
        Self::new(FinalRevealScoring::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> FeudQuestion {
        FeudQuestion::new(
            "Menciona un síntoma común del embarazo",
            vec![
                FeudAnswer::new("Náuseas", 40),
                FeudAnswer::new("Cansancio", 25),
            ],
        )
    }

    #[test]
    fn empty_question_cannot_start() {
        let mut engine = FeudEngine::default();
        let empty = FeudQuestion::new("?", Vec::new());
        assert!(engine.start_round(empty).is_err());
        assert!(engine.round().is_none());
    }

    #[test]
    fn starters_alternate_between_rounds() {
        let mut engine = FeudEngine::default();
        assert_eq!(*engine.start_round(question()).unwrap().active_team(), Team::Two);
        assert_eq!(*engine.start_round(question()).unwrap().active_team(), Team::One);
        assert_eq!(*engine.start_round(question()).unwrap().active_team(), Team::Two);
    }

    #[test]
    fn prefers_unrevealed_match_over_said_one() {
        let mut engine = FeudEngine::default();
        engine.start_round(FeudQuestion::new(
            "q",
            vec![
                FeudAnswer::new("dolor", 30),
                FeudAnswer::new("dolor de espalda", 20),
                FeudAnswer::new("mareo", 10),
            ],
        ))
        .unwrap();
        assert!(matches!(engine.guess("dolor"), FeudOutcome::Correct { index: 0, .. }));
        assert!(matches!(
            engine.guess("dolor de espalda"),
            FeudOutcome::Correct { index: 1, .. }
        ));
        assert_eq!(engine.guess("dolor"), FeudOutcome::AlreadySaid { index: 0 });
    }

    #[test]
    fn guesses_after_round_end_are_ignored() {
        let mut engine = FeudEngine::new(FinalRevealScoring::Exact);
        engine.start_round(question()).unwrap();
        engine.guess("náuseas");
        engine.guess("cansancio");
        assert_eq!(
            engine.guess("cansancio"),
            FeudOutcome::Ignored(IllegalTransition::RoundOver)
        );
    }

    #[test]
    fn blank_guess_is_a_strike() {
        let mut engine = FeudEngine::default();
        engine.start_round(question()).unwrap();
        assert_eq!(engine.guess("   "), FeudOutcome::Strike { strikes: 1 });
    }
}
