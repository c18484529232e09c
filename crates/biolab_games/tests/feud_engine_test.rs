//! Tests for the feud strike, steal and scoring protocol.

use biolab_games::{
    FeudAnswer, FeudEngine, FeudOutcome, FeudQuestion, FinalRevealScoring, RoundEndReason, Team,
};

fn pregnancy_question() -> FeudQuestion {
    FeudQuestion::new(
        "Menciona un síntoma común del embarazo",
        vec![
            FeudAnswer::new("nausea", 35),
            FeudAnswer::new("dolor", 25),
            FeudAnswer::new("cansancio", 20),
            FeudAnswer::new("antojos", 12),
            FeudAnswer::new("mareo", 8),
        ],
    )
}

fn started(scoring: FinalRevealScoring) -> FeudEngine {
    let mut engine = FeudEngine::new(scoring);
    engine.start_round(pregnancy_question()).unwrap();
    engine
}

#[test]
fn test_substring_matching_examples() {
    let mut engine = started(FinalRevealScoring::default());
    assert!(matches!(
        engine.guess("dolor de espalda"),
        FeudOutcome::Correct { index: 1, points: 25, round_end: None }
    ));
    assert!(matches!(
        engine.guess("nau"),
        FeudOutcome::Correct { index: 0, points: 35, round_end: None }
    ));
    assert_eq!(engine.guess("fiebre"), FeudOutcome::Strike { strikes: 1 });
    assert_eq!(*engine.round().unwrap().round_points(), 60);
}

#[test]
fn test_already_said_changes_nothing() {
    let mut engine = started(FinalRevealScoring::default());
    engine.guess("mareo");
    let before = engine.round().unwrap().clone();
    assert_eq!(engine.guess("MAREO "), FeudOutcome::AlreadySaid { index: 4 });
    assert_eq!(engine.round().unwrap(), &before);
}

#[test]
fn test_three_strikes_open_steal_once() {
    let mut engine = started(FinalRevealScoring::default());
    let starter = *engine.round().unwrap().active_team();

    assert_eq!(engine.guess("fiebre"), FeudOutcome::Strike { strikes: 1 });
    assert_eq!(engine.guess("tos"), FeudOutcome::Strike { strikes: 2 });
    assert!(!engine.round().unwrap().steal_mode());
    assert_eq!(
        engine.guess("insomnio"),
        FeudOutcome::StealChance { team: starter.opponent() }
    );

    let round = engine.round().unwrap();
    assert!(*round.steal_mode());
    assert_eq!(*round.strikes(), 0);
    assert_eq!(*round.active_team(), starter.opponent());
}

#[test]
fn test_failed_steal_pays_guessing_team() {
    let mut engine = started(FinalRevealScoring::default());
    let starter = *engine.round().unwrap().active_team();
    engine.guess("cansancio");
    engine.guess("antojos");
    for miss in ["fiebre", "tos", "insomnio"] {
        engine.guess(miss);
    }

    let outcome = engine.guess("hipo");
    let end = outcome.round_end().expect("steal miss ends the round");
    assert_eq!(*end.reason(), RoundEndReason::StealFailed);
    assert_eq!(*end.team(), starter);
    assert_eq!(*end.awarded(), 32);

    let round = engine.round().unwrap();
    assert_eq!(*round.strikes(), 1);
    assert!(round.is_over());
    assert_eq!(engine.scores().of(starter), 32);
    assert_eq!(engine.scores().of(starter.opponent()), 0);
}

#[test]
fn test_successful_steal_takes_the_round() {
    let mut engine = started(FinalRevealScoring::default());
    let starter = *engine.round().unwrap().active_team();
    engine.guess("nausea");
    for miss in ["fiebre", "tos", "insomnio"] {
        engine.guess(miss);
    }

    let outcome = engine.guess("mareo");
    let end = outcome.round_end().expect("steal hit ends the round");
    assert_eq!(*end.reason(), RoundEndReason::StealSucceeded);
    assert_eq!(*end.team(), starter.opponent());
    assert_eq!(*end.awarded(), 43);
    assert_eq!(engine.scores().of(starter.opponent()), 43);
    assert_eq!(engine.scores().of(starter), 0);
}

/// The classic award counts the last answer twice; this pins that down.
#[test]
fn test_board_clear_double_counts_final_answer() {
    let mut engine = started(FinalRevealScoring::DoubleCountFinal);
    let starter = *engine.round().unwrap().active_team();
    for guess in ["nausea", "dolor", "cansancio", "antojos"] {
        assert!(engine.guess(guess).round_end().is_none());
    }
    let end = engine.guess("mareo").round_end().unwrap();
    assert_eq!(*end.reason(), RoundEndReason::BoardCleared);
    assert_eq!(*engine.round().unwrap().round_points(), 100);
    assert_eq!(*end.awarded(), 108);
    assert_eq!(engine.scores().of(starter), 108);
}

#[test]
fn test_board_clear_exact_scoring() {
    let mut engine = started(FinalRevealScoring::Exact);
    let starter = *engine.round().unwrap().active_team();
    for guess in ["nausea", "dolor", "cansancio", "antojos", "mareo"] {
        engine.guess(guess);
    }
    assert_eq!(engine.scores().of(starter), 100);
}

#[test]
fn test_scores_carry_over_and_round_resets() {
    let mut engine = started(FinalRevealScoring::Exact);
    let first = *engine.round().unwrap().active_team();
    for guess in ["nausea", "dolor", "cansancio", "antojos", "mareo"] {
        engine.guess(guess);
    }

    let round = engine.start_round(pregnancy_question()).unwrap();
    assert_eq!(*round.active_team(), first.opponent());
    assert_eq!(*round.round_points(), 0);
    assert_eq!(*round.strikes(), 0);
    assert!(!round.steal_mode());
    assert!(round.revealed().iter().all(|r| !r));
    assert_eq!(engine.scores().of(first), 100);
    assert_eq!(engine.scores().of(Team::One) + engine.scores().of(Team::Two), 100);
}

#[test]
fn test_huge_point_values_saturate() {
    let mut engine = FeudEngine::new(FinalRevealScoring::DoubleCountFinal);
    let question = FeudQuestion::new(
        "Puntos generados",
        vec![
            FeudAnswer::new("a", u32::MAX),
            FeudAnswer::new("b", 1),
            FeudAnswer::new("c", 1),
        ],
    );
    let starter = *engine.start_round(question.clone()).unwrap().active_team();

    engine.guess("a");
    engine.guess("b");
    assert_eq!(*engine.round().unwrap().round_points(), u32::MAX);
    let end = engine.guess("c").round_end().unwrap();
    assert_eq!(*end.awarded(), u32::MAX);
    assert_eq!(engine.scores().of(starter), u32::MAX);

    // The starter wins this round by stealing.
    engine.start_round(question.clone()).unwrap();
    for miss in ["x", "y", "z"] {
        engine.guess(miss);
    }
    engine.guess("a");
    assert_eq!(engine.scores().of(starter), u32::MAX);
}

#[test]
fn test_already_said_during_steal_keeps_the_chance() {
    let mut engine = started(FinalRevealScoring::default());
    let starter = *engine.round().unwrap().active_team();
    engine.guess("nausea");
    for miss in ["fiebre", "tos", "insomnio"] {
        engine.guess(miss);
    }

    assert_eq!(engine.guess("NAUSEA"), FeudOutcome::AlreadySaid { index: 0 });
    let round = engine.round().unwrap();
    assert!(*round.steal_mode());
    assert!(!round.is_over());
    assert_eq!(*round.active_team(), starter.opponent());
    assert_eq!(engine.scores().of(starter), 0);

    let end = engine.guess("dolor").round_end().unwrap();
    assert_eq!(*end.reason(), RoundEndReason::StealSucceeded);
}
