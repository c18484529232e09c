//! Tests for the hangman round state machine.

use biolab_games::{GuessOutcome, HangmanRound, HangmanStatus, IllegalTransition, MAX_MISTAKES};

#[test]
fn test_mistakes_never_decrease() {
    let mut round = HangmanRound::new("Progesterona", "Hormona del cuerpo lúteo");
    let mut last = 0;
    for letter in "XPZROWKGJ".chars() {
        round.guess_letter(letter);
        assert!(*round.mistakes() >= last);
        last = *round.mistakes();
    }
}

#[test]
fn test_lost_exactly_at_sixth_miss() {
    let mut round = HangmanRound::new("ovulo", "Gameto femenino");
    for (i, letter) in "ABCDEF".chars().enumerate() {
        let outcome = round.guess_letter(letter);
        let expected = if i + 1 == MAX_MISTAKES as usize {
            HangmanStatus::Lost
        } else {
            HangmanStatus::Playing
        };
        assert_eq!(
            outcome,
            GuessOutcome::Miss {
                letter,
                mistakes: (i + 1) as u8,
                status: expected,
            }
        );
    }
    assert_eq!(*round.status(), HangmanStatus::Lost);
    assert_eq!(round.masked_word(), "OVULO");
}

#[test]
fn test_won_regardless_of_mistakes() {
    let mut round = HangmanRound::new("LH", "Hormona luteinizante");
    for letter in "ABCDE".chars() {
        round.guess_letter(letter);
    }
    assert_eq!(*round.mistakes(), 5);
    round.guess_letter('L');
    assert_eq!(*round.status(), HangmanStatus::Playing);
    assert_eq!(
        round.guess_letter('H'),
        GuessOutcome::Hit {
            letter: 'H',
            status: HangmanStatus::Won,
        }
    );
}

#[test]
fn test_repeated_letter_is_ignored() {
    let mut round = HangmanRound::new("feto", "d");
    round.guess_letter('Z');
    assert_eq!(
        round.guess_letter('z'),
        GuessOutcome::Ignored(IllegalTransition::AlreadyGuessed('Z'))
    );
    assert_eq!(*round.mistakes(), 1);
}

#[test]
fn test_finished_round_accepts_no_guesses() {
    let mut round = HangmanRound::new("FSH", "d");
    for letter in "FSH".chars() {
        round.guess_letter(letter);
    }
    assert_eq!(*round.status(), HangmanStatus::Won);
    assert_eq!(
        round.guess_letter('Q'),
        GuessOutcome::Ignored(IllegalTransition::RoundOver)
    );
    assert_eq!(*round.mistakes(), 0);
}

#[test]
fn test_enye_is_a_letter() {
    let mut round = HangmanRound::new("Niño", "d");
    for letter in "NIO".chars() {
        round.guess_letter(letter);
    }
    assert_eq!(*round.status(), HangmanStatus::Playing);
    round.guess_letter('ñ');
    assert_eq!(*round.status(), HangmanStatus::Won);
}
