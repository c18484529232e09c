//! Loose answer matching used by the feud and trivia checks.

use tracing::{instrument, trace};

/// Lowercases and trims a player's text.
#[instrument]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True when either normalized string contains the other.
///
/// Empty input never matches, otherwise it would be contained in every
/// answer.
#[instrument]
pub fn loosely_matches(guess: &str, expected: &str) -> bool {
    let guess = normalize(guess);
    let expected = normalize(expected);
    if guess.is_empty() || expected.is_empty() {
        return false;
    }
    let matched = guess.contains(&expected) || expected.contains(&guess);
    trace!(%guess, %expected, matched, "Compared answer");
    matched
}
