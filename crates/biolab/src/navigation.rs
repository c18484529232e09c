//! Which screen is showing.

use biolab_games::{GameKind, TopicId};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A screen of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Topic and game menu.
    #[default]
    Home,
    /// Flashcards for a topic.
    Activities(TopicId),
    /// Quiz for a topic.
    Quiz(TopicId),
    /// One of the games.
    Game(GameKind),
}

impl View {
    /// Heading shown above the screen.
    pub fn title(self) -> String {
        match self {
            View::Home => "BioLab: Reproducción Humana".to_string(),
            View::Activities(topic) => format!("Actividades: {}", topic.title()),
            View::Quiz(topic) => format!("Quiz: {}", topic.title()),
            View::Game(game) => game.title().to_string(),
        }
    }
}

/// Navigation shell with a back stack.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
    history: Vec<View>,
}

impl Navigator {
    /// Starts on the home screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen now showing.
    pub fn current(&self) -> View {
        self.current
    }

    /// Moves to `view`; returning to the current screen is a no-op.
    #[instrument(skip(self))]
    pub fn go(&mut self, view: View) {
        if view == self.current {
            return;
        }
        debug!(from = ?self.current, to = ?view, "Navigating");
        self.history.push(self.current);
        self.current = view;
    }

    /// Returns to the previous screen. False when already at the start.
    #[instrument(skip(self))]
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(view) => {
                self.current = view;
                true
            }
            None => false,
        }
    }

    /// Jumps home and forgets the history.
    pub fn home(&mut self) {
        self.history.clear();
        self.current = View::Home;
    }

    /// Menu entries in the order the home screen lists them: every topic's
    /// flashcards and quiz, then every game.
    pub fn menu() -> Vec<View> {
        TopicId::iter()
            .flat_map(|topic| [View::Activities(topic), View::Quiz(topic)])
            .chain(GameKind::iter().map(View::Game))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_walks_the_history() {
        let mut nav = Navigator::new();
        nav.go(View::Activities(TopicId::Menstrual));
        nav.go(View::Quiz(TopicId::Menstrual));
        assert!(nav.back());
        assert_eq!(nav.current(), View::Activities(TopicId::Menstrual));
        assert!(nav.back());
        assert_eq!(nav.current(), View::Home);
        assert!(!nav.back());
    }

    #[test]
    fn revisiting_the_current_view_keeps_history_flat() {
        let mut nav = Navigator::new();
        nav.go(View::Game(GameKind::Feud));
        nav.go(View::Game(GameKind::Feud));
        assert!(nav.back());
        assert!(!nav.back());
    }

    #[test]
    fn menu_lists_topics_then_games() {
        let menu = Navigator::menu();
        assert_eq!(menu.len(), 5 * 2 + 4);
        assert_eq!(menu[0], View::Activities(TopicId::HumanRepro));
        assert_eq!(menu.last(), Some(&View::Game(GameKind::Feud)));
    }

    #[test]
    fn titles_use_topic_names() {
        assert_eq!(
            View::Quiz(TopicId::FetalDev).title(),
            "Quiz: Desarrollo Fetal"
        );
    }
}
