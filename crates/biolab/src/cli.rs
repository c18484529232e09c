//! Command-line interface for biolab.

use biolab_games::{GameKind, TopicId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BioLab - study cards, quizzes and games about human reproduction
#[derive(Parser, Debug)]
#[command(name = "biolab")]
#[command(about = "Study cards, quizzes and trivia games about human reproduction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (defaults to ./biolab.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Serve built-in sample content instead of calling an LLM
    #[arg(long, global = true)]
    pub offline: bool,

    /// Subcommand to run (the interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the study topics
    Topics,

    /// Browse a topic's flashcards
    Study {
        /// Topic id (human_repro, fetal_dev, menstrual, male_system, female_system)
        #[arg(short, long)]
        topic: TopicId,
    },

    /// Take a topic's quiz
    Quiz {
        /// Topic id (human_repro, fetal_dev, menstrual, male_system, female_system)
        #[arg(short, long)]
        topic: TopicId,
    },

    /// Play a game (tictactoe, hangman, jeopardy, feud)
    Play {
        /// Game to play
        game: GameKind,
    },

    /// Open the interactive menu
    Menu,
}
