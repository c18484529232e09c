//! Line-oriented terminal front-end.
//!
//! Reads one command per line and prints plain text. The console is
//! generic over its input and output so tests can drive it with byte
//! buffers; the binary hands it stdin and stdout.

mod games;
mod study;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::navigation::{Navigator, View};
use crate::provider::ContentProvider;
use biolab_games::TopicId;
use std::io;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};

const UNAVAILABLE: &str = "No se pudo cargar el contenido. Intenta de nuevo más tarde.";
const LOADING: &str = "Generando contenido...";
const INVALID: &str = "Opción no válida.";

/// Interactive console over any line source and text sink.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
    provider: Arc<dyn ContentProvider>,
    config: AppConfig,
    nav: Navigator,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a console reading commands from `input`.
    #[instrument(skip_all)]
    pub fn new(input: R, out: W, provider: Arc<dyn ContentProvider>, config: AppConfig) -> Self {
        Self {
            lines: input.lines(),
            out,
            provider,
            config,
            nav: Navigator::new(),
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs one CLI command to completion.
    #[instrument(skip(self))]
    pub async fn run(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Topics => self.list_topics().await,
            Command::Study { topic } => self.show(View::Activities(topic)).await,
            Command::Quiz { topic } => self.show(View::Quiz(topic)).await,
            Command::Play { game } => self.show(View::Game(game)).await,
            Command::Menu => self.menu().await,
        }
    }

    /// Prints every topic with its id.
    #[instrument(skip(self))]
    pub async fn list_topics(&mut self) -> io::Result<()> {
        for topic in TopicId::iter() {
            self.say(format!("{:<14} {}: {}", topic, topic.title(), topic.description()))
                .await?;
        }
        Ok(())
    }

    /// Home screen loop; returns on `q` or end of input.
    #[instrument(skip(self))]
    pub async fn menu(&mut self) -> io::Result<()> {
        let entries = Navigator::menu();
        loop {
            self.nav.home();
            self.say(format!("\n== {} ==", View::Home.title())).await?;
            for (i, view) in entries.iter().enumerate() {
                self.say(format!("{:>2}. {}", i + 1, view.title())).await?;
            }
            let Some(line) = self.prompt("Elige una opción (q para salir)").await? else {
                return Ok(());
            };
            if is_quit(&line) {
                info!("Leaving menu");
                return Ok(());
            }
            match parse_index(&line, entries.len()) {
                Some(i) => self.show(entries[i]).await?,
                None => self.say(INVALID).await?,
            }
        }
    }

    /// Runs the screen for `view` until the player leaves it.
    #[instrument(skip(self))]
    async fn show(&mut self, view: View) -> io::Result<()> {
        self.nav.go(view);
        self.say(format!("\n== {} ==", view.title())).await?;
        let result = match view {
            View::Home => Ok(()),
            View::Activities(topic) => self.flashcards(topic).await,
            View::Quiz(topic) => self.quiz(topic).await,
            View::Game(game) => self.play(game).await,
        };
        self.nav.back();
        result
    }

    async fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        self.out.write_all(text.as_ref().as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    /// Prints `text` as a prompt and reads the reply. `None` at end of input.
    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n> ").await?;
        self.out.flush().await?;
        let line = self.lines.next_line().await?;
        debug!(?line, "Input");
        Ok(line.map(|l| l.trim().to_string()))
    }
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q")
}

/// Parses a 1-based menu choice into a 0-based index below `len`.
fn parse_index(line: &str, len: usize) -> Option<usize> {
    line.parse::<usize>()
        .ok()
        .filter(|&n| (1..=len).contains(&n))
        .map(|n| n - 1)
}
