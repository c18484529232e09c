use super::{Console, INVALID, LOADING, UNAVAILABLE, is_quit, parse_index};
use crate::session::{ActivitySession, QuizSession};
use biolab_games::{SelectionOutcome, TopicId};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::instrument;

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Flashcard loop: `n` next, `p` previous, `f` flip, `q` back.
    #[instrument(skip(self))]
    pub(super) async fn flashcards(&mut self, topic: TopicId) -> io::Result<()> {
        self.say(LOADING).await?;
        let Ok(mut session) = ActivitySession::load(self.provider.clone(), topic).await else {
            return self.say(UNAVAILABLE).await;
        };

        loop {
            let browser = session.browser();
            let (n, total) = browser.position();
            let card = browser.current();
            let face = if *browser.flipped() {
                format!("{}: {}", card.term(), card.definition())
            } else {
                card.term().clone()
            };
            self.say(format!("\nTarjeta {} de {}\n  {}", n, total, face)).await?;

            let Some(line) = self
                .prompt("[n] siguiente  [p] anterior  [f] voltear  [q] volver")
                .await?
            else {
                return Ok(());
            };
            match line.to_lowercase().as_str() {
                "n" => {
                    session.next();
                }
                "p" => {
                    session.prev();
                }
                "f" => {
                    session.flip();
                }
                l if is_quit(l) => return Ok(()),
                _ => self.say(INVALID).await?,
            }
        }
    }

    /// Quiz loop: answer by option number, then a summary with a retry.
    #[instrument(skip(self))]
    pub(super) async fn quiz(&mut self, topic: TopicId) -> io::Result<()> {
        self.say(LOADING).await?;
        let Ok(mut session) = QuizSession::load(self.provider.clone(), topic).await else {
            return self.say(UNAVAILABLE).await;
        };

        loop {
            if *session.runner().completed() {
                let runner = session.runner();
                let summary = format!(
                    "\nPuntaje: {} de {} ({:.0}%)\n{}",
                    runner.score(),
                    runner.questions().len(),
                    runner.percentage(),
                    runner.verdict().message()
                );
                self.say(summary).await?;
                let Some(line) = self.prompt("[r] intentar de nuevo  [q] volver").await? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("r") {
                    self.say(LOADING).await?;
                    if session.restart().await.is_err() {
                        return self.say(UNAVAILABLE).await;
                    }
                    continue;
                }
                return Ok(());
            }

            let runner = session.runner();
            let question = runner.current();
            let mut text = format!(
                "\nPregunta {} de {}\n{}",
                runner.index() + 1,
                runner.questions().len(),
                question.question()
            );
            for (i, option) in question.options().iter().enumerate() {
                text.push_str(&format!("\n  {}. {}", i + 1, option));
            }
            let options = question.options().len();
            self.say(text).await?;

            let Some(line) = self.prompt("Tu respuesta (q para salir)").await? else {
                return Ok(());
            };
            if is_quit(&line) {
                return Ok(());
            }
            let Some(choice) = parse_index(&line, options) else {
                self.say(INVALID).await?;
                continue;
            };

            match session.select(choice) {
                SelectionOutcome::Answered {
                    correct,
                    correct_option,
                    explanation,
                } => {
                    let mut feedback = if correct {
                        "¡Correcto!".to_string()
                    } else {
                        let right = session
                            .runner()
                            .current()
                            .options()
                            .get(correct_option)
                            .cloned()
                            .unwrap_or_default();
                        format!("Incorrecto. La respuesta era: {}", right)
                    };
                    if let Some(explanation) = explanation {
                        feedback.push_str(&format!("\n{}", explanation));
                    }
                    self.say(feedback).await?;
                    session.advance();
                }
                SelectionOutcome::Ignored(reason) => self.say(reason.to_string()).await?,
            }
        }
    }
}
