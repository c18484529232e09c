use super::{Console, INVALID, LOADING, UNAVAILABLE, is_quit, parse_index};
use crate::session::{FeudSession, HangmanSession, JeopardySession, TicTacToeSession};
use biolab_games::tictactoe::{AnswerOutcome, GameStatus, SelectOutcome};
use biolab_games::{
    FeudOutcome, FeudRound, GameKind, GuessOutcome, HangmanStatus, JeopardyEngine,
    JeopardyOutcome, KEYBOARD, MAX_MISTAKES, MAX_STRIKES, RoundEnd, RoundEndReason, Team, TeamScores,
};
use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::instrument;

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    #[instrument(skip(self))]
    pub(super) async fn play(&mut self, game: GameKind) -> io::Result<()> {
        match game {
            GameKind::TicTacToe => self.tictactoe().await,
            GameKind::Hangman => self.hangman().await,
            GameKind::Jeopardy => self.jeopardy().await,
            GameKind::Feud => self.feud().await,
        }
    }

    async fn tictactoe(&mut self) -> io::Result<()> {
        let mut session = TicTacToeSession::new(self.provider.clone());
        loop {
            let engine = session.engine();
            self.say(format!("\n{}", engine.board().display())).await?;

            let finished = match *engine.status() {
                GameStatus::InProgress => None,
                GameStatus::Won(player) => Some(format!("¡Gana el jugador {}!", player.symbol())),
                GameStatus::Draw => Some("Empate.".to_string()),
            };
            if let Some(message) = finished {
                self.say(message).await?;
                let Some(line) = self.prompt("[r] otra partida  [q] volver").await? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("r") {
                    session.reset();
                    continue;
                }
                return Ok(());
            }

            let player = engine.current_player().symbol();
            let Some(line) = self
                .prompt(&format!("Turno de {}: elige una casilla 1-9 (q para salir)", player))
                .await?
            else {
                return Ok(());
            };
            if is_quit(&line) {
                return Ok(());
            }
            let Some(cell) = parse_index(&line, 9) else {
                self.say(INVALID).await?;
                continue;
            };

            match session.select_cell(cell).await {
                Err(_) => {
                    self.say(UNAVAILABLE).await?;
                    continue;
                }
                Ok(SelectOutcome::Ignored(reason)) => {
                    self.say(reason.to_string()).await?;
                    continue;
                }
                Ok(SelectOutcome::Opened(_)) => {}
            }

            let question = session
                .challenge()
                .map(|trivia| trivia.question().clone())
                .unwrap_or_default();
            let Some(answer) = self.prompt(&format!("Trivia: {}", question)).await? else {
                return Ok(());
            };
            let message = match session.submit_answer(&answer) {
                AnswerOutcome::Placed { cell, player, .. } => {
                    format!("¡Correcto! {} ocupa la casilla {}.", player.symbol(), cell + 1)
                }
                AnswerOutcome::Forfeited {
                    correct_answer,
                    player,
                    ..
                } => format!(
                    "Incorrecto. La respuesta era: {}. {} pierde el turno.",
                    correct_answer,
                    player.symbol()
                ),
                AnswerOutcome::Ignored(reason) => reason.to_string(),
            };
            self.say(message).await?;
        }
    }

    async fn hangman(&mut self) -> io::Result<()> {
        let mut session = HangmanSession::new(self.provider.clone(), *self.config.hangman_topic());
        self.say(LOADING).await?;
        if session.new_round().await.is_err() {
            return self.say(UNAVAILABLE).await;
        }

        loop {
            let Some(round) = session.engine().round() else {
                return self.say(UNAVAILABLE).await;
            };
            let guessed: String = round.guessed().iter().collect();
            let keys: Vec<String> = KEYBOARD
                .chars()
                .filter(|c| !round.guessed().contains(c))
                .map(String::from)
                .collect();
            let status = *round.status();
            let board = format!(
                "\n{}\nPista: {}\nErrores: {}/{}  Letras usadas: {}\nTeclado: {}",
                spaced(&round.masked_word()),
                round.definition(),
                round.mistakes(),
                MAX_MISTAKES,
                guessed,
                keys.join(" ")
            );
            let word = round.word().clone();
            self.say(board).await?;

            if status != HangmanStatus::Playing {
                let message = if status == HangmanStatus::Won {
                    format!("¡Ganaste! La palabra era {}.", word)
                } else {
                    format!("Perdiste. La palabra era {}.", word)
                };
                self.say(message).await?;
                let Some(line) = self.prompt("[n] otra palabra  [q] volver").await? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("n") {
                    if session.new_round().await.is_err() {
                        return self.say(UNAVAILABLE).await;
                    }
                    continue;
                }
                return Ok(());
            }

            let Some(line) = self.prompt("Letra (q para salir)").await? else {
                return Ok(());
            };
            if is_quit(&line) {
                return Ok(());
            }
            let mut chars = line.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                self.say("Escribe una sola letra.").await?;
                continue;
            };
            let message = match session.guess_letter(letter) {
                GuessOutcome::Hit { letter, .. } => format!("¡Bien! La {} está en la palabra.", letter),
                GuessOutcome::Miss { letter, .. } => format!("La {} no está.", letter),
                GuessOutcome::Ignored(reason) => reason.to_string(),
            };
            self.say(message).await?;
        }
    }

    async fn jeopardy(&mut self) -> io::Result<()> {
        let mut session = JeopardySession::new(self.provider.clone());
        self.say(LOADING).await?;
        if session.load_board().await.is_err() {
            return self.say(UNAVAILABLE).await;
        }

        loop {
            let Some(engine) = session.engine() else {
                return self.say(UNAVAILABLE).await;
            };
            let complete = engine.is_complete();
            let board = render_board(engine);
            self.say(board).await?;

            if complete {
                let Some(line) = self.prompt("¡Tablero completo! [r] nuevo tablero  [q] volver").await? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("r") {
                    self.say(LOADING).await?;
                    if session.load_board().await.is_err() {
                        return self.say(UNAVAILABLE).await;
                    }
                    continue;
                }
                return Ok(());
            }

            let Some(line) = self
                .prompt("Categoría y fila, por ejemplo \"1 2\" (q para salir)")
                .await?
            else {
                return Ok(());
            };
            if is_quit(&line) {
                return Ok(());
            }
            let cell = match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                [c, q] => c.parse::<usize>().ok().zip(q.parse::<usize>().ok()),
                _ => None,
            };
            let Some((category, question)) = cell.filter(|&(c, q)| c > 0 && q > 0) else {
                self.say(INVALID).await?;
                continue;
            };

            if let JeopardyOutcome::Ignored(reason) = session.open_cell(category - 1, question - 1) {
                self.say(reason.to_string()).await?;
                continue;
            }
            let clue = session
                .engine()
                .and_then(JeopardyEngine::active_clue)
                .map(|clue| (clue.question().clone(), clue.answer().clone()));
            let Some((question, answer)) = clue else {
                continue;
            };

            if self
                .prompt(&format!("{}\n(Enter para ver la respuesta)", question))
                .await?
                .is_none()
            {
                return Ok(());
            }
            session.reveal();
            let Some(line) = self
                .prompt(&format!("Respuesta: {}\n¿Acertaste? [s/n]", answer))
                .await?
            else {
                return Ok(());
            };
            let correct = line.eq_ignore_ascii_case("s") || line.eq_ignore_ascii_case("si");
            if let JeopardyOutcome::Resolved { delta, score } = session.resolve(correct) {
                self.say(format!("{:+} puntos. Puntaje: {}", delta, score)).await?;
            }
        }
    }

    async fn feud(&mut self) -> io::Result<()> {
        let mut session = FeudSession::new(
            self.provider.clone(),
            *self.config.final_reveal_scoring(),
            self.config.round_advance(),
        );
        self.say(LOADING).await?;
        if session.start_round().await.is_err() {
            return self.say(UNAVAILABLE).await;
        }

        loop {
            let Some(round) = session.engine().round() else {
                return self.say(UNAVAILABLE).await;
            };
            let board = render_feud(round, session.engine().scores());
            self.say(board).await?;

            let Some(line) = self
                .prompt("Respuesta ([saltar] nueva pregunta, q para salir)")
                .await?
            else {
                return Ok(());
            };
            if is_quit(&line) {
                return Ok(());
            }
            if line.eq_ignore_ascii_case("saltar") {
                if session.skip_round().await.is_err() {
                    return self.say(UNAVAILABLE).await;
                }
                continue;
            }

            let outcome = session.guess(&line);
            let message = match &outcome {
                FeudOutcome::Correct { index, points, .. } => {
                    format!("¡Está en el tablero! Respuesta #{} vale {} puntos.", index + 1, points)
                }
                FeudOutcome::AlreadySaid { .. } => "Esa respuesta ya está en el tablero.".to_string(),
                FeudOutcome::Strike { strikes } => format!("¡Error! {}", "X ".repeat(usize::from(*strikes))),
                FeudOutcome::StealChance { team } => format!(
                    "¡Tres errores! El equipo {} puede robar con una respuesta.",
                    team.number()
                ),
                FeudOutcome::StealFailed(_) => "Robo fallido.".to_string(),
                FeudOutcome::Ignored(reason) => reason.to_string(),
            };
            self.say(message).await?;

            if let Some(end) = outcome.round_end() {
                let delay = self.config.round_advance().as_secs();
                self.say(format!("{}\nSiguiente pregunta en {} s...", round_summary(&end), delay))
                    .await?;
                if session.await_next_round().await.is_err() {
                    return self.say(UNAVAILABLE).await;
                }
            }
        }
    }
}

fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_board(engine: &JeopardyEngine) -> String {
    let mut text = format!("\nPuntaje: {}", engine.score());
    for (c, category) in engine.categories().iter().enumerate() {
        let cells: Vec<String> = category
            .questions()
            .iter()
            .enumerate()
            .map(|(q, clue)| {
                if engine.is_answered(c, q) {
                    "[ --- ]".to_string()
                } else {
                    format!("[{:^5}]", clue.points())
                }
            })
            .collect();
        text.push_str(&format!("\n{}. {:<14} {}", c + 1, category.category(), cells.join(" ")));
    }
    text
}

fn render_feud(round: &FeudRound, scores: &TeamScores) -> String {
    let mut text = format!(
        "\nEquipo 1: {}   Equipo 2: {}   Ronda: {}\n{}",
        scores.of(Team::One),
        scores.of(Team::Two),
        round.round_points(),
        round.question()
    );
    for (i, (answer, shown)) in round.answers().iter().zip(round.revealed()).enumerate() {
        if *shown {
            text.push_str(&format!("\n  {}. {:<20} {:>3}", i + 1, answer.answer(), answer.points()));
        } else {
            text.push_str(&format!("\n  {}. {}", i + 1, "_".repeat(20)));
        }
    }
    let turn = if *round.steal_mode() {
        format!("Robo: equipo {}", round.active_team().number())
    } else {
        format!(
            "Turno: equipo {}  Errores: {}/{}",
            round.active_team().number(),
            round.strikes(),
            MAX_STRIKES
        )
    };
    text.push_str(&format!("\n{}", turn));
    text
}

fn round_summary(end: &RoundEnd) -> String {
    let how = match end.reason() {
        RoundEndReason::BoardCleared => "completó el tablero",
        RoundEndReason::StealSucceeded => "robó la ronda",
        RoundEndReason::StealFailed => "conserva la ronda",
    };
    format!("El equipo {} {} y gana {} puntos.", end.team().number(), how, end.awarded())
}
