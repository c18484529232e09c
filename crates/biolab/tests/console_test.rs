//! Drives the console with scripted input and checks what it prints.

use biolab::cli::Command;
use biolab::{AppConfig, Console, ScriptedContentProvider};
use biolab_games::{Definition, FinalRevealScoring, GameKind, TopicId};
use std::sync::Arc;

async fn run(provider: ScriptedContentProvider, config: AppConfig, command: Command, input: &str) -> String {
    let mut console = Console::new(input.as_bytes(), Vec::new(), Arc::new(provider), config);
    console.run(command).await.unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn quick_config() -> AppConfig {
    AppConfig::default()
        .with_round_advance_ms(0u64)
        .with_final_reveal_scoring(FinalRevealScoring::Exact)
}

#[tokio::test]
async fn test_topics_lists_every_topic() {
    let out = run(ScriptedContentProvider::empty(), AppConfig::default(), Command::Topics, "").await;

    assert!(out.contains("human_repro"));
    assert!(out.contains("Sistema Femenino"));
    assert_eq!(out.lines().count(), 5);
}

#[tokio::test]
async fn test_flashcards_flip_and_wrap() {
    let out = run(
        ScriptedContentProvider::sample(),
        AppConfig::default(),
        Command::Study {
            topic: TopicId::HumanRepro,
        },
        "f\np\nx\nq\n",
    )
    .await;

    assert!(out.contains("Tarjeta 1 de 10"));
    assert!(out.contains("Gameto: Célula sexual haploide"));
    assert!(out.contains("Tarjeta 10 de 10"));
    assert!(out.contains("Opción no válida."));
}

#[tokio::test]
async fn test_missing_content_shows_message() {
    let out = run(
        ScriptedContentProvider::empty(),
        AppConfig::default(),
        Command::Quiz {
            topic: TopicId::MaleSystem,
        },
        "",
    )
    .await;

    assert!(out.contains("No se pudo cargar el contenido."));
}

#[tokio::test]
async fn test_quiz_reports_verdict() {
    // Sample answers: 2, 3, 4, 1 are all correct.
    let out = run(
        ScriptedContentProvider::sample(),
        AppConfig::default(),
        Command::Quiz {
            topic: TopicId::Menstrual,
        },
        "2\n3\n4\n2\nq\n",
    )
    .await;

    assert!(out.contains("Pregunta 1 de 4"));
    assert!(out.contains("Incorrecto. La respuesta era: 28 días"));
    assert!(out.contains("Puntaje: 3 de 4 (75%)"));
    assert!(out.contains("Buen intento, sigue estudiando."));
}

#[tokio::test]
async fn test_tictactoe_turns_pass_on_wrong_answers() {
    let out = run(
        ScriptedContentProvider::sample(),
        AppConfig::default(),
        Command::Play {
            game: GameKind::TicTacToe,
        },
        "5\novario\n5\n1\nno sé\nq\n",
    )
    .await;

    assert!(out.contains("¡Correcto! X ocupa la casilla 5."));
    assert!(out.contains("Cell 4 is already occupied"));
    assert!(out.contains("Incorrecto. La respuesta era: Cigoto. O pierde el turno."));
}

#[tokio::test]
async fn test_jeopardy_cell_is_scored() {
    let out = run(
        ScriptedContentProvider::sample(),
        AppConfig::default(),
        Command::Play {
            game: GameKind::Jeopardy,
        },
        "1 1\n\ns\n1 1\nq\n",
    )
    .await;

    assert!(out.contains("Órgano que nutre al feto"));
    assert!(out.contains("Respuesta: Placenta"));
    assert!(out.contains("+100 puntos. Puntaje: 100"));
    assert!(out.contains("already answered"));
}

#[tokio::test]
async fn test_feud_round_ends_and_next_question_loads() {
    let out = run(
        ScriptedContentProvider::sample(),
        quick_config(),
        Command::Play {
            game: GameKind::Feud,
        },
        "náuseas\ncansancio\nantojos\nmareos\ndolor\nq\n",
    )
    .await;

    assert!(out.contains("Menciona un síntoma común del embarazo"));
    assert!(out.contains("El equipo 2 completó el tablero y gana 100 puntos."));
    assert!(out.contains("Menciona una parte del aparato reproductor femenino"));
    assert!(out.contains("Equipo 1: 0   Equipo 2: 100"));
}

#[tokio::test]
async fn test_menu_opens_a_game_and_quits() {
    let out = run(
        ScriptedContentProvider::sample(),
        quick_config(),
        Command::Menu,
        "99\n12\nq\nq\n",
    )
    .await;

    assert!(out.contains("== BioLab: Reproducción Humana =="));
    assert!(out.contains("Opción no válida."));
    assert!(out.contains("== El Ahorcado =="));
    assert!(out.contains("Pista:"));
}

#[tokio::test]
async fn test_hangman_keyboard_drops_guessed_letters() {
    let provider = ScriptedContentProvider::empty()
        .with_definitions(vec![Definition::new("Ovulo", "Gameto femenino")]);
    let out = run(
        provider,
        AppConfig::default(),
        Command::Play {
            game: GameKind::Hangman,
        },
        "o\nq\n",
    )
    .await;

    assert!(out.contains("Teclado: A B C D E F G H I J K L M N Ñ O P Q R S T U V W X Y Z"));
    assert!(out.contains("¡Bien! La O está en la palabra."));
    assert!(out.contains("Teclado: A B C D E F G H I J K L M N Ñ P Q R S T U V W X Y Z"));
}
